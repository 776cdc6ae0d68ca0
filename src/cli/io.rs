use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;
use crate::cli::ui::formatting::Formatter;

pub fn print_info(message: impl fmt::Display) {
    Formatter::new().print_info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    Formatter::new().print_warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    Formatter::new().print_error(message);
}

pub fn print_hint(message: impl fmt::Display) {
    Formatter::new().print_detail(format!("hint: {message}"));
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Arrow-key selection; `None` when the user escapes.
pub fn select_item(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
    default: usize,
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(default)
        .interact_opt()
        .map_err(CommandError::from)
}

pub fn prompt_count(theme: &ColorfulTheme, prompt: &str) -> Result<u32, CommandError> {
    Input::<u32>::with_theme(theme)
        .with_prompt(prompt)
        .default(1)
        .validate_with(|value: &u32| -> Result<(), &str> {
            if *value < 1 {
                Err("At least one person must enroll")
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(CommandError::from)
}

/// Blank input means "not given".
pub fn prompt_optional_amount(
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<f64>, CommandError> {
    let input: String = Input::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)?;
    let trimmed = input.trim().trim_start_matches('$');
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CommandError::InvalidArguments(format!("`{}` is not a number", input.trim())))
}
