use std::{
    io::IsTerminal,
    sync::{OnceLock, RwLock},
};

use colored::{Color, Colorize};

use crate::config::{ColorScheme, Config};

/// Terminal presentation settings derived from the config and the environment.
#[derive(Debug, Clone)]
pub struct UiStyle {
    pub use_color: bool,
    pub plain_mode: bool,
    pub high_contrast: bool,
    pub use_icons: bool,
    pub color_header: Option<Color>,
    pub color_total: Option<Color>,
}

static STYLE: OnceLock<RwLock<UiStyle>> = OnceLock::new();

/// Current global style. Plain until [`apply_config`] runs.
pub fn style() -> UiStyle {
    STYLE
        .get_or_init(|| RwLock::new(UiStyle::plain()))
        .read()
        .map(|guard| guard.clone())
        .unwrap_or_else(|_| UiStyle::plain())
}

pub fn apply_config(config: &Config) {
    let detected = UiStyle::detect(config);
    let lock = STYLE.get_or_init(|| RwLock::new(UiStyle::plain()));
    if let Ok(mut guard) = lock.write() {
        *guard = detected;
    }
}

impl UiStyle {
    pub fn plain() -> Self {
        Self {
            use_color: false,
            plain_mode: true,
            high_contrast: false,
            use_icons: false,
            color_header: None,
            color_total: None,
        }
    }

    pub fn detect(config: &Config) -> Self {
        let stdout_tty = std::io::stdout().is_terminal();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        Self::resolve(config, stdout_tty, no_color)
    }

    /// Pure resolution used by [`UiStyle::detect`].
    pub fn resolve(config: &Config, stdout_tty: bool, no_color: bool) -> Self {
        let plain_mode = config.accessibility.plain_output;
        let high_contrast = config.accessibility.high_contrast;
        let use_color = stdout_tty && config.ui_color_enabled && !plain_mode && !no_color;

        let (header, total) = match config.color_scheme {
            ColorScheme::Light => (Color::Blue, Color::Green),
            ColorScheme::Dark => (Color::BrightCyan, Color::BrightGreen),
        };

        Self {
            use_color,
            plain_mode,
            high_contrast,
            use_icons: !plain_mode,
            color_header: use_color.then_some(header),
            color_total: use_color.then_some(total),
        }
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match (self.high_contrast, self.color_header) {
            (false, Some(color)) => text.color(color).bold().to_string(),
            _ => text.bold().to_string(),
        }
    }

    pub fn apply_total_style(&self, text: &str) -> String {
        if !self.use_color {
            return text.to_string();
        }
        match (self.high_contrast, self.color_total) {
            (false, Some(color)) => text.color(color).bold().to_string(),
            _ => text.bold().to_string(),
        }
    }
}
