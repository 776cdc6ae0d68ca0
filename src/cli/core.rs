//! Command dispatch and shell context helpers.

use std::io;

use dialoguer::theme::ColorfulTheme;
use pricing_core::{CoreError, PricingSession};
use thiserror::Error;

use crate::config;
pub use crate::errors::CliError;
use crate::errors::PricingError;

use super::commands;
use super::io as cli_io;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};
use super::system_clock::clock_from_env;
use super::ui::{self, Banner};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] PricingError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CoreError> for CommandError {
    fn from(err: CoreError) -> Self {
        CommandError::Core(PricingError::from(err))
    }
}

impl From<CliError> for CommandError {
    fn from(err: CliError) -> Self {
        match err {
            CliError::Core(inner) => CommandError::Core(inner),
            CliError::Input(message) | CliError::Command(message) => {
                CommandError::InvalidArguments(message)
            }
        }
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<rustyline::error::ReadlineError> for CliError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    /// Loads the configuration once, resolves the session date and starts a pricing session.
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config_manager = config::default_manager();
        let config = config_manager.load()?;
        ui::apply_config(&config);

        let clock = clock_from_env()?;
        let session = PricingSession::start(
            config.catalog(),
            config.rules.clone(),
            clock.as_ref(),
            config.saved_enrollment_discount,
        )?;

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            session,
            config,
            config_path: config_manager.config_path().to_path_buf(),
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn prompt(&self) -> String {
        Banner::prompt(&self.session.period(), &ui::style())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        if entry.interactive_only && self.mode != CliMode::Interactive {
            return Err(CommandError::InvalidArguments(format!(
                "`{}` needs an interactive terminal. Use `quote` in scripts.",
                entry.name
            )));
        }
        let handler = entry.handler;
        tracing::debug!(command, status = %self.status(), "dispatching command");
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Ok(cli_io::confirm_action(&self.theme, "Exit shell?", true)?)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(&message);
                cli_io::print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            CommandError::Core(PricingError::PlanNotFound(name)) => {
                cli_io::print_error(format!("No plan named `{name}`."));
                cli_io::print_hint("Use `plans` to list the catalog.");
                Ok(())
            }
            other => {
                tracing::warn!(error = %other, "command failed");
                cli_io::print_error(&other);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_surface_as_pricing_errors() {
        let err = CommandError::from(CoreError::InvalidInput("enrollee count".into()));
        assert!(matches!(
            err,
            CommandError::Core(PricingError::InvalidInput(_))
        ));
        assert_eq!(err.to_string(), "Invalid input: enrollee count");
    }

    #[test]
    fn cli_input_errors_become_argument_errors() {
        let err = CommandError::from(CliError::Input("bad date".into()));
        assert!(matches!(err, CommandError::InvalidArguments(message) if message == "bad date"));
    }
}
