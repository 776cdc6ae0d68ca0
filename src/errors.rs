use pricing_config::ConfigError;
use pricing_core::CoreError;
use thiserror::Error;

/// Unified error type for the engine and configuration layers.
#[derive(Error, Debug)]
pub enum PricingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Plan not found: {0}")]
    PlanNotFound(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Config file I/O error: {0}")]
    ConfigIo(String),
}

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] PricingError),
    #[error("Invalid input: {0}")]
    Input(String),
    #[error("Command failed: {0}")]
    Command(String),
}

impl From<std::io::Error> for PricingError {
    fn from(err: std::io::Error) -> Self {
        PricingError::ConfigIo(err.to_string())
    }
}

impl From<CoreError> for PricingError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(message) => PricingError::InvalidInput(message),
            CoreError::PlanNotFound(message) => PricingError::PlanNotFound(message),
            CoreError::InvalidRules(message) => PricingError::ConfigError(message),
        }
    }
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(io) => PricingError::ConfigIo(io.to_string()),
            ConfigError::Serde(message) | ConfigError::Invalid(message) => {
                PricingError::ConfigError(message)
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        CliError::from(PricingError::from(err))
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        CliError::from(PricingError::from(err))
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}
