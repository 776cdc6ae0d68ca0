use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Plan not found: {0}")]
    PlanNotFound(String),
    #[error("Invalid pricing rules: {0}")]
    InvalidRules(String),
}

impl From<pricing_domain::BillingPeriodError> for CoreError {
    fn from(err: pricing_domain::BillingPeriodError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}

impl From<pricing_domain::RulesError> for CoreError {
    fn from(err: pricing_domain::RulesError) -> Self {
        CoreError::InvalidRules(err.0)
    }
}

impl From<pricing_domain::CatalogError> for CoreError {
    fn from(err: pricing_domain::CatalogError) -> Self {
        CoreError::InvalidInput(err.to_string())
    }
}
