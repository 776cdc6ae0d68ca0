use serde::{de::Deserializer, Deserialize, Serialize};
use std::fmt;

use pricing_domain::{PlanCatalog, PricingRules};

use crate::ConfigError;

/// Values read once at session start and handed to the pricing engine and CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rules: PricingRules,
    /// Replaces the built-in price list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PlanCatalog>,
    /// Flat enrollment discount preloaded for tiers that carry an enrollment fee.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_enrollment_discount: Option<f64>,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            rules: PricingRules::default(),
            catalog: None,
            saved_enrollment_discount: None,
            color_scheme: ColorScheme::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "USD".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// The supplied catalog, or the built-in one.
    pub fn catalog(&self) -> PlanCatalog {
        self.catalog
            .clone()
            .unwrap_or_else(|| PlanCatalog::standard().clone())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rules
            .validate()
            .map_err(|err| ConfigError::Invalid(err.to_string()))?;
        if let Some(discount) = self.saved_enrollment_discount {
            if !discount.is_finite() || discount < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "saved enrollment discount must be a non-negative amount, got {discount}"
                )));
            }
        }
        if !self.currency.eq_ignore_ascii_case("USD") {
            return Err(ConfigError::Invalid(format!(
                "only USD pricing is supported, got `{}`",
                self.currency
            )));
        }
        Ok(())
    }
}

/// Light or dark presentation preference, injected by the caller.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl ColorScheme {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| ColorScheme::from_str(v.trim()))
            .unwrap_or_default()
    }

    pub fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => ColorScheme::Dark,
            _ => ColorScheme::Light,
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for ColorScheme {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(ColorScheme::from_value(value))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
    #[serde(default)]
    pub high_contrast: bool,
}
