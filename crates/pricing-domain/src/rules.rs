//! Business constants that drive the pricing engine.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{period::BillingPeriod, plan::Program};

/// Card processing rate (3.99%).
pub const CC_RATE: f64 = 0.0399;
/// Enrollee count at which family pricing starts.
pub const FAMILY_PLAN_THRESHOLD: u32 = 3;
pub const FAMILY_ENROLLMENT_FEE: f64 = 99.0;
pub const STANDARD_MONTH_DAYS: u32 = 30;
/// Decimal places kept on the daily rate before multiplying by days remaining.
pub const DAILY_RATE_PRECISION: u32 = 10;

/// Program-level flat overrides applied once a group reaches the threshold.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FamilyPlanPolicy {
    pub threshold: u32,
    pub enrollment_fee: f64,
    /// Flat monthly amount per program. Programs without an entry keep per-person pricing.
    pub monthly_overrides: BTreeMap<Program, f64>,
}

impl FamilyPlanPolicy {
    pub fn applies(&self, enrollee_count: u32) -> bool {
        enrollee_count >= self.threshold
    }

    pub fn monthly_override(&self, program: Program) -> Option<f64> {
        self.monthly_overrides.get(&program).copied()
    }
}

impl Default for FamilyPlanPolicy {
    fn default() -> Self {
        Self {
            threshold: FAMILY_PLAN_THRESHOLD,
            enrollment_fee: FAMILY_ENROLLMENT_FEE,
            monthly_overrides: BTreeMap::from([
                (Program::JiuJitsu, 400.0),
                (Program::Combined, 470.0),
            ]),
        }
    }
}

/// Day count the monthly amount is spread over when prorating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProrationBasis {
    /// Actual length of the current month.
    #[default]
    CalendarMonth,
    /// Fixed 30-day month regardless of the calendar.
    StandardMonth,
}

impl ProrationBasis {
    pub fn divisor(self, period: &BillingPeriod) -> u32 {
        match self {
            ProrationBasis::CalendarMonth => period.total_days_in_month,
            ProrationBasis::StandardMonth => STANDARD_MONTH_DAYS,
        }
    }
}

impl fmt::Display for ProrationBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ProrationBasis::CalendarMonth => "calendar month",
            ProrationBasis::StandardMonth => "30-day month",
        };
        f.write_str(label)
    }
}

/// Rule set injected into every calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRules {
    #[serde(default = "PricingRules::default_card_fee_rate")]
    pub card_fee_rate: f64,
    #[serde(default)]
    pub family_plan: FamilyPlanPolicy,
    #[serde(default)]
    pub proration: ProrationBasis,
    #[serde(default = "PricingRules::default_daily_rate_precision")]
    pub daily_rate_precision: u32,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            card_fee_rate: CC_RATE,
            family_plan: FamilyPlanPolicy::default(),
            proration: ProrationBasis::default(),
            daily_rate_precision: DAILY_RATE_PRECISION,
        }
    }
}

impl PricingRules {
    pub fn default_card_fee_rate() -> f64 {
        CC_RATE
    }

    pub fn default_daily_rate_precision() -> u32 {
        DAILY_RATE_PRECISION
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if !self.card_fee_rate.is_finite() || !(0.0..1.0).contains(&self.card_fee_rate) {
            return Err(RulesError(format!(
                "card fee rate must be in [0, 1), got {}",
                self.card_fee_rate
            )));
        }
        if self.family_plan.threshold < 2 {
            return Err(RulesError(
                "family plan threshold must be at least two enrollees".into(),
            ));
        }
        if !self.family_plan.enrollment_fee.is_finite() || self.family_plan.enrollment_fee < 0.0 {
            return Err(RulesError(
                "family enrollment fee must be a non-negative amount".into(),
            ));
        }
        if let Some((program, amount)) = self
            .family_plan
            .monthly_overrides
            .iter()
            .find(|(_, amount)| !amount.is_finite() || **amount < 0.0)
        {
            return Err(RulesError(format!(
                "family monthly rate for {program} must be non-negative, got {amount}"
            )));
        }
        if !(DAILY_RATE_PRECISION..=15).contains(&self.daily_rate_precision) {
            return Err(RulesError(format!(
                "daily rate precision must be between {DAILY_RATE_PRECISION} and 15 places"
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RulesError(pub String);

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pricing rules: {}", self.0)
    }
}

impl std::error::Error for RulesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_family_policy_has_no_kickboxing_rate() {
        let policy = FamilyPlanPolicy::default();
        assert_eq!(policy.monthly_override(Program::JiuJitsu), Some(400.0));
        assert_eq!(policy.monthly_override(Program::Combined), Some(470.0));
        assert_eq!(policy.monthly_override(Program::Kickboxing), None);
        assert!(!policy.applies(2));
        assert!(policy.applies(3));
    }

    #[test]
    fn proration_divisor_depends_on_basis() {
        let period = BillingPeriod::new(31, 10).unwrap();
        assert_eq!(ProrationBasis::CalendarMonth.divisor(&period), 31);
        assert_eq!(ProrationBasis::StandardMonth.divisor(&period), 30);
    }

    #[test]
    fn rules_deserialize_with_defaults() {
        let rules: PricingRules = serde_json::from_str("{}").expect("empty rules");
        assert_eq!(rules, PricingRules::default());

        let custom: PricingRules =
            serde_json::from_str(r#"{"card_fee_rate":0.03,"proration":"standard_month"}"#)
                .expect("custom rules");
        assert_eq!(custom.card_fee_rate, 0.03);
        assert_eq!(custom.proration, ProrationBasis::StandardMonth);
    }

    #[test]
    fn partial_family_policy_keeps_remaining_defaults() {
        let rules: PricingRules =
            serde_json::from_str(r#"{"family_plan":{"enrollment_fee":79.0}}"#)
                .expect("partial family policy");
        assert_eq!(rules.family_plan.enrollment_fee, 79.0);
        assert_eq!(rules.family_plan.threshold, FAMILY_PLAN_THRESHOLD);
        assert_eq!(
            rules.family_plan.monthly_override(Program::JiuJitsu),
            Some(400.0)
        );
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        assert!(PricingRules::default().validate().is_ok());

        let rules = PricingRules {
            card_fee_rate: 1.0,
            ..PricingRules::default()
        };
        assert!(rules.validate().is_err());

        let rules = PricingRules {
            daily_rate_precision: 4,
            ..PricingRules::default()
        };
        assert!(rules.validate().is_err());
    }
}
