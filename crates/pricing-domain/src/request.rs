//! Per-calculation inputs supplied by the caller.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::plan::PlanTier;

/// Which amount a percentage discount reduces. Exactly one target per request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscountTarget {
    #[default]
    Membership,
    Enrollment,
}

impl fmt::Display for DiscountTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DiscountTarget::Membership => "membership",
            DiscountTarget::Enrollment => "enrollment",
        };
        f.write_str(label)
    }
}

impl FromStr for DiscountTarget {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "membership" | "monthly" => Ok(DiscountTarget::Membership),
            "enrollment" | "enrolment" => Ok(DiscountTarget::Enrollment),
            other => Err(format!(
                "unknown discount target `{other}` (use membership or enrollment)"
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PercentageDiscount {
    /// Percentage in `[0, 100]`.
    pub percent: f64,
    pub target: DiscountTarget,
}

impl PercentageDiscount {
    pub fn new(percent: f64, target: DiscountTarget) -> Self {
        Self { percent, target }
    }

    pub fn applies_to(&self, target: DiscountTarget) -> bool {
        self.target == target
    }
}

/// Discount inputs for a single request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DiscountInputs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_enrollment_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<PercentageDiscount>,
}

impl DiscountInputs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_flat(mut self, amount: f64) -> Self {
        self.flat_enrollment_discount = Some(amount);
        self
    }

    pub fn with_percentage(mut self, percent: f64, target: DiscountTarget) -> Self {
        self.percentage = Some(PercentageDiscount::new(percent, target));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.flat_enrollment_discount.is_none() && self.percentage.is_none()
    }
}

/// Selection handed to the engine. Borrowed from the caller for one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest<'a> {
    pub tier: &'a PlanTier,
    pub enrollee_count: u32,
    pub discounts: DiscountInputs,
}

impl<'a> PricingRequest<'a> {
    pub fn new(tier: &'a PlanTier, enrollee_count: u32) -> Self {
        Self {
            tier,
            enrollee_count,
            discounts: DiscountInputs::none(),
        }
    }

    pub fn with_discounts(mut self, discounts: DiscountInputs) -> Self {
        self.discounts = discounts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_discount_targets() {
        assert_eq!("Membership".parse(), Ok(DiscountTarget::Membership));
        assert_eq!(" enrollment ".parse(), Ok(DiscountTarget::Enrollment));
        assert!("both".parse::<DiscountTarget>().is_err());
    }

    #[test]
    fn builder_sets_single_target() {
        let inputs = DiscountInputs::none()
            .with_flat(50.0)
            .with_percentage(10.0, DiscountTarget::Enrollment);
        let percentage = inputs.percentage.expect("percentage set");
        assert!(percentage.applies_to(DiscountTarget::Enrollment));
        assert!(!percentage.applies_to(DiscountTarget::Membership));
        assert!(!inputs.is_empty());
        assert!(DiscountInputs::none().is_empty());
    }
}
