//! Flat and percentage discount resolution for monthly tiers.

use pricing_domain::{DiscountInputs, DiscountTarget, PercentageDiscount};

use crate::CoreError;

/// Membership amount after an optional percentage discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MembershipDiscount {
    pub percentage_discount: f64,
    pub discounted_amount: f64,
}

/// Enrollment fee after the percentage discount, then the flat discount, floored at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrollmentDiscount {
    pub percentage_discount: f64,
    /// Portion of the flat discount that was actually used.
    pub flat_discount_applied: f64,
    pub final_fee: f64,
}

pub struct DiscountService;

impl DiscountService {
    /// Builds discount inputs from loose caller values. A percentage without a target reduces
    /// the membership amount; a target without a percentage is rejected.
    pub fn build(
        flat_enrollment_discount: Option<f64>,
        percent: Option<f64>,
        target: Option<DiscountTarget>,
    ) -> Result<DiscountInputs, CoreError> {
        let percentage = match (percent, target) {
            (Some(percent), target) => Some(PercentageDiscount::new(
                percent,
                target.unwrap_or_default(),
            )),
            (None, Some(target)) => {
                return Err(CoreError::InvalidInput(format!(
                    "discount target `{target}` given without a percentage"
                )))
            }
            (None, None) => None,
        };
        let inputs = DiscountInputs {
            flat_enrollment_discount,
            percentage,
        };
        Self::validate(&inputs)?;
        Ok(inputs)
    }

    pub fn validate(inputs: &DiscountInputs) -> Result<(), CoreError> {
        if let Some(flat) = inputs.flat_enrollment_discount {
            if !flat.is_finite() || flat < 0.0 {
                return Err(CoreError::InvalidInput(format!(
                    "flat enrollment discount must be a non-negative amount, got {flat}"
                )));
            }
        }
        if let Some(percentage) = inputs.percentage {
            if !percentage.percent.is_finite() || !(0.0..=100.0).contains(&percentage.percent) {
                return Err(CoreError::InvalidInput(format!(
                    "percentage discount must be between 0 and 100, got {}",
                    percentage.percent
                )));
            }
        }
        Ok(())
    }

    pub fn apply_to_membership(base_amount: f64, inputs: &DiscountInputs) -> MembershipDiscount {
        let percentage_discount = percentage_of(base_amount, inputs, DiscountTarget::Membership);
        MembershipDiscount {
            percentage_discount,
            discounted_amount: base_amount - percentage_discount,
        }
    }

    pub fn apply_to_enrollment(base_fee: f64, inputs: &DiscountInputs) -> EnrollmentDiscount {
        let percentage_discount = percentage_of(base_fee, inputs, DiscountTarget::Enrollment);
        let after_percentage = base_fee - percentage_discount;
        let flat = inputs.flat_enrollment_discount.unwrap_or(0.0);
        let final_fee = (after_percentage - flat).max(0.0);
        EnrollmentDiscount {
            percentage_discount,
            flat_discount_applied: after_percentage - final_fee,
            final_fee,
        }
    }
}

fn percentage_of(amount: f64, inputs: &DiscountInputs, target: DiscountTarget) -> f64 {
    inputs
        .percentage
        .filter(|percentage| percentage.applies_to(target))
        .map(|percentage| amount * (percentage.percent / 100.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_discount_floors_fee_at_zero() {
        let inputs = DiscountInputs::none().with_flat(500.0);
        let result = DiscountService::apply_to_enrollment(399.0, &inputs);
        assert_eq!(result.final_fee, 0.0);
        assert_eq!(result.flat_discount_applied, 399.0);
    }

    #[test]
    fn percentage_comes_before_flat_on_enrollment() {
        let inputs = DiscountInputs::none()
            .with_flat(50.0)
            .with_percentage(10.0, DiscountTarget::Enrollment);
        let result = DiscountService::apply_to_enrollment(300.0, &inputs);
        assert!((result.percentage_discount - 30.0).abs() < 1e-9);
        assert!((result.final_fee - 220.0).abs() < 1e-9);

        let membership = DiscountService::apply_to_membership(155.0, &inputs);
        assert_eq!(membership.percentage_discount, 0.0);
        assert_eq!(membership.discounted_amount, 155.0);
    }

    #[test]
    fn membership_percentage_leaves_enrollment_alone() {
        let inputs = DiscountInputs::none().with_percentage(20.0, DiscountTarget::Membership);
        let membership = DiscountService::apply_to_membership(200.0, &inputs);
        assert!((membership.discounted_amount - 160.0).abs() < 1e-9);

        let enrollment = DiscountService::apply_to_enrollment(399.0, &inputs);
        assert_eq!(enrollment.final_fee, 399.0);
    }

    #[test]
    fn build_rejects_invalid_values() {
        assert!(DiscountService::build(Some(-1.0), None, None).is_err());
        assert!(DiscountService::build(None, Some(100.5), None).is_err());
        assert!(DiscountService::build(None, Some(f64::NAN), None).is_err());
        assert_eq!(
            DiscountService::build(None, None, Some(DiscountTarget::Enrollment)),
            Err(CoreError::InvalidInput(
                "discount target `enrollment` given without a percentage".into()
            ))
        );
    }

    #[test]
    fn build_defaults_target_to_membership() {
        let inputs = DiscountService::build(Some(25.0), Some(15.0), None).expect("valid inputs");
        assert_eq!(
            inputs.percentage,
            Some(PercentageDiscount::new(15.0, DiscountTarget::Membership))
        );
        assert_eq!(inputs.flat_enrollment_discount, Some(25.0));
    }
}
