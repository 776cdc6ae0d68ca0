//! Group pricing: decides the pre-discount monthly amount and enrollment fee.

use pricing_domain::{FamilyPlanPolicy, Program};

/// Base amounts for a group before any discount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FamilyAdjustment {
    pub base_monthly_amount: f64,
    pub base_enrollment_fee: f64,
    pub family_plan_applied: bool,
}

pub struct FamilyPlanService;

impl FamilyPlanService {
    /// Below the threshold each person is billed individually and the enrollment fee stays flat.
    /// At or above it the enrollment fee and, where the program has one, the monthly amount are
    /// replaced by the policy's flat rates.
    pub fn adjust(
        program: Program,
        monthly_price: f64,
        enrollment_fee: f64,
        enrollee_count: u32,
        policy: &FamilyPlanPolicy,
    ) -> FamilyAdjustment {
        let per_person = monthly_price * f64::from(enrollee_count);
        if !policy.applies(enrollee_count) {
            return FamilyAdjustment {
                base_monthly_amount: per_person,
                base_enrollment_fee: enrollment_fee,
                family_plan_applied: false,
            };
        }

        FamilyAdjustment {
            base_monthly_amount: policy.monthly_override(program).unwrap_or(per_person),
            base_enrollment_fee: policy.enrollment_fee,
            family_plan_applied: true,
        }
    }
}
