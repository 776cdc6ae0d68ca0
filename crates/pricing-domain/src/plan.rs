//! Domain types describing the programs and plan tiers a customer can pick from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Training programs offered by the gym.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Program {
    JiuJitsu,
    Kickboxing,
    Combined,
}

impl Program {
    /// Display order used when grouping the catalog.
    pub const ALL: [Program; 3] = [Program::JiuJitsu, Program::Kickboxing, Program::Combined];

    pub fn label(self) -> &'static str {
        match self {
            Program::JiuJitsu => "Jiu Jitsu",
            Program::Kickboxing => "Kickboxing",
            Program::Combined => "Combined",
        }
    }

    /// Heading shown above the program's tiers in a plan picker.
    pub fn group_label(self) -> &'static str {
        match self {
            Program::JiuJitsu => "Jiu Jitsu Programs",
            Program::Kickboxing => "Kickboxing Programs",
            Program::Combined => "Combined Programs (Jiu Jitsu + Kickboxing)",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Distinguishes recurring monthly billing from fixed-term prepaid contracts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BillingKind {
    Monthly,
    Prepaid,
}

impl fmt::Display for BillingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BillingKind::Monthly => "Monthly",
            BillingKind::Prepaid => "Prepaid",
        };
        f.write_str(label)
    }
}

/// Price terms of a tier. The variant decides which field group exists.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "billing", rename_all = "snake_case")]
pub enum PlanTerms {
    Monthly {
        monthly_price: f64,
        enrollment_fee: f64,
        has_card_fee_pass_through: bool,
    },
    Prepaid {
        total_price: f64,
        term_months: u32,
    },
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanTier {
    pub name: String,
    pub program: Program,
    pub terms: PlanTerms,
}

impl PlanTier {
    pub fn monthly(
        name: impl Into<String>,
        program: Program,
        monthly_price: f64,
        enrollment_fee: f64,
        has_card_fee_pass_through: bool,
    ) -> Self {
        Self {
            name: name.into(),
            program,
            terms: PlanTerms::Monthly {
                monthly_price,
                enrollment_fee,
                has_card_fee_pass_through,
            },
        }
    }

    pub fn prepaid(
        name: impl Into<String>,
        program: Program,
        total_price: f64,
        term_months: u32,
    ) -> Self {
        Self {
            name: name.into(),
            program,
            terms: PlanTerms::Prepaid {
                total_price,
                term_months,
            },
        }
    }

    pub fn billing_kind(&self) -> BillingKind {
        match self.terms {
            PlanTerms::Monthly { .. } => BillingKind::Monthly,
            PlanTerms::Prepaid { .. } => BillingKind::Prepaid,
        }
    }

    pub fn is_prepaid(&self) -> bool {
        self.billing_kind() == BillingKind::Prepaid
    }

    /// Listed enrollment fee; prepaid tiers have none.
    pub fn enrollment_fee(&self) -> f64 {
        match self.terms {
            PlanTerms::Monthly { enrollment_fee, .. } => enrollment_fee,
            PlanTerms::Prepaid { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billing_kind_follows_terms_variant() {
        let monthly = PlanTier::monthly("Jiu Jitsu Basic", Program::JiuJitsu, 155.0, 399.0, true);
        let prepaid = PlanTier::prepaid("Jiu Jitsu 6-Month Plan", Program::JiuJitsu, 997.0, 6);

        assert_eq!(monthly.billing_kind(), BillingKind::Monthly);
        assert_eq!(prepaid.billing_kind(), BillingKind::Prepaid);
        assert!(prepaid.is_prepaid());
        assert_eq!(prepaid.enrollment_fee(), 0.0);
    }

    #[test]
    fn terms_serialize_with_billing_tag() {
        let tier = PlanTier::prepaid("Kickboxing 12-Month Plan", Program::Kickboxing, 1500.0, 12);
        let json = serde_json::to_value(&tier).expect("serialize tier");

        assert_eq!(json["program"], "kickboxing");
        assert_eq!(json["terms"]["billing"], "prepaid");
        assert_eq!(json["terms"]["term_months"], 12);

        let back: PlanTier = serde_json::from_value(json).expect("deserialize tier");
        assert_eq!(back, tier);
    }
}
