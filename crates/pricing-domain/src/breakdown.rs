//! Itemized price breakdowns returned by the engine.

use serde::{Deserialize, Serialize};

use crate::plan::BillingKind;

/// Fixed-term plan: the merchant absorbs the card fee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PrepaidBreakdown {
    pub total_price: f64,
    pub term_months: u32,
    pub effective_monthly_rate: f64,
    /// What the processor would need to charge for the merchant to net `total_price`.
    pub actual_processor_charge: f64,
    pub card_fee_absorbed_by_merchant: f64,
    pub customer_total: f64,
}

/// Recurring plan: prorated membership plus a one-time enrollment fee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyBreakdown {
    pub enrollee_count: u32,
    pub family_plan_applied: bool,
    pub has_card_fee_pass_through: bool,
    pub base_monthly_amount: f64,
    pub membership_percentage_discount: f64,
    pub discounted_monthly_amount: f64,
    pub daily_rate: f64,
    pub days_remaining: u32,
    /// Day count the monthly amount was divided by.
    pub proration_days: u32,
    pub prorated_amount: f64,
    pub membership_card_fee: f64,
    pub total_membership_charge: f64,
    pub original_enrollment_fee: f64,
    pub flat_enrollment_discount_applied: f64,
    pub enrollment_percentage_discount: f64,
    pub final_enrollment_fee: f64,
    pub enrollment_card_fee: f64,
    pub enrollment_charge_amount: f64,
    pub customer_total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "billing", rename_all = "snake_case")]
pub enum PriceBreakdown {
    Monthly(MonthlyBreakdown),
    Prepaid(PrepaidBreakdown),
}

impl PriceBreakdown {
    pub fn billing_kind(&self) -> BillingKind {
        match self {
            PriceBreakdown::Monthly(_) => BillingKind::Monthly,
            PriceBreakdown::Prepaid(_) => BillingKind::Prepaid,
        }
    }

    /// The amount the payer is shown.
    pub fn customer_total(&self) -> f64 {
        match self {
            PriceBreakdown::Monthly(monthly) => monthly.customer_total,
            PriceBreakdown::Prepaid(prepaid) => prepaid.customer_total,
        }
    }

    pub fn as_monthly(&self) -> Option<&MonthlyBreakdown> {
        match self {
            PriceBreakdown::Monthly(monthly) => Some(monthly),
            PriceBreakdown::Prepaid(_) => None,
        }
    }

    pub fn as_prepaid(&self) -> Option<&PrepaidBreakdown> {
        match self {
            PriceBreakdown::Prepaid(prepaid) => Some(prepaid),
            PriceBreakdown::Monthly(_) => None,
        }
    }

    /// Every monetary field paired with its name.
    pub fn amounts(&self) -> Vec<(&'static str, f64)> {
        match self {
            PriceBreakdown::Prepaid(p) => vec![
                ("total_price", p.total_price),
                ("effective_monthly_rate", p.effective_monthly_rate),
                ("actual_processor_charge", p.actual_processor_charge),
                ("card_fee_absorbed_by_merchant", p.card_fee_absorbed_by_merchant),
                ("customer_total", p.customer_total),
            ],
            PriceBreakdown::Monthly(m) => vec![
                ("base_monthly_amount", m.base_monthly_amount),
                ("membership_percentage_discount", m.membership_percentage_discount),
                ("discounted_monthly_amount", m.discounted_monthly_amount),
                ("daily_rate", m.daily_rate),
                ("prorated_amount", m.prorated_amount),
                ("membership_card_fee", m.membership_card_fee),
                ("total_membership_charge", m.total_membership_charge),
                ("original_enrollment_fee", m.original_enrollment_fee),
                ("flat_enrollment_discount_applied", m.flat_enrollment_discount_applied),
                ("enrollment_percentage_discount", m.enrollment_percentage_discount),
                ("final_enrollment_fee", m.final_enrollment_fee),
                ("enrollment_card_fee", m.enrollment_card_fee),
                ("enrollment_charge_amount", m.enrollment_charge_amount),
                ("customer_total", m.customer_total),
            ],
        }
    }
}

impl From<MonthlyBreakdown> for PriceBreakdown {
    fn from(value: MonthlyBreakdown) -> Self {
        PriceBreakdown::Monthly(value)
    }
}

impl From<PrepaidBreakdown> for PriceBreakdown {
    fn from(value: PrepaidBreakdown) -> Self {
        PriceBreakdown::Prepaid(value)
    }
}
