//! Breakdown assembly: the engine's entry point.

use pricing_domain::{
    round_to, BillingPeriod, DiscountInputs, MonthlyBreakdown, PlanTerms, PlanTier,
    PrepaidBreakdown, PriceBreakdown, PricingRequest, PricingRules,
};

use crate::{
    card_fee_service::CardFeeService, discount_service::DiscountService,
    family_plan_service::FamilyPlanService, CoreError,
};

pub struct PricingService;

impl PricingService {
    /// Computes a fresh itemized breakdown for one selection.
    ///
    /// Prepaid tiers ignore the enrollee count and every discount. Monthly tiers go through
    /// family-plan adjustment, discounts, proration and card-fee treatment in that order.
    pub fn compute_breakdown(
        tier: &PlanTier,
        period: &BillingPeriod,
        enrollee_count: u32,
        discounts: &DiscountInputs,
        rules: &PricingRules,
    ) -> Result<PriceBreakdown, CoreError> {
        Self::validate(tier, period, enrollee_count, discounts, rules)?;

        let breakdown: PriceBreakdown = match tier.terms {
            PlanTerms::Prepaid {
                total_price,
                term_months,
            } => {
                if !discounts.is_empty() {
                    tracing::debug!(tier = %tier.name, "discounts ignored for prepaid tier");
                }
                prepaid_breakdown(total_price, term_months, rules).into()
            }
            PlanTerms::Monthly {
                monthly_price,
                enrollment_fee,
                has_card_fee_pass_through,
            } => {
                let family = FamilyPlanService::adjust(
                    tier.program,
                    monthly_price,
                    enrollment_fee,
                    enrollee_count,
                    &rules.family_plan,
                );
                let membership =
                    DiscountService::apply_to_membership(family.base_monthly_amount, discounts);
                let enrollment =
                    DiscountService::apply_to_enrollment(family.base_enrollment_fee, discounts);

                let proration_days = rules.proration.divisor(period);
                let daily_rate = round_to(
                    membership.discounted_amount / f64::from(proration_days),
                    rules.daily_rate_precision,
                );
                let prorated_amount = daily_rate * f64::from(period.days_remaining);

                let membership_fee = CardFeeService::surcharged(prorated_amount, rules.card_fee_rate);
                let enrollment_fee_split =
                    CardFeeService::netted(enrollment.final_fee, rules.card_fee_rate);

                MonthlyBreakdown {
                    enrollee_count,
                    family_plan_applied: family.family_plan_applied,
                    has_card_fee_pass_through,
                    base_monthly_amount: family.base_monthly_amount,
                    membership_percentage_discount: membership.percentage_discount,
                    discounted_monthly_amount: membership.discounted_amount,
                    daily_rate,
                    days_remaining: period.days_remaining,
                    proration_days,
                    prorated_amount,
                    membership_card_fee: membership_fee.card_fee,
                    total_membership_charge: membership_fee.total_charge,
                    original_enrollment_fee: family.base_enrollment_fee,
                    flat_enrollment_discount_applied: enrollment.flat_discount_applied,
                    enrollment_percentage_discount: enrollment.percentage_discount,
                    final_enrollment_fee: enrollment.final_fee,
                    enrollment_card_fee: enrollment_fee_split.card_fee,
                    enrollment_charge_amount: enrollment_fee_split.net_amount,
                    customer_total: membership_fee.total_charge + enrollment_fee_split.net_amount,
                }
                .into()
            }
        };

        tracing::debug!(
            tier = %tier.name,
            enrollee_count,
            customer_total = breakdown.customer_total(),
            "computed price breakdown"
        );
        Ok(breakdown)
    }

    pub fn compute_request(
        request: &PricingRequest<'_>,
        period: &BillingPeriod,
        rules: &PricingRules,
    ) -> Result<PriceBreakdown, CoreError> {
        Self::compute_breakdown(
            request.tier,
            period,
            request.enrollee_count,
            &request.discounts,
            rules,
        )
    }

    fn validate(
        tier: &PlanTier,
        period: &BillingPeriod,
        enrollee_count: u32,
        discounts: &DiscountInputs,
        rules: &PricingRules,
    ) -> Result<(), CoreError> {
        if enrollee_count < 1 {
            return Err(CoreError::InvalidInput(
                "enrollee count must be at least 1".into(),
            ));
        }
        rules.validate()?;
        tier.validate()?;
        BillingPeriod::new(period.total_days_in_month, period.days_remaining)?;
        DiscountService::validate(discounts)
    }
}

fn prepaid_breakdown(total_price: f64, term_months: u32, rules: &PricingRules) -> PrepaidBreakdown {
    let absorbed = CardFeeService::absorbed(total_price, rules.card_fee_rate);
    PrepaidBreakdown {
        total_price,
        term_months,
        effective_monthly_rate: total_price / f64::from(term_months),
        actual_processor_charge: absorbed.actual_processor_charge,
        card_fee_absorbed_by_merchant: absorbed.fee_absorbed,
        customer_total: total_price,
    }
}
