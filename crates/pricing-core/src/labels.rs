//! Presentation labels for plan pickers.

use pricing_domain::{format_list_price, format_usd, PlanTerms, PlanTier, PricingRules};

use crate::{card_fee_service::CardFeeService, family_plan_service::FamilyPlanService};

/// `"Jiu Jitsu Basic - $155/month"` or `"Jiu Jitsu 6-Month Plan - $997 (We cover $41.43 in fees)"`.
pub fn option_label(tier: &PlanTier, rules: &PricingRules) -> String {
    match tier.terms {
        PlanTerms::Monthly { monthly_price, .. } => {
            format!("{} - {}/month", tier.name, format_list_price(monthly_price))
        }
        PlanTerms::Prepaid { total_price, .. } => {
            let absorbed = CardFeeService::absorbed(total_price, rules.card_fee_rate);
            format!(
                "{} - {} (We cover {} in fees)",
                tier.name,
                format_list_price(total_price),
                format_usd(absorbed.fee_absorbed)
            )
        }
    }
}

/// Whether a flat enrollment discount can be entered for this tier and group size.
///
/// Uses the family-adjusted fee, so a Premium tier picks up the family enrollment fee once the
/// group reaches the threshold.
pub fn discount_input_applies(tier: &PlanTier, enrollee_count: u32, rules: &PricingRules) -> bool {
    match tier.terms {
        PlanTerms::Monthly {
            monthly_price,
            enrollment_fee,
            ..
        } => {
            let family = FamilyPlanService::adjust(
                tier.program,
                monthly_price,
                enrollment_fee,
                enrollee_count,
                &rules.family_plan,
            );
            family.base_enrollment_fee > 0.0
        }
        PlanTerms::Prepaid { .. } => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricing_domain::{PlanCatalog, Program};

    #[test]
    fn labels_match_plan_picker_format() {
        let catalog = PlanCatalog::standard();
        let rules = PricingRules::default();
        let basic = catalog.find(Program::JiuJitsu, "Jiu Jitsu Basic").unwrap();
        assert_eq!(option_label(basic, &rules), "Jiu Jitsu Basic - $155/month");

        let prepaid = catalog
            .find(Program::JiuJitsu, "Jiu Jitsu 6-Month Plan")
            .unwrap();
        assert_eq!(
            option_label(prepaid, &rules),
            "Jiu Jitsu 6-Month Plan - $997 (We cover $41.43 in fees)"
        );
    }

    #[test]
    fn discount_input_only_for_monthly_with_fee() {
        let catalog = PlanCatalog::standard();
        let rules = PricingRules::default();
        let flags: Vec<bool> = catalog.tiers()[..5]
            .iter()
            .map(|tier| discount_input_applies(tier, 1, &rules))
            .collect();
        assert_eq!(flags, vec![true, true, false, false, false]);
    }

    #[test]
    fn family_group_on_premium_tier_can_discount_enrollment() {
        let catalog = PlanCatalog::standard();
        let rules = PricingRules::default();
        let premium = catalog
            .find(Program::Kickboxing, "Kickboxing Premium")
            .unwrap();
        assert!(!discount_input_applies(premium, 2, &rules));
        assert!(discount_input_applies(premium, 3, &rules));

        let prepaid = catalog
            .find(Program::Combined, "Combined 6-Month Plan")
            .unwrap();
        assert!(!discount_input_applies(prepaid, 4, &rules));
    }
}
