//! A pricing session: catalog, rules and calendar facts fixed at start.

use pricing_domain::{
    BillingPeriod, DiscountInputs, PlanCatalog, PlanTier, PriceBreakdown, PricingRules,
};

use crate::{
    billing_period_service::BillingPeriodService, discount_service::DiscountService,
    labels::discount_input_applies, pricing_service::PricingService, time::Clock, CoreError,
};

/// A computed breakdown together with the tier it was computed for.
#[derive(Debug, Clone)]
pub struct Quote<'a> {
    pub index: usize,
    pub tier: &'a PlanTier,
    pub discounts: DiscountInputs,
    pub breakdown: PriceBreakdown,
}

/// Holds everything read once per session. Never writes anything back.
#[derive(Debug, Clone)]
pub struct PricingSession {
    catalog: PlanCatalog,
    rules: PricingRules,
    period: BillingPeriod,
    saved_enrollment_discount: Option<f64>,
}

impl PricingSession {
    /// Resolves the billing period from `clock` and validates the injected configuration.
    pub fn start(
        catalog: PlanCatalog,
        rules: PricingRules,
        clock: &dyn Clock,
        saved_enrollment_discount: Option<f64>,
    ) -> Result<Self, CoreError> {
        let period = BillingPeriodService::current(clock);
        Self::with_period(catalog, rules, period, saved_enrollment_discount)
    }

    pub fn with_period(
        catalog: PlanCatalog,
        rules: PricingRules,
        period: BillingPeriod,
        saved_enrollment_discount: Option<f64>,
    ) -> Result<Self, CoreError> {
        rules.validate()?;
        DiscountService::validate(&DiscountInputs {
            flat_enrollment_discount: saved_enrollment_discount,
            percentage: None,
        })?;
        tracing::info!(
            tiers = catalog.len(),
            %period,
            saved_discount = saved_enrollment_discount.is_some(),
            "pricing session started"
        );
        Ok(Self {
            catalog,
            rules,
            period,
            saved_enrollment_discount,
        })
    }

    pub fn catalog(&self) -> &PlanCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PricingRules {
        &self.rules
    }

    pub fn period(&self) -> BillingPeriod {
        self.period
    }

    pub fn saved_enrollment_discount(&self) -> Option<f64> {
        self.saved_enrollment_discount
    }

    /// Discounts that will actually be used for `tier`.
    ///
    /// Prepaid tiers get none. The saved flat discount fills in only when the caller gave no
    /// flat discount and the group owes an enrollment fee to discount.
    pub fn effective_discounts(
        &self,
        tier: &PlanTier,
        enrollee_count: u32,
        requested: DiscountInputs,
    ) -> DiscountInputs {
        if tier.is_prepaid() {
            return DiscountInputs::none();
        }
        match (requested.flat_enrollment_discount, self.saved_enrollment_discount) {
            (None, Some(saved)) if discount_input_applies(tier, enrollee_count, &self.rules) => {
                requested.with_flat(saved)
            }
            _ => requested,
        }
    }

    pub fn quote(
        &self,
        index: usize,
        enrollee_count: u32,
        discounts: DiscountInputs,
    ) -> Result<Quote<'_>, CoreError> {
        let tier = self
            .catalog
            .get(index)
            .ok_or_else(|| CoreError::PlanNotFound(format!("no plan at index {index}")))?;
        let discounts = self.effective_discounts(tier, enrollee_count, discounts);
        let breakdown = PricingService::compute_breakdown(
            tier,
            &self.period,
            enrollee_count,
            &discounts,
            &self.rules,
        )?;
        Ok(Quote {
            index,
            tier,
            discounts,
            breakdown,
        })
    }

    pub fn quote_by_name(
        &self,
        name: &str,
        enrollee_count: u32,
        discounts: DiscountInputs,
    ) -> Result<Quote<'_>, CoreError> {
        let index = self
            .catalog
            .position_by_name(name)
            .ok_or_else(|| CoreError::PlanNotFound(name.to_string()))?;
        self.quote(index, enrollee_count, discounts)
    }
}
