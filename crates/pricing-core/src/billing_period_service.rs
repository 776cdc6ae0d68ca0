//! Resolves the billing period for "today".

use pricing_domain::BillingPeriod;

use crate::time::Clock;

pub struct BillingPeriodService;

impl BillingPeriodService {
    /// Reads the clock once and returns the period containing its current date.
    pub fn current(clock: &dyn Clock) -> BillingPeriod {
        let today = clock.today();
        let period = BillingPeriod::for_date(today);
        tracing::debug!(%today, %period, "resolved billing period");
        period
    }
}
