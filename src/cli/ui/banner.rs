use pricing_domain::BillingPeriod;

use super::style::UiStyle;

pub struct Banner;

impl Banner {
    /// Prompt text, e.g. `gym-pricing [12 of 30 days left] ⮞ `.
    pub fn prompt(period: &BillingPeriod, style: &UiStyle) -> String {
        let arrow = if style.use_icons { "⮞" } else { ">" };
        format!(
            "gym-pricing [{} of {} days left] {arrow} ",
            period.days_remaining, period.total_days_in_month
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prompt_uses_ascii_arrow() {
        let period = BillingPeriod::new(30, 12).unwrap();
        assert_eq!(
            Banner::prompt(&period, &UiStyle::plain()),
            "gym-pricing [12 of 30 days left] > "
        );
    }
}
