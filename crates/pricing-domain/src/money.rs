//! Rounding and presentation helpers for dollar amounts.

/// Rounds to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Presentation rounding to whole cents.
pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// `$1,234.50` style formatting with two decimals.
pub fn format_usd(amount: f64) -> String {
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body.as_str(), "00"));
    let sign = if amount < 0.0 && body != "0.00" { "-" } else { "" };
    format!("{sign}${}.{frac_part}", group_digits(int_part))
}

/// Catalog price formatting: whole dollars drop the decimals (`$155`, `$12.50`).
pub fn format_list_price(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("${}", group_digits(&format!("{:.0}", amount)))
    } else {
        format_usd(amount)
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_at_presentation_only() {
        assert_eq!(round_cents(161.1845), 161.18);
        assert_eq!(round_cents(383.0799), 383.08);
        assert_eq!(round_to(5.16666666666666, 10), 5.1666666667);
    }

    #[test]
    fn formats_dollar_amounts() {
        assert_eq!(format_usd(544.2644), "$544.26");
        assert_eq!(format_usd(1797.0), "$1,797.00");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_list_price(155.0), "$155");
        assert_eq!(format_list_price(2299.0), "$2,299");
        assert_eq!(format_list_price(12.5), "$12.50");
    }
}
