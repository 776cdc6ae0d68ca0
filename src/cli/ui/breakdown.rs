//! Itemized breakdown rendering.

use std::fmt::Write as _;

use pricing_domain::{format_usd, MonthlyBreakdown, PrepaidBreakdown, PriceBreakdown};

use super::formatting::Formatter;

const LABEL_WIDTH: usize = 36;
const VALUE_WIDTH: usize = 12;

/// One printable line of a price breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BreakdownLine {
    Section(String),
    Item { label: String, value: String },
    Total { label: String, value: String },
}

impl BreakdownLine {
    fn item(label: impl Into<String>, value: impl Into<String>) -> Self {
        BreakdownLine::Item {
            label: label.into(),
            value: value.into(),
        }
    }

    fn plain_text(&self) -> String {
        match self {
            BreakdownLine::Section(title) => title.clone(),
            BreakdownLine::Item { label, value } => format!(
                "  {:<label_w$}{:>value_w$}",
                label,
                value,
                label_w = LABEL_WIDTH,
                value_w = VALUE_WIDTH
            ),
            BreakdownLine::Total { label, value } => format!(
                "{:<label_w$}{:>value_w$}",
                label,
                value,
                label_w = LABEL_WIDTH + 2,
                value_w = VALUE_WIDTH
            ),
        }
    }
}

/// Lines for a breakdown. `card_fee_rate` only feeds the fee labels.
pub fn breakdown_lines(breakdown: &PriceBreakdown, card_fee_rate: f64) -> Vec<BreakdownLine> {
    match breakdown {
        PriceBreakdown::Monthly(monthly) => monthly_lines(monthly, card_fee_rate),
        PriceBreakdown::Prepaid(prepaid) => prepaid_lines(prepaid),
    }
}

fn monthly_lines(breakdown: &MonthlyBreakdown, card_fee_rate: f64) -> Vec<BreakdownLine> {
    let fee_label = format!("CC Processing Fee ({}%)", format_percent(card_fee_rate * 100.0));
    let mut lines = vec![BreakdownLine::Section("Membership Charges:".into())];

    let base_label = if breakdown.family_plan_applied {
        format!("Family Plan Rate ({} enrollees)", breakdown.enrollee_count)
    } else if breakdown.enrollee_count > 1 {
        format!("Monthly Rate ({} enrollees)", breakdown.enrollee_count)
    } else {
        "Monthly Rate".to_string()
    };
    lines.push(BreakdownLine::item(
        base_label,
        format_usd(breakdown.base_monthly_amount),
    ));

    if breakdown.membership_percentage_discount > 0.0 {
        lines.push(BreakdownLine::item(
            "Membership Discount",
            format_usd(-breakdown.membership_percentage_discount),
        ));
        lines.push(BreakdownLine::item(
            "Discounted Monthly Rate",
            format_usd(breakdown.discounted_monthly_amount),
        ));
    }

    lines.push(BreakdownLine::item(
        format!("Daily Rate (based on {}-day month)", breakdown.proration_days),
        format_usd(breakdown.daily_rate),
    ));
    lines.push(BreakdownLine::item(
        "Days Left in Month",
        breakdown.days_remaining.to_string(),
    ));
    lines.push(BreakdownLine::item(
        "Prorated Amount",
        format_usd(breakdown.prorated_amount),
    ));
    lines.push(BreakdownLine::item(
        fee_label.clone(),
        format_usd(breakdown.membership_card_fee),
    ));
    lines.push(BreakdownLine::item(
        "Total Membership Charge",
        format_usd(breakdown.total_membership_charge),
    ));

    if breakdown.original_enrollment_fee > 0.0 {
        lines.push(BreakdownLine::Section("Enrollment Fee:".into()));
        lines.push(BreakdownLine::item(
            "Enrollment Fee",
            format_usd(breakdown.original_enrollment_fee),
        ));
        let discounted = breakdown.enrollment_percentage_discount > 0.0
            || breakdown.flat_enrollment_discount_applied > 0.0;
        if breakdown.enrollment_percentage_discount > 0.0 {
            lines.push(BreakdownLine::item(
                "Enrollment Discount",
                format_usd(-breakdown.enrollment_percentage_discount),
            ));
        }
        if breakdown.flat_enrollment_discount_applied > 0.0 {
            lines.push(BreakdownLine::item(
                "Flat Discount",
                format_usd(-breakdown.flat_enrollment_discount_applied),
            ));
        }
        if discounted {
            lines.push(BreakdownLine::item(
                "Discounted Enrollment Fee",
                format_usd(breakdown.final_enrollment_fee),
            ));
        }
        lines.push(BreakdownLine::item(
            fee_label,
            format_usd(-breakdown.enrollment_card_fee),
        ));
        lines.push(BreakdownLine::item(
            "Enrollment Charge",
            format_usd(breakdown.enrollment_charge_amount),
        ));
    }

    lines.push(BreakdownLine::Total {
        label: "Total Amount Customer Pays:".into(),
        value: format_usd(breakdown.customer_total),
    });
    lines
}

fn prepaid_lines(breakdown: &PrepaidBreakdown) -> Vec<BreakdownLine> {
    vec![
        BreakdownLine::Section(format!("{}-Month Prepaid Plan:", breakdown.term_months)),
        BreakdownLine::item("Plan Price", format_usd(breakdown.total_price)),
        BreakdownLine::item(
            "Effective Monthly Rate",
            format_usd(breakdown.effective_monthly_rate),
        ),
        BreakdownLine::item(
            "CC Processing Fee (We Cover)",
            format_usd(breakdown.card_fee_absorbed_by_merchant),
        ),
        BreakdownLine::Total {
            label: "Total Amount Customer Pays:".into(),
            value: format_usd(breakdown.customer_total),
        },
    ]
}

/// `3.99`, `10`, `12.5`.
fn format_percent(percent: f64) -> String {
    let text = format!("{:.2}", percent);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Uncolored rendering, one line per entry, newline-terminated.
pub fn render_plain(lines: &[BreakdownLine]) -> String {
    let mut out = String::new();
    for line in lines {
        let _ = writeln!(out, "{}", line.plain_text());
    }
    out
}

pub fn print_breakdown(formatter: &Formatter, lines: &[BreakdownLine]) {
    let style = formatter.ui_style();
    for line in lines {
        let text = line.plain_text();
        match line {
            BreakdownLine::Section(_) => println!("{}", style.apply_header_style(&text)),
            BreakdownLine::Item { .. } => println!("{text}"),
            BreakdownLine::Total { .. } => println!("{}", style.apply_total_style(&text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_labels_trim_trailing_zeros() {
        assert_eq!(format_percent(3.99), "3.99");
        assert_eq!(format_percent(10.0), "10");
        assert_eq!(format_percent(12.5), "12.5");
    }

    #[test]
    fn prepaid_lines_show_absorbed_fee() {
        let breakdown = PriceBreakdown::Prepaid(PrepaidBreakdown {
            total_price: 1797.0,
            term_months: 12,
            effective_monthly_rate: 149.75,
            actual_processor_charge: 1871.6741,
            card_fee_absorbed_by_merchant: 74.6741,
            customer_total: 1797.0,
        });
        let lines = breakdown_lines(&breakdown, 0.0399);
        assert_eq!(
            lines[0],
            BreakdownLine::Section("12-Month Prepaid Plan:".into())
        );
        assert!(lines.contains(&BreakdownLine::item(
            "CC Processing Fee (We Cover)",
            "$74.67"
        )));
        assert_eq!(
            lines.last(),
            Some(&BreakdownLine::Total {
                label: "Total Amount Customer Pays:".into(),
                value: "$1,797.00".into(),
            })
        );
    }
}
