use pricing_domain::format_usd;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::Formatter;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show the active configuration",
        "config",
        cmd_config,
    )]
}

fn on_off(flag: bool) -> String {
    let label = if flag { "on" } else { "off" };
    label.to_string()
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let config = &context.config;
    let rules = context.session.rules();
    let catalog_source = if config.catalog.is_some() {
        "config file"
    } else {
        "built-in"
    };

    let rows = vec![
        ("Config file", context.config_path.display().to_string()),
        ("Currency", config.currency.clone()),
        (
            "Card fee rate",
            format!("{:.2}%", rules.card_fee_rate * 100.0),
        ),
        ("Proration basis", rules.proration.to_string()),
        (
            "Family plan",
            format!(
                "{}+ enrollees, enrollment {}",
                rules.family_plan.threshold,
                format_usd(rules.family_plan.enrollment_fee)
            ),
        ),
        (
            "Catalog",
            format!(
                "{} ({} plans)",
                catalog_source,
                context.session.catalog().len()
            ),
        ),
        (
            "Saved discount",
            config
                .saved_enrollment_discount
                .map(format_usd)
                .unwrap_or_else(|| "(none)".into()),
        ),
        ("Color scheme", config.color_scheme.to_string()),
        ("Color output", on_off(config.ui_color_enabled)),
        ("Plain output", on_off(config.accessibility.plain_output)),
        ("High contrast", on_off(config.accessibility.high_contrast)),
    ];

    let formatter = Formatter::new();
    formatter.print_header("Configuration");
    let borrowed: Vec<_> = rows
        .iter()
        .map(|(label, value)| (*label, value.as_str()))
        .collect();
    formatter.print_two_column(&borrowed);
    Ok(())
}
