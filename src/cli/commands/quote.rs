use pricing_core::{discount_input_applies, option_label, DiscountService, Quote};
use pricing_domain::{format_usd, DiscountInputs, DiscountTarget};

use crate::cli::args::{parse_quote_args, QUOTE_USAGE};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io as cli_io;
use crate::cli::registry::{closest_match, CommandEntry};
use crate::cli::ui::{breakdown_lines, print_breakdown, Formatter};
use crate::errors::PricingError;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "quote",
            "Price a plan for a number of enrollees and optional discounts",
            QUOTE_USAGE,
            cmd_quote,
        ),
        CommandEntry::new(
            "pick",
            "Choose a plan and discounts from menus, then price it",
            "pick",
            cmd_pick,
        )
        .interactive(),
    ]
}

fn cmd_quote(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let parsed = parse_quote_args(args)?;
    let index = resolve_plan(context, &parsed.plan)?;
    let requested = DiscountService::build(parsed.flat, parsed.percent, parsed.target)?;
    let quote = context.session.quote(index, parsed.enrollees, requested)?;
    if parsed.json {
        println!("{}", serde_json::to_string_pretty(&quote.breakdown)?);
        return Ok(());
    }
    show_quote(context, &quote, &requested);
    Ok(())
}

fn cmd_pick(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let catalog = context.session.catalog();
    let rules = context.session.rules();
    let items: Vec<String> = catalog
        .tiers()
        .iter()
        .map(|tier| format!("{} | {}", tier.program, option_label(tier, rules)))
        .collect();
    let Some(index) = cli_io::select_item(&context.theme, "Select a plan", &items, 0)? else {
        cli_io::print_info("Selection cancelled.");
        return Ok(());
    };
    let Some(tier) = catalog.get(index) else {
        return Err(CommandError::InvalidArguments(format!(
            "plan index {index} is out of range"
        )));
    };

    let mut requested = DiscountInputs::none();
    let mut enrollees = 1;
    if !tier.is_prepaid() {
        enrollees = cli_io::prompt_count(&context.theme, "How many people are enrolling?")?;
        if discount_input_applies(tier, enrollees, context.session.rules()) {
            let prompt = match context.session.saved_enrollment_discount() {
                Some(saved) => format!(
                    "Flat enrollment discount (blank keeps saved {})",
                    format_usd(saved)
                ),
                None => "Flat enrollment discount (blank for none)".to_string(),
            };
            let flat = cli_io::prompt_optional_amount(&context.theme, &prompt)?;
            let percent = cli_io::prompt_optional_amount(
                &context.theme,
                "Percentage discount (blank for none)",
            )?;
            let target = match percent {
                Some(_) => Some(prompt_target(context)?),
                None => None,
            };
            requested = DiscountService::build(flat, percent, target)?;
        } else {
            let percent = cli_io::prompt_optional_amount(
                &context.theme,
                "Membership percentage discount (blank for none)",
            )?;
            requested = DiscountService::build(None, percent, None)?;
        }
    }

    let quote = context.session.quote(index, enrollees, requested)?;
    show_quote(context, &quote, &requested);
    Ok(())
}

fn prompt_target(context: &ShellContext) -> Result<DiscountTarget, CommandError> {
    let items = vec!["Membership".to_string(), "Enrollment".to_string()];
    let choice = cli_io::select_item(&context.theme, "Apply percentage to", &items, 0)?;
    Ok(match choice {
        Some(1) => DiscountTarget::Enrollment,
        _ => DiscountTarget::Membership,
    })
}

/// Accepts a catalog index or a tier name (case-insensitive).
fn resolve_plan(context: &ShellContext, plan: &str) -> Result<usize, CommandError> {
    let catalog = context.session.catalog();
    if let Ok(index) = plan.trim().parse::<usize>() {
        if index >= catalog.len() {
            return Err(CommandError::InvalidArguments(format!(
                "plan index {index} is out of range (0-{})",
                catalog.len().saturating_sub(1)
            )));
        }
        return Ok(index);
    }
    if let Some(index) = catalog.position_by_name(plan) {
        return Ok(index);
    }
    let names = catalog.tiers().iter().map(|tier| tier.name.as_str());
    match closest_match(plan, names) {
        Some(best) => Err(CommandError::InvalidArguments(format!(
            "No plan named `{plan}`. Did you mean `{best}`?"
        ))),
        None => Err(CommandError::Core(PricingError::PlanNotFound(
            plan.to_string(),
        ))),
    }
}

fn show_quote(context: &ShellContext, quote: &Quote<'_>, requested: &DiscountInputs) {
    let formatter = Formatter::new();
    formatter.print_header(&quote.tier.name);
    formatter.print_detail(format!("Billing period: {}", context.session.period()));

    if quote.tier.is_prepaid() {
        if !requested.is_empty() {
            formatter.print_warning("Discounts do not apply to prepaid plans.");
        }
    } else if requested.flat_enrollment_discount.is_none() {
        if let Some(saved) = quote.discounts.flat_enrollment_discount {
            formatter.print_detail(format!(
                "Saved enrollment discount of {} applied.",
                format_usd(saved)
            ));
        }
    }

    if let Some(monthly) = quote.breakdown.as_monthly() {
        if monthly.family_plan_applied {
            formatter.print_success(format!(
                "Family plan rate applied for {} enrollees.",
                monthly.enrollee_count
            ));
        }
    }

    let lines = breakdown_lines(&quote.breakdown, context.session.rules().card_fee_rate);
    print_breakdown(&formatter, &lines);
}
