use pricing_core::option_label;

use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::Formatter;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "plans",
        "List the plan catalog grouped by program",
        "plans",
        cmd_plans,
    )]
}

fn cmd_plans(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let formatter = Formatter::new();
    formatter.print_header("Plan Catalog");
    let rules = context.session.rules();
    for (program, tiers) in context.session.catalog().grouped() {
        formatter.print_info(program.group_label());
        for (index, tier) in tiers {
            formatter.print_detail(format!("  [{index:>2}] {}", option_label(tier, rules)));
        }
    }
    formatter.print_detail("Use `quote <index|name>` to price a plan.");
    Ok(())
}
