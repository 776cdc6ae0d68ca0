use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::formatting::Formatter;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "period",
            "Show the billing period used for proration",
            "period",
            cmd_period,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_period(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let period = context.session.period();
    let basis = context.session.rules().proration;
    let rows = vec![
        ("Days in month", period.total_days_in_month.to_string()),
        ("Days remaining", period.days_remaining.to_string()),
        (
            "Proration",
            format!("{} ({} days)", basis, basis.divisor(&period)),
        ),
        (
            "Full month",
            if period.is_full_month() { "yes" } else { "no" }.to_string(),
        ),
    ];
    let formatter = Formatter::new();
    formatter.print_header("Billing Period");
    let borrowed: Vec<_> = rows
        .iter()
        .map(|(label, value)| (*label, value.as_str()))
        .collect();
    formatter.print_two_column(&borrowed);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    let formatter = Formatter::new();
    formatter.print_header(format!("Gym Pricing {}", meta.version));
    let rows = vec![
        (
            "Build hash",
            format!("{} ({})", meta.git_hash, meta.git_status),
        ),
        ("Built at", meta.timestamp.to_string()),
        ("Target", meta.target.to_string()),
        ("Profile", meta.profile.to_string()),
        ("Rustc", meta.rustc.to_string()),
    ];
    let borrowed: Vec<_> = rows
        .iter()
        .map(|(label, value)| (*label, value.as_str()))
        .collect();
    formatter.print_two_column(&borrowed);
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(name) = args.first() {
        match context.command(&name.to_lowercase()) {
            Some(entry) => help::print_command(entry),
            None => context.suggest_command(name),
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
