use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::formatting::Formatter;

pub fn print_overview(registry: &CommandRegistry) {
    let formatter = Formatter::new();
    formatter.print_header("Available commands");
    let rows: Vec<(&str, &str)> = registry
        .list()
        .into_iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    formatter.print_two_column(&rows);
    formatter.print_detail("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    let formatter = Formatter::new();
    formatter.print_header(format!("Help: {}", entry.name));
    let mut rows = vec![("description", entry.description), ("usage", entry.usage)];
    if entry.interactive_only {
        rows.push(("mode", "interactive only"));
    }
    formatter.print_two_column(&rows);
}
