use std::fmt;

use colored::Colorize;

use super::style::{style, UiStyle};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Style {
    Header,
    Info,
    Detail,
    Success,
    Warning,
    Error,
}

pub struct Formatter {
    style: UiStyle,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Self { style: style() }
    }

    pub fn ui_style(&self) -> &UiStyle {
        &self.style
    }

    pub fn print_header(&self, title: impl fmt::Display) {
        println!("\n{}", self.header_text(title));
    }

    pub fn header_text(&self, title: impl fmt::Display) -> String {
        self.apply_style(Style::Header, title)
    }

    pub fn print_info(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Info, message));
    }

    pub fn print_detail(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Detail, message));
    }

    pub fn print_success(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Success, message));
    }

    pub fn print_warning(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Warning, message));
    }

    pub fn print_error(&self, message: impl fmt::Display) {
        println!("{}", self.apply_style(Style::Error, message));
    }

    fn apply_style(&self, style: Style, message: impl fmt::Display) -> String {
        match style {
            Style::Success => self.decorate("✔", "OK:", message, style),
            Style::Warning => self.decorate("⚠", "WARNING:", message, style),
            Style::Error => self.decorate("✖", "ERROR:", message, style),
            Style::Header => {
                let base = format!("=== {} ===", message);
                self.style.apply_header_style(&base)
            }
            Style::Info | Style::Detail => message.to_string(),
        }
    }

    fn decorate(
        &self,
        icon: &str,
        plain_label: &str,
        message: impl fmt::Display,
        style: Style,
    ) -> String {
        if !self.style.use_icons {
            return format!("{plain_label} {}", message);
        }
        let base = format!("{icon} {}", message);
        if !self.style.use_color {
            return base;
        }
        if self.style.high_contrast {
            return base.bold().to_string();
        }
        match style {
            Style::Success => base.green().to_string(),
            Style::Warning => base.yellow().to_string(),
            Style::Error => base.red().to_string(),
            _ => base,
        }
    }

    pub fn print_two_column(&self, entries: &[(&str, &str)]) {
        if entries.is_empty() {
            return;
        }
        let label_width = entries
            .iter()
            .map(|(label, _)| label.len())
            .max()
            .unwrap_or(0);
        for (label, description) in entries {
            println!("{}", self.format_two_column_row(label, description, label_width));
        }
    }

    pub fn format_two_column_row(&self, label: &str, description: &str, width: usize) -> String {
        format!("  {:<width$}  {}", label, description, width = width + 2)
    }
}
