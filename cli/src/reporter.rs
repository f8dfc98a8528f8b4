use crossterm::style::Stylize;
use ttask_core::{Reporter, Severity};

/// Stdout/stderr reporter: successes in bold green, errors in bold red
/// on stderr, informational notes dimmed.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn emit(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success => println!("{}", message.green().bold()),
            Severity::Info => println!("{}", message.cyan().dim().italic()),
            Severity::Error => eprintln!("{}", message.red().bold()),
        }
    }
}
