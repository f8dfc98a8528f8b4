/// Message severity, mirrored by the CLI's console styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Sink for user-facing messages. Domain operations return outcome values
/// and whoever owns the surface (the CLI, a test) decides how to show them.
pub trait Reporter {
    fn emit(&self, severity: Severity, message: &str);
}
