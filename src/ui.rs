//! User facing diagnostics.
//!
//! Warnings and errors are written to stderr for the operator, sent to the log,
//! and kept so the caller can inspect what was reported.
use log::*;
use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Ui {
    /// Do not write to stderr; diagnostics are still logged and kept.
    quiet: bool,
    diagnostics: Vec<Diagnostic>,
}

impl Ui {
    pub fn new() -> Self { Default::default() }
    pub fn quiet() -> Self {
        Ui { quiet: true, ..Default::default() }
    }
    pub fn warn(
        &mut self,
        message: impl Into<String>,
    )
    {
        let message = message.into();
        warn!("{}", message);
        if !self.quiet {
            eprintln!("{} {}", "WARNING:".yellow(), message);
        }
        self.diagnostics.push(Diagnostic { severity: Severity::Warning, message });
    }
    pub fn error(
        &mut self,
        message: impl Into<String>,
    )
    {
        let message = message.into();
        error!("{}", message);
        if !self.quiet {
            eprintln!("{} {}", "ERROR:".red(), message);
        }
        self.diagnostics.push(Diagnostic { severity: Severity::Error, message });
    }
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.diagnostics.iter()
            .filter(|r| r.severity == Severity::Warning)
            .map(|r| r.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_diagnostics_are_kept_in_order() {
        let mut ui = Ui::quiet();
        ui.warn("first");
        ui.error("second");
        ui.warn("third");

        assert_eq!(ui.diagnostics().len(), 3);
        assert_eq!(ui.diagnostics()[1], Diagnostic { severity: Severity::Error, message: "second".to_string() });
        assert_eq!(ui.warnings().collect::<Vec<_>>(), vec!["first", "third"]);
    }
}
