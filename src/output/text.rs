use std::fmt::Write;

use crate::checker::Outcome;
use crate::engine::Report;
use crate::error::Result;

use super::{ColorMode, OutputFormatter, ansi};

/// Human-readable rendering: one block per outcome, then a summary.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.enabled(std::io::IsTerminal::is_terminal(&std::io::stdout())),
        }
    }

    #[must_use]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// The status line for one outcome followed by its indented detail lines.
    #[must_use]
    pub fn format_outcome(&self, outcome: &Outcome) -> String {
        let mut output = String::new();
        let (icon, status, color) = if outcome.passed {
            ("✓", "PASSED", ansi::GREEN)
        } else {
            ("✗", "FAILED", ansi::RED)
        };
        let _ = writeln!(
            output,
            "{} {}",
            self.colorize(&format!("{icon} {status}"), color),
            outcome.rule_name
        );

        if outcome.passed {
            if !outcome.detail.is_empty() {
                let _ = writeln!(output, "   {}", outcome.detail);
            }
        } else {
            for failure in &outcome.failures {
                let _ = writeln!(output, "   {failure}");
            }
        }
        output
    }

    /// `Summary: passed/total rules passed`, the success rate, then every failure
    /// grouped by rule.
    #[must_use]
    pub fn format_summary(&self, report: &Report) -> String {
        let mut output = String::new();
        let passed = report.total_passed().to_string();
        let passed = if report.total_failed() == 0 {
            self.colorize(&passed, ansi::GREEN)
        } else {
            self.colorize(&passed, ansi::RED)
        };
        let _ = writeln!(
            output,
            "Summary: {passed}/{} rules passed",
            report.total_run()
        );
        let _ = writeln!(output, "Success rate: {:.1}%", report.success_rate());

        if report.total_failed() > 0 {
            let _ = writeln!(output, "\n{}", self.colorize("Failures:", ansi::YELLOW));
            for outcome in report.failed_outcomes() {
                let _ = writeln!(output, "  {} ({})", outcome.rule_name, outcome.kind);
                for failure in &outcome.failures {
                    let _ = writeln!(output, "    - {failure}");
                }
            }
        }
        output
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        for outcome in report.outcomes() {
            output.push_str(&self.format_outcome(outcome));
        }
        if !report.outcomes().is_empty() {
            output.push('\n');
        }
        output.push_str(&self.format_summary(report));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
