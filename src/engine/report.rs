use serde::Serialize;

use crate::checker::Outcome;
use crate::{EXIT_RULES_FAILED, EXIT_SUCCESS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Pass => EXIT_SUCCESS,
            Self::Fail => EXIT_RULES_FAILED,
        }
    }
}

/// A report still being filled; only the orchestrator holds one.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    outcomes: Vec<Outcome>,
}

impl ReportBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Seal the report, computing counts and verdict.
    #[must_use]
    pub fn finish(self) -> Report {
        let total_passed = self.outcomes.iter().filter(|o| o.passed).count();
        let verdict = if total_passed == self.outcomes.len() {
            Verdict::Pass
        } else {
            Verdict::Fail
        };
        Report {
            outcomes: self.outcomes,
            total_passed,
            verdict,
        }
    }
}

/// Ordered outcomes of one completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    outcomes: Vec<Outcome>,
    total_passed: usize,
    verdict: Verdict,
}

impl Report {
    #[must_use]
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn total_run(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub const fn total_passed(&self) -> usize {
        self.total_passed
    }

    #[must_use]
    pub fn total_failed(&self) -> usize {
        self.total_run() - self.total_passed
    }

    /// Percentage of rules that passed; 100 for an empty report.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            100.0
        } else {
            self.total_passed as f64 * 100.0 / self.total_run() as f64
        }
    }

    /// Pass iff every outcome passed. An empty report passes.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn failed_outcomes(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.verdict.exit_code()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
