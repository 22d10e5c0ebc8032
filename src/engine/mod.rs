//! Runs a rule suite against one tree.
//!
//! An [`Orchestrator`] holds the rules (idle). [`Orchestrator::run`] evaluates
//! them in declaration order into a [`ReportBuilder`] (running) and seals it
//! into a read-only [`Report`] (completed). Every run starts from scratch, so
//! one orchestrator can be run repeatedly.

mod report;

pub use report::{Report, ReportBuilder, Verdict};

use crate::checker::{EvalContext, Outcome, Rule};

/// Receives progress as rules are evaluated.
///
/// Called synchronously on the orchestrator's thread, so an implementation can
/// print each outcome the moment it exists.
pub trait ProgressSink {
    fn rule_started(&mut self, _index: usize, _total: usize, _rule: &Rule) {}

    fn rule_finished(&mut self, outcome: &Outcome);
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn rule_finished(&mut self, _outcome: &Outcome) {}
}

pub struct Orchestrator<'a> {
    rules: Vec<Rule>,
    ctx: EvalContext<'a>,
}

impl<'a> Orchestrator<'a> {
    #[must_use]
    pub const fn new(rules: Vec<Rule>, ctx: EvalContext<'a>) -> Self {
        Self { rules, ctx }
    }

    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule once, in order. Never stops early: a failing rule is
    /// recorded and the next one runs.
    pub fn run(&self, progress: &mut dyn ProgressSink) -> Report {
        let total = self.rules.len();
        let mut builder = ReportBuilder::with_capacity(total);

        for (index, rule) in self.rules.iter().enumerate() {
            progress.rule_started(index, total, rule);
            let outcome = rule.evaluate(&self.ctx);
            progress.rule_finished(&outcome);
            builder.push(outcome);
        }

        builder.finish()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
