use serde::Serialize;

use crate::checker::{Failure, Outcome, RuleKindTag};
use crate::engine::{Report, Verdict};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    outcomes: Vec<JsonOutcome<'a>>,
}

#[derive(Serialize)]
struct Summary {
    total: usize,
    passed: usize,
    failed: usize,
    success_rate: f64,
    verdict: Verdict,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    rule: &'a str,
    kind: RuleKindTag,
    passed: bool,
    detail: &'a str,
    failures: &'a [Failure],
}

impl<'a> From<&'a Outcome> for JsonOutcome<'a> {
    fn from(outcome: &'a Outcome) -> Self {
        Self {
            rule: &outcome.rule_name,
            kind: outcome.kind,
            passed: outcome.passed,
            detail: &outcome.detail,
            failures: &outcome.failures,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                total: report.total_run(),
                passed: report.total_passed(),
                failed: report.total_failed(),
                success_rate: report.success_rate(),
                verdict: report.verdict(),
            },
            outcomes: report.outcomes().iter().map(JsonOutcome::from).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
