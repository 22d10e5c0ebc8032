use std::fmt;

use serde::Serialize;

use super::rule::RuleKindTag;

/// Rule-level failure taxonomy.
///
/// Every variant is recovered at the evaluator boundary and recorded in an
/// [`Outcome`]; none of them stops the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An expected file or path is absent.
    NotFound,
    /// A structured document is malformed.
    ParseFailure,
    /// A structured document lacks required fields.
    MissingField,
    /// A required pattern is absent or a forbidden one is present.
    PatternMismatch,
    /// A reference is used but its target does not exist.
    ReferenceUnresolved,
    /// The external syntax checker could not be run.
    CollaboratorUnavailable,
    /// The external syntax checker ran and reported a defect.
    CollaboratorReportedDefect,
    /// A file exists but could not be read.
    IoError,
}

impl FailureKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not found",
            Self::ParseFailure => "parse failure",
            Self::MissingField => "missing field",
            Self::PatternMismatch => "pattern mismatch",
            Self::ReferenceUnresolved => "unresolved reference",
            Self::CollaboratorUnavailable => "checker unavailable",
            Self::CollaboratorReportedDefect => "syntax error",
            Self::IoError => "io error",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete problem found while evaluating a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    /// The file (or path) the failure is about.
    pub subject: String,
    pub message: String,
}

impl Failure {
    #[must_use]
    pub fn new(kind: FailureKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found(subject: &str) -> Self {
        Self::new(FailureKind::NotFound, subject, "not found")
    }

    #[must_use]
    pub fn unreadable(subject: &str, reason: &str) -> Self {
        Self::new(FailureKind::IoError, subject, format!("cannot read: {reason}"))
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.subject.is_empty() {
            write!(f, "[{}] {}", self.kind, self.message)
        } else {
            write!(f, "[{}] {}: {}", self.kind, self.subject, self.message)
        }
    }
}

/// What an evaluator found: every failure, plus a note used as the detail on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Findings {
    pub failures: Vec<Failure>,
    pub note: String,
}

impl Findings {
    #[must_use]
    pub fn new(failures: Vec<Failure>, note: impl Into<String>) -> Self {
        Self {
            failures,
            note: note.into(),
        }
    }
}

/// Result of evaluating exactly one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub rule_name: String,
    pub kind: RuleKindTag,
    pub passed: bool,
    /// Human-readable explanation; lists every failure when the rule failed.
    pub detail: String,
    pub failures: Vec<Failure>,
}

impl Outcome {
    #[must_use]
    pub fn from_findings(rule_name: &str, kind: RuleKindTag, findings: Findings) -> Self {
        let passed = findings.failures.is_empty();
        let detail = if passed {
            findings.note
        } else {
            findings
                .failures
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        };
        Self {
            rule_name: rule_name.to_string(),
            kind,
            passed,
            detail,
            failures: findings.failures,
        }
    }

    #[must_use]
    pub fn has_failure_kind(&self, kind: FailureKind) -> bool {
        self.failures.iter().any(|f| f.kind == kind)
    }
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
