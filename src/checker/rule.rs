use std::fmt;

use serde::Serialize;

use super::{
    EvalContext, Evaluator, ExistenceCheck, FieldCheck, Outcome, PatternAbsenceCheck,
    PatternPresenceCheck, ReferenceCheck, SyntaxCheck,
};

/// The kind of a rule, without its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleKindTag {
    Existence,
    FieldPresence,
    PatternPresence,
    PatternAbsence,
    CrossReference,
    ExternalSyntax,
}

impl RuleKindTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Existence => "existence",
            Self::FieldPresence => "field-presence",
            Self::PatternPresence => "pattern-presence",
            Self::PatternAbsence => "pattern-absence",
            Self::CrossReference => "cross-reference",
            Self::ExternalSyntax => "external-syntax",
        }
    }
}

impl fmt::Display for RuleKindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule's kind together with its compiled parameters.
#[derive(Debug, Clone)]
pub enum RuleKind {
    Existence(ExistenceCheck),
    FieldPresence(FieldCheck),
    PatternPresence(PatternPresenceCheck),
    PatternAbsence(PatternAbsenceCheck),
    CrossReference(ReferenceCheck),
    ExternalSyntax(SyntaxCheck),
}

impl RuleKind {
    #[must_use]
    pub const fn tag(&self) -> RuleKindTag {
        match self {
            Self::Existence(_) => RuleKindTag::Existence,
            Self::FieldPresence(_) => RuleKindTag::FieldPresence,
            Self::PatternPresence(_) => RuleKindTag::PatternPresence,
            Self::PatternAbsence(_) => RuleKindTag::PatternAbsence,
            Self::CrossReference(_) => RuleKindTag::CrossReference,
            Self::ExternalSyntax(_) => RuleKindTag::ExternalSyntax,
        }
    }

    fn evaluator(&self) -> &dyn Evaluator {
        match self {
            Self::Existence(check) => check,
            Self::FieldPresence(check) => check,
            Self::PatternPresence(check) => check,
            Self::PatternAbsence(check) => check,
            Self::CrossReference(check) => check,
            Self::ExternalSyntax(check) => check,
        }
    }
}

/// A named, immutable check.
#[derive(Debug, Clone)]
pub struct Rule {
    name: String,
    kind: RuleKind,
}

impl Rule {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RuleKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn kind(&self) -> &RuleKind {
        &self.kind
    }

    #[must_use]
    pub const fn tag(&self) -> RuleKindTag {
        self.kind.tag()
    }

    #[must_use]
    pub fn describe(&self) -> String {
        self.kind.evaluator().describe()
    }

    /// Evaluate this rule. Always yields exactly one outcome; never panics or
    /// errors on a defect in the validated tree.
    #[must_use]
    pub fn evaluate(&self, ctx: &EvalContext<'_>) -> Outcome {
        let findings = self.kind.evaluator().evaluate(ctx);
        Outcome::from_findings(&self.name, self.tag(), findings)
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
