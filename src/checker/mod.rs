mod compile;
mod existence;
mod fields;
mod outcome;
mod patterns;
mod references;
mod rule;
mod syntax;
#[cfg(test)]
pub(crate) mod test_support;

pub use compile::compile_rules;
pub use existence::ExistenceCheck;
pub use fields::FieldCheck;
pub use outcome::{Failure, FailureKind, Findings, Outcome};
pub use patterns::{PatternAbsenceCheck, PatternPresenceCheck};
pub use references::{Reference, ReferenceCheck};
pub use rule::{Rule, RuleKind, RuleKindTag};
pub use syntax::SyntaxCheck;

use crate::scanner::FileAccessor;
use crate::syntax::SyntaxChecker;

/// Capabilities an evaluator may use. Evaluators never touch the filesystem
/// or spawn processes except through these.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub files: &'a dyn FileAccessor,
    pub syntax: &'a dyn SyntaxChecker,
}

impl<'a> EvalContext<'a> {
    #[must_use]
    pub const fn new(files: &'a dyn FileAccessor, syntax: &'a dyn SyntaxChecker) -> Self {
        Self { files, syntax }
    }
}

/// Turns one rule's parameters into findings.
///
/// Implementations report every problem they find rather than stopping at the
/// first, so a single run surfaces all gaps.
pub trait Evaluator {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings;

    /// One-line description of what the check looks at.
    fn describe(&self) -> String;
}

/// Read a candidate file, turning a missing or unreadable file into a failure.
fn read_candidate(ctx: &EvalContext<'_>, path: &str) -> Result<String, Failure> {
    use crate::scanner::ReadOutcome;

    match ctx.files.read_text(path) {
        ReadOutcome::Found(content) => Ok(content),
        ReadOutcome::NotFound => Err(Failure::not_found(path)),
        ReadOutcome::Unreadable(reason) => Err(Failure::unreadable(path, &reason)),
    }
}

fn plural(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}
