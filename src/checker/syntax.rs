use super::{EvalContext, Evaluator, Failure, FailureKind, Findings, plural};
use crate::scanner::TargetSet;
use crate::syntax::SyntaxOutcome;

/// Runs the external syntax checker on every candidate file independently.
#[derive(Debug, Clone)]
pub struct SyntaxCheck {
    targets: TargetSet,
}

impl SyntaxCheck {
    #[must_use]
    pub const fn new(targets: TargetSet) -> Self {
        Self { targets }
    }
}

impl Evaluator for SyntaxCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let resolution = self.targets.resolve(ctx.files);
        let mut failures: Vec<Failure> = resolution
            .unmatched
            .iter()
            .map(|path| Failure::not_found(path))
            .collect();

        for path in &resolution.files {
            match ctx.syntax.check_syntax(&ctx.files.absolute(path)) {
                SyntaxOutcome::Valid => {}
                SyntaxOutcome::Defect(message) => failures.push(Failure::new(
                    FailureKind::CollaboratorReportedDefect,
                    path,
                    message,
                )),
                SyntaxOutcome::Unavailable(reason) => failures.push(Failure::new(
                    FailureKind::CollaboratorUnavailable,
                    path,
                    reason,
                )),
            }
        }

        Findings::new(
            failures,
            format!("{} passed syntax check", plural(resolution.files.len(), "file")),
        )
    }

    fn describe(&self) -> String {
        format!("syntax of {}", self.targets)
    }
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
