use super::{EvalContext, Evaluator, Failure, Findings, plural};
use crate::scanner::TargetSet;

/// Requires every listed path to exist. A glob must match at least one file.
#[derive(Debug, Clone)]
pub struct ExistenceCheck {
    targets: TargetSet,
}

impl ExistenceCheck {
    #[must_use]
    pub const fn new(targets: TargetSet) -> Self {
        Self { targets }
    }
}

impl Evaluator for ExistenceCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let resolution = self.targets.resolve(ctx.files);
        let failures = resolution
            .unmatched
            .iter()
            .map(|path| Failure::not_found(path))
            .collect();

        Findings::new(
            failures,
            format!("all {} present", plural(self.targets.targets().len(), "path")),
        )
    }

    fn describe(&self) -> String {
        format!("requires {}", self.targets)
    }
}

#[cfg(test)]
#[path = "existence_tests.rs"]
mod tests;
