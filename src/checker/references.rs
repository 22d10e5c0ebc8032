use super::{EvalContext, Evaluator, Failure, FailureKind, Findings, plural, read_candidate};
use crate::matcher::Pattern;
use crate::scanner::TargetSet;

/// A marker whose presence in a source file means `target` must exist.
#[derive(Debug, Clone)]
pub struct Reference {
    pub marker: Pattern,
    pub target: String,
}

impl Reference {
    #[must_use]
    pub fn new(marker: Pattern, target: impl Into<String>) -> Self {
        Self {
            marker,
            target: target.into(),
        }
    }
}

/// One-directional reference integrity: if a source uses a reference, its
/// target must exist. References that are declared but unused are ignored.
#[derive(Debug, Clone)]
pub struct ReferenceCheck {
    sources: TargetSet,
    references: Vec<Reference>,
}

impl ReferenceCheck {
    #[must_use]
    pub const fn new(sources: TargetSet, references: Vec<Reference>) -> Self {
        Self {
            sources,
            references,
        }
    }
}

impl Evaluator for ReferenceCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let resolution = self.sources.resolve(ctx.files);
        let mut failures: Vec<Failure> = resolution
            .unmatched
            .iter()
            .map(|path| Failure::not_found(path))
            .collect();
        let mut used = 0;

        for source in &resolution.files {
            let content = match read_candidate(ctx, source) {
                Ok(content) => content,
                Err(failure) => {
                    failures.push(failure);
                    continue;
                }
            };

            for reference in &self.references {
                if !reference.marker.is_match(&content) {
                    continue;
                }
                used += 1;
                if !ctx.files.exists(&reference.target) {
                    failures.push(Failure::new(
                        FailureKind::ReferenceUnresolved,
                        source,
                        format!(
                            "uses {} but {} does not exist",
                            reference.marker, reference.target
                        ),
                    ));
                }
            }
        }

        Findings::new(
            failures,
            format!("{} resolved", plural(used, "used reference")),
        )
    }

    fn describe(&self) -> String {
        format!(
            "{} from {}",
            plural(self.references.len(), "reference"),
            self.sources
        )
    }
}

#[cfg(test)]
#[path = "references_tests.rs"]
mod tests;
