use std::fmt::Write;

use super::{EvalContext, Evaluator, Failure, FailureKind, Findings, plural, read_candidate};
use crate::matcher::Pattern;
use crate::scanner::TargetSet;

/// Every candidate file must contain each pattern at least `min_count` times.
///
/// Each pattern a file lacks is its own failure, so a file missing two of five
/// required exports names both. With `only_if`, files that do not contain that
/// marker are skipped; this expresses "every file that uses X must also
/// import X".
#[derive(Debug, Clone)]
pub struct PatternPresenceCheck {
    targets: TargetSet,
    patterns: Vec<Pattern>,
    min_count: usize,
    only_if: Option<Pattern>,
}

impl PatternPresenceCheck {
    #[must_use]
    pub fn new(targets: TargetSet, pattern: Pattern) -> Self {
        Self::all_of(targets, vec![pattern])
    }

    #[must_use]
    pub const fn all_of(targets: TargetSet, patterns: Vec<Pattern>) -> Self {
        Self {
            targets,
            patterns,
            min_count: 1,
            only_if: None,
        }
    }

    #[must_use]
    pub const fn with_min_count(mut self, min_count: usize) -> Self {
        self.min_count = min_count;
        self
    }

    #[must_use]
    pub fn with_only_if(mut self, only_if: Option<Pattern>) -> Self {
        self.only_if = only_if;
        self
    }

    fn check_content<'a>(
        &'a self,
        path: &'a str,
        content: &'a str,
    ) -> impl Iterator<Item = Failure> + 'a {
        self.patterns.iter().filter_map(move |pattern| {
            let found = pattern.find(content);
            if found.occurrences >= self.min_count {
                return None;
            }
            let message = if found.occurrences == 0 {
                format!("required pattern {pattern} not found")
            } else {
                format!(
                    "required pattern {pattern} found {}, expected at least {}",
                    plural(found.occurrences, "time"),
                    self.min_count
                )
            };
            Some(Failure::new(FailureKind::PatternMismatch, path, message))
        })
    }

    fn patterns_list(&self) -> String {
        let parts: Vec<String> = self.patterns.iter().map(ToString::to_string).collect();
        parts.join(", ")
    }
}

impl Evaluator for PatternPresenceCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let resolution = self.targets.resolve(ctx.files);
        let mut failures: Vec<Failure> = resolution
            .unmatched
            .iter()
            .map(|path| Failure::not_found(path))
            .collect();
        let mut checked = 0;

        for path in &resolution.files {
            let content = match read_candidate(ctx, path) {
                Ok(content) => content,
                Err(failure) => {
                    failures.push(failure);
                    continue;
                }
            };
            if let Some(marker) = &self.only_if
                && !marker.is_match(&content)
            {
                continue;
            }
            checked += 1;
            failures.extend(self.check_content(path, &content));
        }

        let what = if self.patterns.len() == 1 {
            "pattern".to_string()
        } else {
            format!("all {} patterns", self.patterns.len())
        };
        let mut note = format!("{what} present in {}", plural(checked, "file"));
        let skipped = resolution.files.len() - checked;
        if skipped > 0 {
            let _ = write!(note, " ({skipped} not applicable)");
        }
        Findings::new(failures, note)
    }

    fn describe(&self) -> String {
        let mut text = format!("{} contain {}", self.targets, self.patterns_list());
        if self.min_count > 1 {
            let _ = write!(text, " (at least {} times)", self.min_count);
        }
        if let Some(marker) = &self.only_if {
            let _ = write!(text, " when they mention {marker}");
        }
        text
    }
}

/// No candidate file may contain `pattern` anywhere.
#[derive(Debug, Clone)]
pub struct PatternAbsenceCheck {
    targets: TargetSet,
    pattern: Pattern,
}

impl PatternAbsenceCheck {
    #[must_use]
    pub const fn new(targets: TargetSet, pattern: Pattern) -> Self {
        Self { targets, pattern }
    }

    fn check_content(&self, path: &str, content: &str) -> Option<Failure> {
        let found = self.pattern.find(content);
        let line = found.first_line?;
        Some(Failure::new(
            FailureKind::PatternMismatch,
            path,
            format!(
                "forbidden pattern {} found at line {line} ({})",
                self.pattern,
                plural(found.occurrences, "occurrence")
            ),
        ))
    }
}

impl Evaluator for PatternAbsenceCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let resolution = self.targets.resolve(ctx.files);
        let mut failures: Vec<Failure> = resolution
            .unmatched
            .iter()
            .map(|path| Failure::not_found(path))
            .collect();

        for path in &resolution.files {
            match read_candidate(ctx, path) {
                Ok(content) => failures.extend(self.check_content(path, &content)),
                Err(failure) => failures.push(failure),
            }
        }

        Findings::new(
            failures,
            format!(
                "pattern absent from {}",
                plural(resolution.files.len(), "file")
            ),
        )
    }

    fn describe(&self) -> String {
        format!("{} never contain {}", self.targets, self.pattern)
    }
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
