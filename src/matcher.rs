//! Text pattern matching shared by every evaluator that searches file content.
//!
//! Matching is case-sensitive and non-overlapping. A pattern is either a fixed
//! substring or a regular expression; both may span line boundaries (a literal
//! containing `\n`, or a regex using `\s`/`[\s\S]`, or `multiline = true` which
//! lets `.` match newlines).

use regex::{Regex, RegexBuilder};

use crate::error::{Result, ShapeGuardError};

/// A compiled text pattern.
#[derive(Debug, Clone)]
pub enum Pattern {
    Literal(String),
    Regex(Regex),
}

/// Result of searching one piece of content for a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// Number of non-overlapping occurrences.
    pub occurrences: usize,
    /// 1-based line on which the first occurrence starts.
    pub first_line: Option<usize>,
}

impl MatchResult {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        self.occurrences > 0
    }
}

impl Pattern {
    #[must_use]
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Compile a regular expression.
    ///
    /// `^` and `$` always match at line boundaries. With `multiline`, `.` also
    /// matches `\n` so a single expression can cover a multi-line statement.
    ///
    /// # Errors
    /// Returns an error if the expression does not compile.
    pub fn regex(expr: &str, multiline: bool) -> Result<Self> {
        RegexBuilder::new(expr)
            .multi_line(true)
            .dot_matches_new_line(multiline)
            .build()
            .map(Self::Regex)
            .map_err(|source| ShapeGuardError::InvalidRegex {
                pattern: expr.to_string(),
                source,
            })
    }

    /// Build a pattern from its configured form.
    ///
    /// # Errors
    /// Returns an error if `is_regex` is set and the expression does not compile.
    pub fn compile(text: &str, is_regex: bool, multiline: bool) -> Result<Self> {
        if is_regex {
            Self::regex(text, multiline)
        } else {
            Ok(Self::literal(text))
        }
    }

    /// The pattern source as written in the configuration.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Regex(re) => re.as_str(),
        }
    }

    /// Search `content` for every occurrence of this pattern.
    #[must_use]
    pub fn find(&self, content: &str) -> MatchResult {
        let mut starts = self.match_starts(content);
        let Some(first) = starts.next() else {
            return MatchResult::default();
        };
        MatchResult {
            occurrences: 1 + starts.count(),
            first_line: Some(line_of(content, first)),
        }
    }

    /// Cheap presence test; stops at the first occurrence.
    #[must_use]
    pub fn is_match(&self, content: &str) -> bool {
        match self {
            Self::Literal(text) => !text.is_empty() && content.contains(text.as_str()),
            Self::Regex(re) => re.is_match(content),
        }
    }

    fn match_starts<'a>(&'a self, content: &'a str) -> Box<dyn Iterator<Item = usize> + 'a> {
        match self {
            Self::Literal(text) if text.is_empty() => Box::new(std::iter::empty()),
            Self::Literal(text) => Box::new(content.match_indices(text.as_str()).map(|(i, _)| i)),
            Self::Regex(re) => Box::new(re.find_iter(content).map(|m| m.start())),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal(text) => write!(f, "{text:?}"),
            Self::Regex(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

fn line_of(content: &str, byte_offset: usize) -> usize {
    content[..byte_offset].matches('\n').count() + 1
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
