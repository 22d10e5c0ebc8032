use std::path::Path;

use globset::{GlobBuilder, GlobMatcher};
use indexmap::IndexSet;

use super::FileAccessor;
use crate::error::{Result, ShapeGuardError};

const GLOB_CHARS: &[char] = &['*', '?', '[', '{'];

/// One configured target: a plain relative path or a glob over the tree.
#[derive(Debug, Clone)]
pub enum Target {
    Path(String),
    Glob { pattern: String, matcher: GlobMatcher },
}

impl Target {
    /// Parse a configured target. Anything containing glob metacharacters is a glob;
    /// `*` never crosses a `/` (use `**` for that).
    ///
    /// # Errors
    /// Returns an error if the glob is malformed.
    pub fn parse(raw: &str) -> Result<Self> {
        let relative = relative_path(raw)?;
        if !relative.contains(GLOB_CHARS) {
            return Ok(Self::Path(relative));
        }
        let matcher = GlobBuilder::new(&relative)
            .literal_separator(true)
            .build()
            .map_err(|source| ShapeGuardError::InvalidPattern {
                pattern: raw.to_string(),
                source,
            })?
            .compile_matcher();
        Ok(Self::Glob {
            pattern: relative,
            matcher,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Path(path) => path,
            Self::Glob { pattern, .. } => pattern,
        }
    }
}

/// Normalize a configured path or glob to a `/`-separated path under the root.
///
/// `.` segments and repeated separators are dropped.
///
/// # Errors
/// Returns an error if the path is absolute, contains a `..` segment, or names
/// the root itself.
pub fn relative_path(raw: &str) -> Result<String> {
    let outside = |reason| {
        Err(ShapeGuardError::PathOutsideRoot {
            path: raw.to_string(),
            reason,
        })
    };
    if raw.starts_with(['/', '\\']) || Path::new(raw).is_absolute() {
        return outside("is absolute");
    }

    let mut segments = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => return outside("leaves the root"),
            _ => segments.push(segment),
        }
    }
    if segments.is_empty() {
        return outside("does not name anything under the root");
    }
    Ok(segments.join("/"))
}

/// The files a target set resolved to, plus the targets that resolved to nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Existing files, deduplicated, in target order (globs expand sorted).
    pub files: Vec<String>,
    /// Plain paths that do not exist, and globs that matched no file.
    pub unmatched: Vec<String>,
}

/// An ordered set of targets shared by the rules that operate on files.
#[derive(Debug, Clone)]
pub struct TargetSet {
    targets: Vec<Target>,
    allow_empty: bool,
}

impl TargetSet {
    /// # Errors
    /// Returns an error if any glob is malformed.
    pub fn parse(raw: &[String], allow_empty: bool) -> Result<Self> {
        let targets = raw.iter().map(|t| Target::parse(t)).collect::<Result<_>>()?;
        Ok(Self {
            targets,
            allow_empty,
        })
    }

    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Expand every target against the accessor.
    ///
    /// With `allow_empty`, globs that match nothing are not reported as unmatched.
    #[must_use]
    pub fn resolve(&self, files: &dyn FileAccessor) -> Resolution {
        let mut found: IndexSet<String> = IndexSet::new();
        let mut unmatched = Vec::new();
        let mut listing: Option<Vec<String>> = None;

        for target in &self.targets {
            match target {
                Target::Path(path) => {
                    if files.exists(path) {
                        found.insert(path.clone());
                    } else {
                        unmatched.push(path.clone());
                    }
                }
                Target::Glob { pattern, matcher } => {
                    let all = listing.get_or_insert_with(|| files.list_files());
                    let mut matched = false;
                    for file in all.iter().filter(|f| matcher.is_match(f.as_str())) {
                        matched = true;
                        found.insert(file.clone());
                    }
                    if !matched && !self.allow_empty {
                        unmatched.push(pattern.clone());
                    }
                }
            }
        }

        Resolution {
            files: found.into_iter().collect(),
            unmatched,
        }
    }
}

impl std::fmt::Display for TargetSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = self.targets.iter().map(Target::as_str).collect();
        f.write_str(&parts.join(", "))
    }
}

#[cfg(test)]
#[path = "target_tests.rs"]
mod tests;
