use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Result, ShapeGuardError};

pub trait FileFilter {
    fn should_include(&self, relative: &Path) -> bool;
}

/// Drops files matching any configured exclude glob (e.g. `node_modules/**`).
///
/// Paths are matched relative to the scan root.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    exclude_patterns: GlobSet,
}

impl ExcludeFilter {
    /// Create a filter from exclude globs.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| ShapeGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| ShapeGuardError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self { exclude_patterns })
    }

    /// A filter that accepts everything.
    #[must_use]
    pub fn none() -> Self {
        Self {
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for ExcludeFilter {
    fn should_include(&self, relative: &Path) -> bool {
        !self.exclude_patterns.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
