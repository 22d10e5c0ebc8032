//! Boundary to the external syntax checker.
//!
//! The engine never parses source code itself. It hands one file at a time to a
//! [`SyntaxChecker`] and records what comes back. The production implementation
//! spawns a process; tests inject a fake.

mod command;

pub use command::{CommandSyntaxChecker, PATH_PLACEHOLDER};

use std::path::Path;

/// What the collaborator said about one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxOutcome {
    Valid,
    /// The checker ran and rejected the file; carries its message verbatim.
    Defect(String),
    /// The checker could not be run (missing binary, spawn failure, timeout).
    Unavailable(String),
}

/// Checks the syntax of a single file.
pub trait SyntaxChecker {
    fn check_syntax(&self, path: &Path) -> SyntaxOutcome;
}

/// Reports every file as unavailable; used when no checker command is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSyntaxChecker;

impl SyntaxChecker for NoSyntaxChecker {
    fn check_syntax(&self, _path: &Path) -> SyntaxOutcome {
        SyntaxOutcome::Unavailable("no syntax checker configured".to_string())
    }
}
