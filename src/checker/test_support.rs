//! Fakes shared by evaluator and orchestrator tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::TargetSet;
use crate::syntax::{SyntaxChecker, SyntaxOutcome};

/// Syntax checker returning scripted outcomes keyed by absolute path.
/// Unscripted files are valid. Records every path it was asked about.
#[derive(Debug, Default)]
pub struct FakeSyntaxChecker {
    scripted: HashMap<PathBuf, SyntaxOutcome>,
    calls: RefCell<Vec<PathBuf>>,
}

impl FakeSyntaxChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(mut self, path: impl Into<PathBuf>, outcome: SyntaxOutcome) -> Self {
        self.scripted.insert(path.into(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.borrow().clone()
    }
}

impl SyntaxChecker for FakeSyntaxChecker {
    fn check_syntax(&self, path: &Path) -> SyntaxOutcome {
        self.calls.borrow_mut().push(path.to_path_buf());
        self.scripted
            .get(path)
            .cloned()
            .unwrap_or(SyntaxOutcome::Valid)
    }
}

pub fn targets(raw: &[&str]) -> TargetSet {
    let raw: Vec<String> = raw.iter().map(ToString::to_string).collect();
    TargetSet::parse(&raw, false).unwrap()
}

pub fn targets_allow_empty(raw: &[&str]) -> TargetSet {
    let raw: Vec<String> = raw.iter().map(ToString::to_string).collect();
    TargetSet::parse(&raw, true).unwrap()
}
