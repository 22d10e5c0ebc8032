//! In-memory file accessor for unit tests.

use std::collections::BTreeMap;
use std::path::PathBuf;

use super::{FileAccessor, ReadOutcome};

#[derive(Debug, Default)]
pub struct MemoryFiles {
    files: BTreeMap<String, Result<String, String>>,
}

impl MemoryFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), Ok(content.to_string()));
        self
    }

    /// A file that exists but fails to read with the given reason.
    pub fn with_unreadable(mut self, path: &str, reason: &str) -> Self {
        self.files.insert(path.to_string(), Err(reason.to_string()));
        self
    }
}

impl FileAccessor for MemoryFiles {
    fn exists(&self, path: &str) -> bool {
        let dir_prefix = format!("{path}/");
        self.files.contains_key(path) || self.files.keys().any(|k| k.starts_with(&dir_prefix))
    }

    fn read_text(&self, path: &str) -> ReadOutcome {
        match self.files.get(path) {
            Some(Ok(content)) => ReadOutcome::Found(content.clone()),
            Some(Err(reason)) => ReadOutcome::Unreadable(reason.clone()),
            None => ReadOutcome::NotFound,
        }
    }

    fn list_files(&self) -> Vec<String> {
        self.files.keys().cloned().collect()
    }

    fn absolute(&self, path: &str) -> PathBuf {
        PathBuf::from("/app").join(path)
    }
}
