//! Read-only access to the tree under validation.
//!
//! All paths handed to a [`FileAccessor`] are relative to the root and use `/`
//! separators. A missing file is a normal answer, never an error.

mod filter;
#[cfg(test)]
pub(crate) mod memory;
mod target;

pub use filter::{ExcludeFilter, FileFilter};
pub use target::{Resolution, Target, TargetSet, relative_path};

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use walkdir::WalkDir;

use crate::error::{Result, ShapeGuardError};

/// Outcome of reading one file as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Found(String),
    NotFound,
    /// The path exists but could not be read (permissions, directory, not UTF-8).
    Unreadable(String),
}

/// Trait for reading the validated tree (for testability).
pub trait FileAccessor {
    /// Check if a relative path exists (file or directory).
    fn exists(&self, path: &str) -> bool;

    /// Read a relative path as UTF-8 text.
    fn read_text(&self, path: &str) -> ReadOutcome;

    /// Every file under the root, relative, `/`-separated and sorted.
    fn list_files(&self) -> Vec<String>;

    /// Absolute location of a relative path, for handing to external tools.
    fn absolute(&self, path: &str) -> PathBuf;
}

/// File accessor scoped to a real directory.
///
/// The file listing used for glob expansion is computed once per scanner and
/// reused by every rule of the same run.
#[derive(Debug)]
pub struct RootedScanner<F: FileFilter = ExcludeFilter> {
    root: PathBuf,
    filter: F,
    use_gitignore: bool,
    listing: OnceLock<Vec<String>>,
}

impl<F: FileFilter> RootedScanner<F> {
    /// Open a scanner on `root`.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or is not a directory. This is
    /// the one condition that aborts a run before any rule executes.
    pub fn open(root: &Path, filter: F, use_gitignore: bool) -> Result<Self> {
        if !root.exists() {
            return Err(ShapeGuardError::RootNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(ShapeGuardError::RootNotDirectory(root.to_path_buf()));
        }
        let root = dunce::canonicalize(root).map_err(|source| ShapeGuardError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;

        Ok(Self {
            root,
            filter,
            use_gitignore,
            listing: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan_without_gitignore(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
            .collect()
    }

    fn scan_with_gitignore(&self) -> Vec<PathBuf> {
        use ignore::WalkBuilder;

        WalkBuilder::new(&self.root)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
            .collect()
    }

    fn scan(&self) -> Vec<String> {
        let absolute = if self.use_gitignore {
            self.scan_with_gitignore()
        } else {
            self.scan_without_gitignore()
        };

        let mut files: Vec<String> = absolute
            .iter()
            .filter_map(|p| p.strip_prefix(&self.root).ok())
            .filter(|rel| self.filter.should_include(rel))
            .map(to_slash)
            .collect();
        files.sort();
        files
    }
}

impl<F: FileFilter> FileAccessor for RootedScanner<F> {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).exists()
    }

    fn read_text(&self, path: &str) -> ReadOutcome {
        match std::fs::read_to_string(self.root.join(path)) {
            Ok(content) => ReadOutcome::Found(content),
            Err(e) if e.kind() == ErrorKind::NotFound => ReadOutcome::NotFound,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                ReadOutcome::Unreadable("file is not valid UTF-8".to_string())
            }
            Err(e) => ReadOutcome::Unreadable(e.to_string()),
        }
    }

    fn list_files(&self) -> Vec<String> {
        self.listing.get_or_init(|| self.scan()).clone()
    }

    fn absolute(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

/// Render a relative path with `/` separators regardless of platform.
#[must_use]
pub fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
