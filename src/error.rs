use std::path::PathBuf;

use thiserror::Error;

/// Engine-level errors.
///
/// These abort a run before any rule is evaluated. Problems found *by* a rule
/// are never errors; they become failures inside an [`crate::checker::Outcome`].
#[derive(Error, Debug)]
pub enum ShapeGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Duplicate rule name: '{0}'")]
    DuplicateRuleName(String),

    #[error("Path '{path}' {reason}")]
    PathOutsideRoot { path: String, reason: &'static str },

    #[error("Root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Root path is not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl ShapeGuardError {
    /// Short category label used by the stderr error formatter.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::DuplicateRuleName(_) | Self::PathOutsideRoot { .. } => {
                "Configuration error"
            }
            Self::FileRead { .. } | Self::Io(_) => "IO error",
            Self::InvalidPattern { .. } | Self::InvalidRegex { .. } => "Invalid pattern",
            Self::RootNotFound(_) | Self::RootNotDirectory(_) => "Invalid root",
            Self::TomlParse(_) => "Config parse error",
            Self::JsonSerialize(_) => "Output error",
        }
    }

    /// Actionable hint shown under the error, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::RootNotFound(_) | Self::RootNotDirectory(_) => {
                Some("pass the directory of the generated application as ROOT")
            }
            Self::DuplicateRuleName(_) => Some("every [[rules]] entry needs a unique name"),
            Self::PathOutsideRoot { .. } => {
                Some("write rule paths relative to ROOT, e.g. `screens/LoginScreen.js`")
            }
            Self::TomlParse(_) => Some("check the TOML syntax of your .shape-guard.toml"),
            Self::InvalidRegex { .. } => {
                Some("set `regex = false` to match the pattern as a literal substring")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShapeGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
