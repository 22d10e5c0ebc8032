use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::document::DocumentFormat;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Default per-file timeout for the external syntax checker.
pub const DEFAULT_SYNTAX_TIMEOUT_SECS: u64 = 30;

/// Top-level `.shape-guard.toml` layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Built-in rule set whose rules run before the file's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default)]
    pub scanner: ScannerConfig,

    #[serde(default)]
    pub syntax: SyntaxConfig,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// How glob targets are expanded against the tree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Respect `.gitignore` files while listing (default: true).
    #[serde(default = "default_true")]
    pub gitignore: bool,

    /// Glob patterns never expanded into.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            gitignore: true,
            exclude: Vec::new(),
        }
    }
}

/// The external syntax checker command.
///
/// `{path}` in `args` is replaced by the absolute path of the checked file;
/// without a placeholder the path is appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SyntaxConfig {
    #[serde(default = "default_syntax_command")]
    pub command: String,

    #[serde(default = "default_syntax_args")]
    pub args: Vec<String>,

    /// Seconds before a single invocation is killed. `0` disables the limit.
    #[serde(default = "default_syntax_timeout")]
    pub timeout_secs: u64,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            command: default_syntax_command(),
            args: default_syntax_args(),
            timeout_secs: DEFAULT_SYNTAX_TIMEOUT_SECS,
        }
    }
}

/// One `[[rules]]` entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleConfig {
    pub name: String,

    #[serde(flatten)]
    pub check: CheckConfig,
}

/// Rule parameters, tagged by `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum CheckConfig {
    Existence {
        paths: Vec<String>,
    },
    FieldPresence {
        path: String,
        fields: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        format: Option<DocumentFormat>,
    },
    PatternPresence {
        paths: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
        /// Further patterns; every one must be present and each absent one is
        /// reported by name.
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        patterns: Vec<String>,
        #[serde(default)]
        regex: bool,
        #[serde(default)]
        multiline: bool,
        #[serde(default = "default_min_count")]
        min_count: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        only_if: Option<String>,
        #[serde(default)]
        allow_empty: bool,
    },
    PatternAbsence {
        paths: Vec<String>,
        pattern: String,
        #[serde(default)]
        regex: bool,
        #[serde(default)]
        multiline: bool,
        #[serde(default)]
        allow_empty: bool,
    },
    CrossReference {
        source: String,
        /// Marker to target path, checked in declaration order.
        references: IndexMap<String, String>,
    },
    ExternalSyntax {
        paths: Vec<String>,
        #[serde(default)]
        allow_empty: bool,
    },
}

impl CheckConfig {
    /// The `kind` tag as written in the config file.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Existence { .. } => "existence",
            Self::FieldPresence { .. } => "field-presence",
            Self::PatternPresence { .. } => "pattern-presence",
            Self::PatternAbsence { .. } => "pattern-absence",
            Self::CrossReference { .. } => "cross-reference",
            Self::ExternalSyntax { .. } => "external-syntax",
        }
    }
}

const fn default_true() -> bool {
    true
}

const fn default_min_count() -> usize {
    1
}

fn default_syntax_command() -> String {
    "node".to_string()
}

fn default_syntax_args() -> Vec<String> {
    vec!["--check".to_string(), "{path}".to_string()]
}

const fn default_syntax_timeout() -> u64 {
    DEFAULT_SYNTAX_TIMEOUT_SECS
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
