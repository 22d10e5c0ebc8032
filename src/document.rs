//! Structured document loading for field-presence rules.
//!
//! JSON and TOML sources are both parsed into a `serde_json::Value` tree so
//! field lookup has a single implementation. Malformed input is never
//! partially recovered.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source format of a structured document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Toml,
}

impl DocumentFormat {
    /// Infer the format from a file extension; anything other than `.toml` is JSON.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}

/// Why a document could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub format: DocumentFormat,
    pub reason: String,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {} document: {}", self.format, self.reason)
    }
}

/// A dotted field path such as `expo.slug` or `plugins.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            segments: raw.split('.').map(str::to_string).collect(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when any segment is empty (`a..b`, leading or trailing dot).
    #[must_use]
    pub fn has_empty_segment(&self) -> bool {
        self.segments.iter().any(String::is_empty)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// In-memory key/value tree produced from one file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Parse `text` in the given format.
    ///
    /// # Errors
    /// Returns a [`ParseFailure`] when the text is not a well-formed document.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self, ParseFailure> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str::<Value>(text).map_err(|e| e.to_string()),
            DocumentFormat::Toml => toml::from_str::<Value>(text).map_err(|e| e.message().to_string()),
        };
        parsed
            .map(|root| Self { root })
            .map_err(|reason| ParseFailure { format, reason })
    }

    /// Resolve a field path. `null` values count as present.
    #[must_use]
    pub fn lookup(&self, field: &FieldPath) -> Option<&Value> {
        field
            .segments
            .iter()
            .try_fold(&self.root, |node, segment| match node {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }

    #[must_use]
    pub fn contains(&self, field: &FieldPath) -> bool {
        self.lookup(field).is_some()
    }

    /// Returns the fields from `required` that are absent, in the given order.
    #[must_use]
    pub fn missing_fields<'a>(&self, required: &'a [FieldPath]) -> Vec<&'a FieldPath> {
        required.iter().filter(|f| !self.contains(f)).collect()
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
