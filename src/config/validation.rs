//! Configuration semantic validation.
//!
//! Runs after parsing and preset expansion, before any rule is compiled.
//! Glob and regex syntax is checked when rules are compiled.

use indexmap::IndexSet;

use super::model::CONFIG_VERSION;
use super::{CheckConfig, Config, RuleConfig};
use crate::document::FieldPath;
use crate::{Result, ShapeGuardError};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error for an unsupported version, empty or duplicate rule names,
/// empty parameter lists, or a zero `min_count`.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_version(config)?;

    let mut seen = IndexSet::new();
    for (i, rule) in config.rules.iter().enumerate() {
        if rule.name.trim().is_empty() {
            return Err(ShapeGuardError::Config(format!(
                "rules[{i}] ({}) has an empty name",
                rule.check.kind_name()
            )));
        }
        if !seen.insert(rule.name.as_str()) {
            return Err(ShapeGuardError::DuplicateRuleName(rule.name.clone()));
        }
        validate_rule(rule)?;
    }
    Ok(())
}

fn validate_version(config: &Config) -> Result<()> {
    match config.version.as_deref() {
        None | Some(CONFIG_VERSION) => Ok(()),
        Some(v) => Err(ShapeGuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

fn validate_rule(rule: &RuleConfig) -> Result<()> {
    let empty = |field: &str| {
        Err(ShapeGuardError::Config(format!(
            "rule '{}': `{field}` must not be empty",
            rule.name
        )))
    };

    match &rule.check {
        CheckConfig::Existence { paths } | CheckConfig::ExternalSyntax { paths, .. } => {
            if paths.is_empty() {
                return empty("paths");
            }
        }
        CheckConfig::FieldPresence { path, fields, .. } => {
            if path.is_empty() {
                return empty("path");
            }
            if fields.is_empty() {
                return empty("fields");
            }
            if let Some(field) = fields
                .iter()
                .find(|f| FieldPath::parse(f).has_empty_segment())
            {
                return Err(ShapeGuardError::Config(format!(
                    "rule '{}': field path '{field}' has an empty segment",
                    rule.name
                )));
            }
        }
        CheckConfig::PatternPresence {
            paths,
            pattern,
            patterns,
            min_count,
            ..
        } => {
            if paths.is_empty() {
                return empty("paths");
            }
            if pattern.is_none() && patterns.is_empty() {
                return Err(ShapeGuardError::Config(format!(
                    "rule '{}': set `pattern` or `patterns`",
                    rule.name
                )));
            }
            if pattern.iter().chain(patterns).any(String::is_empty) {
                return empty("pattern");
            }
            if *min_count == 0 {
                return Err(ShapeGuardError::Config(format!(
                    "rule '{}': `min_count` must be at least 1",
                    rule.name
                )));
            }
        }
        CheckConfig::PatternAbsence { paths, pattern, .. } => {
            if paths.is_empty() {
                return empty("paths");
            }
            if pattern.is_empty() {
                return empty("pattern");
            }
        }
        CheckConfig::CrossReference { source, references } => {
            if source.is_empty() {
                return empty("source");
            }
            if references.is_empty() {
                return empty("references");
            }
            if references.keys().any(String::is_empty) {
                return empty("references marker");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
