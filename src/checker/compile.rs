use crate::config::{CheckConfig, RuleConfig};
use crate::document::{DocumentFormat, FieldPath};
use crate::error::Result;
use crate::matcher::Pattern;
use crate::scanner::{TargetSet, relative_path};

use super::{
    ExistenceCheck, FieldCheck, PatternAbsenceCheck, PatternPresenceCheck, Reference,
    ReferenceCheck, Rule, RuleKind, SyntaxCheck,
};

/// Compile validated rule configs into executable rules, keeping their order.
///
/// # Errors
/// Returns an error on the first malformed glob or regex, or the first path
/// that does not stay under the root.
pub fn compile_rules(configs: &[RuleConfig]) -> Result<Vec<Rule>> {
    configs.iter().map(compile_rule).collect()
}

fn compile_rule(config: &RuleConfig) -> Result<Rule> {
    let kind = match &config.check {
        CheckConfig::Existence { paths } => {
            RuleKind::Existence(ExistenceCheck::new(TargetSet::parse(paths, false)?))
        }
        CheckConfig::FieldPresence {
            path,
            fields,
            format,
        } => RuleKind::FieldPresence(FieldCheck::new(
            relative_path(path)?,
            fields.iter().map(|f| FieldPath::parse(f)).collect(),
            format.unwrap_or_else(|| DocumentFormat::from_path(path)),
        )),
        CheckConfig::PatternPresence {
            paths,
            pattern,
            patterns,
            regex,
            multiline,
            min_count,
            only_if,
            allow_empty,
        } => RuleKind::PatternPresence(
            PatternPresenceCheck::all_of(
                TargetSet::parse(paths, *allow_empty)?,
                pattern
                    .iter()
                    .chain(patterns)
                    .map(|p| Pattern::compile(p, *regex, *multiline))
                    .collect::<Result<Vec<_>>>()?,
            )
            .with_min_count(*min_count)
            .with_only_if(only_if.as_deref().map(Pattern::literal)),
        ),
        CheckConfig::PatternAbsence {
            paths,
            pattern,
            regex,
            multiline,
            allow_empty,
        } => RuleKind::PatternAbsence(PatternAbsenceCheck::new(
            TargetSet::parse(paths, *allow_empty)?,
            Pattern::compile(pattern, *regex, *multiline)?,
        )),
        CheckConfig::CrossReference { source, references } => {
            let references = references
                .iter()
                .map(|(marker, target)| -> Result<Reference> {
                    Ok(Reference::new(
                        Pattern::literal(marker.as_str()),
                        relative_path(target)?,
                    ))
                })
                .collect::<Result<Vec<_>>>()?;
            RuleKind::CrossReference(ReferenceCheck::new(
                TargetSet::parse(std::slice::from_ref(source), false)?,
                references,
            ))
        }
        CheckConfig::ExternalSyntax { paths, allow_empty } => {
            RuleKind::ExternalSyntax(SyntaxCheck::new(TargetSet::parse(paths, *allow_empty)?))
        }
    };
    Ok(Rule::new(&config.name, kind))
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
