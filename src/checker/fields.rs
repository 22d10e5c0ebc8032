use super::{EvalContext, Evaluator, Failure, FailureKind, Findings, plural, read_candidate};
use crate::document::{Document, DocumentFormat, FieldPath};

/// Requires a structured document to exist, parse, and contain every field.
#[derive(Debug, Clone)]
pub struct FieldCheck {
    path: String,
    fields: Vec<FieldPath>,
    format: DocumentFormat,
}

impl FieldCheck {
    #[must_use]
    pub fn new(path: impl Into<String>, fields: Vec<FieldPath>, format: DocumentFormat) -> Self {
        Self {
            path: path.into(),
            fields,
            format,
        }
    }
}

impl Evaluator for FieldCheck {
    fn evaluate(&self, ctx: &EvalContext<'_>) -> Findings {
        let note = format!("all {} present", plural(self.fields.len(), "field"));

        let content = match read_candidate(ctx, &self.path) {
            Ok(content) => content,
            Err(failure) => return Findings::new(vec![failure], note),
        };

        let document = match Document::parse(&content, self.format) {
            Ok(document) => document,
            Err(parse_failure) => {
                let failure = Failure::new(
                    FailureKind::ParseFailure,
                    &self.path,
                    parse_failure.to_string(),
                );
                return Findings::new(vec![failure], note);
            }
        };

        let failures = document
            .missing_fields(&self.fields)
            .into_iter()
            .map(|field| {
                Failure::new(
                    FailureKind::MissingField,
                    &self.path,
                    format!("missing field `{field}`"),
                )
            })
            .collect();

        Findings::new(failures, note)
    }

    fn describe(&self) -> String {
        let fields: Vec<&str> = self.fields.iter().map(FieldPath::as_str).collect();
        format!("{} ({}) has {}", self.path, self.format, fields.join(", "))
    }
}

#[cfg(test)]
#[path = "fields_tests.rs"]
mod tests;
