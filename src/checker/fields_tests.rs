use super::*;
use crate::checker::test_support::FakeSyntaxChecker;
use crate::checker::{Outcome, RuleKindTag};
use crate::scanner::memory::MemoryFiles;

fn package_check() -> FieldCheck {
    let fields = ["name", "version", "dependencies", "scripts", "dependencies.expo"]
        .iter()
        .map(|f| FieldPath::parse(f))
        .collect();
    FieldCheck::new("package.json", fields, DocumentFormat::Json)
}

fn run(files: &MemoryFiles, check: &FieldCheck) -> Outcome {
    let syntax = FakeSyntaxChecker::new();
    let ctx = EvalContext::new(files, &syntax);
    Outcome::from_findings("fields", RuleKindTag::FieldPresence, check.evaluate(&ctx))
}

#[test]
fn passes_when_all_fields_present() {
    let files = MemoryFiles::new().with_file(
        "package.json",
        r#"{"name":"app","version":"1.0.0","scripts":{},"dependencies":{"expo":"~51.0.0"}}"#,
    );

    let outcome = run(&files, &package_check());

    assert!(outcome.passed, "{}", outcome.detail);
    assert_eq!(outcome.detail, "all 5 fields present");
}

#[test]
fn lists_every_missing_field() {
    let files = MemoryFiles::new().with_file(
        "package.json",
        r#"{"name":"app","version":"1.0.0","dependencies":{"react":"18"}}"#,
    );

    let outcome = run(&files, &package_check());

    assert!(!outcome.passed);
    assert_eq!(outcome.failures.len(), 2);
    assert!(outcome.has_failure_kind(FailureKind::MissingField));
    assert!(outcome.detail.contains("`scripts`"));
    assert!(outcome.detail.contains("`dependencies.expo`"));
}

#[test]
fn malformed_document_is_parse_failure_not_missing_fields() {
    let files = MemoryFiles::new().with_file("package.json", r#"{"name": "app", "#);

    let outcome = run(&files, &package_check());

    assert!(!outcome.passed);
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].kind, FailureKind::ParseFailure);
    assert!(!outcome.has_failure_kind(FailureKind::MissingField));
    assert!(outcome.detail.contains("invalid JSON document"));
}

#[test]
fn missing_file_is_not_found() {
    let outcome = run(&MemoryFiles::new(), &package_check());

    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].kind, FailureKind::NotFound);
    assert_eq!(outcome.failures[0].subject, "package.json");
}

#[test]
fn unreadable_file_is_io_error() {
    let files = MemoryFiles::new().with_unreadable("package.json", "permission denied");

    let outcome = run(&files, &package_check());

    assert_eq!(outcome.failures[0].kind, FailureKind::IoError);
}

#[test]
fn toml_documents_are_supported() {
    let files = MemoryFiles::new().with_file("eas.toml", "[build]\nprofile = \"preview\"\n");
    let check = FieldCheck::new(
        "eas.toml",
        vec![FieldPath::parse("build.profile")],
        DocumentFormat::Toml,
    );

    assert!(run(&files, &check).passed);
}

#[test]
fn describe_mentions_format_and_fields() {
    let check = FieldCheck::new(
        "app.json",
        vec![FieldPath::parse("expo.name"), FieldPath::parse("expo.slug")],
        DocumentFormat::Json,
    );
    assert_eq!(check.describe(), "app.json (JSON) has expo.name, expo.slug");
}
