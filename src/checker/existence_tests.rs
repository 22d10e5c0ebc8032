use super::*;
use crate::checker::test_support::{FakeSyntaxChecker, targets};
use crate::checker::{FailureKind, Outcome, RuleKindTag};
use crate::scanner::memory::MemoryFiles;

fn run(files: &MemoryFiles, check: &ExistenceCheck) -> Outcome {
    let syntax = FakeSyntaxChecker::new();
    let ctx = EvalContext::new(files, &syntax);
    Outcome::from_findings("exists", RuleKindTag::Existence, check.evaluate(&ctx))
}

#[test]
fn passes_when_all_paths_exist() {
    let files = MemoryFiles::new()
        .with_file("package.json", "{}")
        .with_file("App.js", "");
    let check = ExistenceCheck::new(targets(&["package.json", "App.js"]));

    let outcome = run(&files, &check);

    assert!(outcome.passed);
    assert_eq!(outcome.detail, "all 2 paths present");
}

#[test]
fn reports_every_missing_path_not_just_the_first() {
    let files = MemoryFiles::new().with_file("B", "");
    let check = ExistenceCheck::new(targets(&["A", "B", "C"]));

    let outcome = run(&files, &check);

    assert!(!outcome.passed);
    assert_eq!(outcome.failures.len(), 2);
    let subjects: Vec<_> = outcome.failures.iter().map(|f| f.subject.as_str()).collect();
    assert_eq!(subjects, vec!["A", "C"]);
    assert!(outcome.detail.contains("A: not found"));
    assert!(outcome.detail.contains("C: not found"));
    assert!(outcome.failures.iter().all(|f| f.kind == FailureKind::NotFound));
}

#[test]
fn directories_count_as_existing() {
    let files = MemoryFiles::new().with_file("screens/LoginScreen.js", "");
    let check = ExistenceCheck::new(targets(&["screens"]));

    assert!(run(&files, &check).passed);
}

#[test]
fn glob_requires_at_least_one_match() {
    let files = MemoryFiles::new().with_file("screens/LoginScreen.js", "");

    assert!(run(&files, &ExistenceCheck::new(targets(&["screens/*.js"]))).passed);
    let outcome = run(&files, &ExistenceCheck::new(targets(&["hooks/*.js"])));
    assert!(!outcome.passed);
    assert_eq!(outcome.failures[0].subject, "hooks/*.js");
}

#[test]
fn describe_lists_targets() {
    let check = ExistenceCheck::new(targets(&["package.json", "app.json"]));
    assert_eq!(check.describe(), "requires package.json, app.json");
}
