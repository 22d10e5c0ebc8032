use std::path::Path;

use crate::config::{ConfigLoader, FileConfigLoader, load_preset};

use super::mock_fs::MockFileSystem;

fn load(content: &str) -> crate::Result<crate::config::LoadResult> {
    let fs = MockFileSystem::new().with_file("/app/.shape-guard.toml", content);
    FileConfigLoader::with_fs(fs).load(Path::new("/app"))
}

#[test]
fn preset_rules_run_before_file_rules() {
    let result = load(
        r#"
preset = "expo-app"

[[rules]]
name = "Custom hook"
kind = "existence"
paths = ["hooks/useResponsive.js"]
"#,
    )
    .unwrap();

    let preset_len = load_preset("expo-app").unwrap().rules.len();
    assert_eq!(result.preset_used.as_deref(), Some("expo-app"));
    assert_eq!(result.config.rules.len(), preset_len + 1);
    assert_eq!(result.config.rules[0].name, "Essential files");
    assert_eq!(result.config.rules[preset_len].name, "Custom hook");
}

#[test]
fn preset_excludes_are_merged_without_duplicates() {
    let result = load(
        r#"
preset = "expo-app"

[scanner]
gitignore = false
exclude = ["node_modules/**", "build/**"]
"#,
    )
    .unwrap();

    let exclude = &result.config.scanner.exclude;
    assert_eq!(
        exclude.iter().filter(|p| p.as_str() == "node_modules/**").count(),
        1
    );
    assert!(exclude.contains(&"build/**".to_string()));
    assert!(!result.config.scanner.gitignore);
}

#[test]
fn rule_name_clashing_with_preset_is_rejected() {
    let err = load(
        r#"
preset = "expo-app"

[[rules]]
name = "Essential files"
kind = "existence"
paths = ["README.md"]
"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("Duplicate rule name: 'Essential files'"));
}

#[test]
fn unknown_preset_is_rejected() {
    let err = load(r#"preset = "rails""#).unwrap_err();
    assert!(err.to_string().contains("Unknown preset: 'rails'"));
}
