//! Config discovery order: root, current directory, user config dir, defaults.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};

use super::mock_fs::MockFileSystem;

const ONE_RULE: &str = r#"
[[rules]]
name = "from-root"
kind = "existence"
paths = ["package.json"]
"#;

fn rule_names(config: &Config) -> Vec<&str> {
    config.rules.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn returns_empty_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let result = loader.load(Path::new("/app")).unwrap();

    assert_eq!(result.config, Config::default());
    assert!(result.source.is_none());
    assert!(result.preset_used.is_none());
}

#[test]
fn loads_config_from_validated_root() {
    let fs = MockFileSystem::new().with_file("/app/.shape-guard.toml", ONE_RULE);
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load(Path::new("/app")).unwrap();

    assert_eq!(rule_names(&result.config), vec!["from-root"]);
    assert_eq!(result.source, Some(PathBuf::from("/app/.shape-guard.toml")));
}

#[test]
fn root_config_takes_priority_over_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/work")
        .with_file("/app/.shape-guard.toml", ONE_RULE)
        .with_file(
            "/work/.shape-guard.toml",
            "[[rules]]\nname = \"from-cwd\"\nkind = \"existence\"\npaths = [\"a\"]\n",
        );
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load(Path::new("/app")).unwrap();

    assert_eq!(rule_names(&result.config), vec!["from-root"]);
}

#[test]
fn falls_back_to_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/work")
        .with_file("/work/.shape-guard.toml", ONE_RULE);
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load(Path::new("/app")).unwrap();

    assert_eq!(result.source, Some(PathBuf::from("/work/.shape-guard.toml")));
}

#[test]
fn falls_back_to_user_config_dir() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/dev/.config/shape-guard")))
        .with_file("/home/dev/.config/shape-guard/config.toml", ONE_RULE);
    let loader = FileConfigLoader::with_fs(fs);

    let result = loader.load(Path::new("/app")).unwrap();

    assert_eq!(
        result.source,
        Some(PathBuf::from("/home/dev/.config/shape-guard/config.toml"))
    );
}

#[test]
fn missing_user_config_dir_is_skipped() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);

    assert!(loader.load(Path::new("/app")).unwrap().source.is_none());
}

#[test]
fn explicit_path_must_exist() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/rules.toml"))
        .unwrap_err();

    assert!(err.to_string().contains("/nowhere/rules.toml"));
}
