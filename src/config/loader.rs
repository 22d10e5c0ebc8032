use std::path::{Path, PathBuf};

use crate::error::{Result, ShapeGuardError};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::ScannerConfig;
use super::presets;
use super::validation::validate_config;
use super::Config;

/// A loaded configuration plus where it came from.
///
/// The caller decides how to report side-effects (which file was used, which
/// preset was expanded, or that nothing was found).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadResult {
    pub config: Config,
    /// The file the configuration was read from; `None` means built-in defaults.
    pub source: Option<PathBuf>,
    /// The preset whose rules were prepended, if any.
    pub preset_used: Option<String>,
}

pub trait ConfigLoader {
    /// Discover and load the configuration for a tree rooted at `root`.
    ///
    /// # Errors
    /// Returns an error if a discovered file cannot be read, parsed, or validated.
    fn load(&self, root: &Path) -> Result<LoadResult>;

    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed, or validated.
    fn load_from_path(&self, path: &Path) -> Result<LoadResult>;
}

pub const LOCAL_CONFIG_NAME: &str = ".shape-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.shape-guard.toml` in the validated root
/// 2. `.shape-guard.toml` in the current directory
/// 3. `config.toml` in the platform user config directory
/// 4. An empty configuration with no rules
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn candidates(&self, root: &Path) -> Vec<PathBuf> {
        let mut paths = vec![root.join(LOCAL_CONFIG_NAME)];
        if let Ok(dir) = self.fs.current_dir() {
            paths.push(dir.join(LOCAL_CONFIG_NAME));
        }
        if let Some(dir) = self.fs.config_dir() {
            paths.push(dir.join(USER_CONFIG_NAME));
        }
        paths
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self, root: &Path) -> Result<LoadResult> {
        match self
            .candidates(root)
            .into_iter()
            .find(|path| self.fs.is_file(path))
        {
            Some(path) => self.load_from_path(&path),
            None => Ok(LoadResult {
                config: Config::default(),
                source: None,
                preset_used: None,
            }),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<LoadResult> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| ShapeGuardError::FileRead {
                    path: path.to_path_buf(),
                    source,
                })?;
        let (config, preset_used) = parse_config(&content)?;
        Ok(LoadResult {
            config,
            source: Some(path.to_path_buf()),
            preset_used,
        })
    }
}

/// Parse, expand the preset of, and validate a configuration document.
///
/// # Errors
/// Returns an error if the TOML is malformed, the preset is unknown, or
/// validation fails.
pub fn parse_config(content: &str) -> Result<(Config, Option<String>)> {
    let config: Config = toml::from_str(content)?;
    let preset_used = config.preset.clone();
    let config = expand_preset(config)?;
    validate_config(&config)?;
    Ok((config, preset_used))
}

/// Prepend the preset's rules and merge its scanner excludes.
fn expand_preset(config: Config) -> Result<Config> {
    let Some(name) = config.preset.as_deref() else {
        return Ok(config);
    };
    let preset = presets::load_preset(name)?;

    let mut rules = preset.rules;
    rules.extend(config.rules);

    let mut exclude = preset.scanner.exclude;
    for pattern in config.scanner.exclude {
        if !exclude.contains(&pattern) {
            exclude.push(pattern);
        }
    }

    Ok(Config {
        scanner: ScannerConfig {
            gitignore: config.scanner.gitignore,
            exclude,
        },
        rules,
        ..config
    })
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
