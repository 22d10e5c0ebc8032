use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::config::{parse_config, presets};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, ShapeGuardError};

#[must_use]
pub fn run_init(args: &InitArgs, cli: &Cli) -> i32 {
    match run_init_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                println!("Created configuration file: {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a new configuration file, either the commented template or a preset.
///
/// # Errors
/// Returns an error if the file already exists (without --force), the preset is
/// unknown, or the file cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ShapeGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    let content = match args.preset.as_deref() {
        Some(name) => {
            let source = presets::preset_source(name)?;
            format!("# shape-guard configuration generated from preset '{name}'\n{source}")
        }
        None => generate_config_template(),
    };
    // Never write something `check` would reject.
    parse_config(&content)?;

    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(output_path, content)?;
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# shape-guard configuration file
version = "1"

# Run a built-in rule set before the rules below: "expo-app", "responsive-ui"
# or "premium-features".
# preset = "expo-app"

[scanner]
# Honour .gitignore files when expanding globs (default: true)
gitignore = true
# Paths never matched by globs
exclude = ["node_modules/**", ".git/**"]

[syntax]
# External syntax checker; {path} is replaced by the absolute file path.
# An empty command disables syntax checking.
command = "node"
args = ["--check", "{path}"]
# Seconds before a single check is abandoned (0 disables the limit)
timeout_secs = 30

# Every listed path must exist.
[[rules]]
name = "Essential files"
kind = "existence"
paths = ["package.json"]

# A structured document must parse and contain every dotted field.
[[rules]]
name = "package.json structure"
kind = "field-presence"
path = "package.json"
fields = ["name", "version"]

# Every matched file must contain the pattern.
# [[rules]]
# name = "Screens use the responsive hook"
# kind = "pattern-presence"
# paths = ["screens/*.js"]
# pattern = "useResponsive()"
# patterns = ["useResponsive", "scaleFont"]   # each absent one is named
# min_count = 1
# only_if = "StyleSheet"     # only check files mentioning this
# allow_empty = false        # an unmatched glob is a failure

# No matched file may contain the pattern.
# [[rules]]
# name = "No debug logging"
# kind = "pattern-absence"
# paths = ["**/*.js"]
# pattern = 'console\.log\('
# regex = true

# If the source uses a marker, its target must exist.
# [[rules]]
# name = "App imports resolve"
# kind = "cross-reference"
# source = "App.js"
# references = { "./screens/LoginScreen" = "screens/LoginScreen.js" }

# Run the syntax checker on each matched file.
# [[rules]]
# name = "JavaScript syntax"
# kind = "external-syntax"
# paths = ["*.js"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
