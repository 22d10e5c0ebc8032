//! Setup shared by the commands: configuration loading, the syntax checker, and
//! output writing.

use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::{ConfigLoader, FileConfigLoader, LoadResult, SyntaxConfig};
use crate::output::ErrorOutput;
use crate::syntax::{CommandSyntaxChecker, NoSyntaxChecker, SyntaxChecker};

/// Load the configuration from `explicit` or by discovery from `root`, and
/// report on stderr where it came from.
///
/// # Errors
/// Returns an error if the configuration cannot be read, parsed, or validated.
pub fn load_config(explicit: Option<&Path>, root: &Path, cli: &Cli) -> crate::Result<LoadResult> {
    let loader = FileConfigLoader::new();
    let loaded = match explicit {
        Some(path) => loader.load_from_path(path)?,
        None => loader.load(root)?,
    };

    match &loaded.source {
        Some(path) if cli.verbose >= 1 => {
            eprintln!("Using configuration: {}", path.display());
        }
        None if !cli.quiet => ErrorOutput::new(cli.color.into()).print_warning(
            "no configuration file found; no rules will run",
            Some("create one with `shape-guard init --preset expo-app`"),
        ),
        _ => {}
    }
    if cli.verbose >= 1
        && let Some(preset) = &loaded.preset_used
    {
        eprintln!("Using preset: {preset}");
    }

    Ok(loaded)
}

/// Build the external syntax checker. An empty command disables it, and every
/// external-syntax rule then reports its files as unavailable.
#[must_use]
pub fn build_syntax_checker(
    config: &SyntaxConfig,
    timeout_override: Option<u64>,
    working_dir: &Path,
) -> Box<dyn SyntaxChecker> {
    if config.command.trim().is_empty() {
        return Box::new(NoSyntaxChecker);
    }
    let timeout_secs = timeout_override.unwrap_or(config.timeout_secs);
    let timeout = (timeout_secs > 0).then(|| Duration::from_secs(timeout_secs));

    Box::new(
        CommandSyntaxChecker::new(config.command.trim(), config.args.clone())
            .with_timeout(timeout)
            .with_working_dir(working_dir),
    )
}

/// Write output to a file or stdout.
///
/// When `output_path` is `Some`, the content is written to the file (creating
/// parent directories if needed). `quiet` only affects stdout.
///
/// # Errors
/// Returns an error if the file or its parent directory cannot be written.
pub fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
