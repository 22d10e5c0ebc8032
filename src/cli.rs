use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "shape-guard")]
#[command(author, version, about = "Verify a generated source tree against declarative structural rules")]
#[command(long_about = "Checks that required files exist, that configuration documents carry \
    required fields, that sources contain (or omit) given patterns, and that cross-file \
    references resolve.\n\n\
    Exit codes:\n  \
    0 - All rules passed\n  \
    1 - At least one rule failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress lines and the summary
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every configured rule against a tree
    Check(CheckArgs),

    /// Write a starter configuration file
    Init(InitArgs),

    /// List the effective rules without running them
    Rules(RulesArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Root of the tree to validate
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Expand globs without honouring .gitignore files
    #[arg(long)]
    pub no_gitignore: bool,

    /// Per-file syntax checker timeout in seconds (0 disables; overrides config)
    #[arg(long, value_name = "SECS")]
    pub syntax_timeout: Option<u64>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".shape-guard.toml")]
    pub output: PathBuf,

    /// Start from a built-in preset instead of the commented template
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Root used for configuration discovery
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
