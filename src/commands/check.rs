use crate::checker::{EvalContext, compile_rules};
use crate::cli::{CheckArgs, Cli};
use crate::engine::{Orchestrator, Report};
use crate::output::{
    ColorMode, ErrorOutput, JsonFormatter, LiveProgress, OutputFormat, OutputFormatter,
    TextFormatter,
};
use crate::scanner::{ExcludeFilter, RootedScanner};
use crate::{EXIT_CONFIG_ERROR, Result};

use super::context::{build_syntax_checker, load_config, write_output};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Run every configured rule against `args.root` and render the report.
///
/// Returns the verdict's exit code.
///
/// # Errors
/// Returns an error, before any rule runs, if the configuration is invalid or
/// the root is not a readable directory.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Load and compile the rules
    let loaded = load_config(args.config.as_deref(), &args.root, cli)?;
    let config = loaded.config;
    let rules = compile_rules(&config.rules)?;

    // 2. Open the tree and the syntax collaborator
    let filter = ExcludeFilter::new(&config.scanner.exclude)?;
    let use_gitignore = config.scanner.gitignore && !args.no_gitignore;
    let scanner = RootedScanner::open(&args.root, filter, use_gitignore)?;
    let syntax = build_syntax_checker(&config.syntax, args.syntax_timeout, scanner.root());

    // 3. Run, printing text lines live when they go to stdout
    let color = ColorMode::from(cli.color);
    let live_lines = args.format == OutputFormat::Text && args.output.is_none();
    let orchestrator = Orchestrator::new(rules, EvalContext::new(&scanner, syntax.as_ref()));
    let mut progress = LiveProgress::new(TextFormatter::new(color), live_lines, cli.quiet, cli.verbose);
    let report = orchestrator.run(&mut progress);
    progress.finish();

    // 4. Render what has not been printed yet
    let rendered = render(&report, args, color, live_lines)?;
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    Ok(report.exit_code())
}

fn render(report: &Report, args: &CheckArgs, color: ColorMode, live_lines: bool) -> Result<String> {
    match args.format {
        OutputFormat::Text if live_lines => {
            let summary = TextFormatter::new(color).format_summary(report);
            if report.outcomes().is_empty() {
                Ok(summary)
            } else {
                Ok(format!("\n{summary}"))
            }
        }
        // A file gets the whole rendering, uncolored unless forced.
        OutputFormat::Text => TextFormatter::with_colors(color.enabled(false)).format(report),
        OutputFormat::Json => JsonFormatter.format(report).map(|json| json + "\n"),
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
