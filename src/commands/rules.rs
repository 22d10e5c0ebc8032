use std::fmt::Write;

use crate::checker::{Rule, compile_rules};
use crate::cli::{Cli, RulesArgs};
use crate::output::ErrorOutput;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, write_output};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the effective rules, after preset expansion and validation.
///
/// # Errors
/// Returns an error if the configuration is invalid.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<()> {
    let loaded = load_config(args.config.as_deref(), &args.root, cli)?;
    let rules = compile_rules(&loaded.config.rules)?;
    write_output(None, &format_rules(&rules), cli.quiet)
}

#[must_use]
pub fn format_rules(rules: &[Rule]) -> String {
    let mut output = String::new();
    for (i, rule) in rules.iter().enumerate() {
        let _ = writeln!(output, "{:>3}. {} [{}]", i + 1, rule.name(), rule.tag());
        let _ = writeln!(output, "     {}", rule.describe());
    }
    let noun = if rules.len() == 1 { "rule" } else { "rules" };
    let _ = writeln!(output, "{} {noun}", rules.len());
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
