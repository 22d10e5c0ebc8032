use std::io::{IsTerminal, Write};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::checker::{Outcome, Rule};
use crate::engine::ProgressSink;

use super::TextFormatter;

/// Prints each outcome to stdout the moment it is produced, with a spinner on
/// stderr naming the rule in flight.
///
/// The spinner is hidden in quiet mode or when stderr is not a TTY. Lines are
/// printed while the spinner is suspended so the two never interleave.
pub struct LiveProgress {
    spinner: ProgressBar,
    formatter: TextFormatter,
    print_lines: bool,
    verbose: u8,
}

impl LiveProgress {
    /// # Arguments
    /// * `print_lines` - print each outcome to stdout (text format, no `--output`)
    /// * `quiet` - hide the spinner and every line
    #[must_use]
    pub fn new(formatter: TextFormatter, print_lines: bool, quiet: bool, verbose: u8) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(formatter, print_lines && !quiet, quiet || !is_tty, verbose)
    }

    fn new_with_visibility(
        formatter: TextFormatter,
        print_lines: bool,
        hidden: bool,
        verbose: u8,
    ) -> Self {
        let spinner = if hidden {
            ProgressBar::hidden()
        } else {
            Self::create_spinner()
        };
        Self {
            spinner,
            formatter,
            print_lines,
            verbose,
        }
    }

    fn create_spinner() -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{pos}/{len}] {msg}")
                .expect("valid template"),
        );
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    }

    /// Clears the spinner from the terminal.
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressSink for LiveProgress {
    fn rule_started(&mut self, index: usize, total: usize, rule: &Rule) {
        self.spinner.set_length(total as u64);
        self.spinner.set_position(index as u64);
        self.spinner.set_message(rule.name().to_string());

        if self.verbose >= 2 {
            let line = format!("→ {} [{}]: {}", rule.name(), rule.tag(), rule.describe());
            self.spinner.suspend(|| eprintln!("{line}"));
        }
    }

    fn rule_finished(&mut self, outcome: &Outcome) {
        self.spinner.inc(1);
        if !self.print_lines {
            return;
        }
        let text = self.formatter.format_outcome(outcome);
        self.spinner.suspend(|| {
            let mut stdout = std::io::stdout().lock();
            // A closed stdout must not abort the run; the exit status still reports the verdict.
            let _ = stdout.write_all(text.as_bytes());
            let _ = stdout.flush();
        });
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
