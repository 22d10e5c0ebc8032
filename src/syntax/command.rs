use std::ffi::OsString;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use super::{SyntaxChecker, SyntaxOutcome};

/// Argument token replaced by the absolute path of the file under check.
pub const PATH_PLACEHOLDER: &str = "{path}";

const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs an external command once per file, e.g. `node --check {path}`.
///
/// A zero exit status means the file is valid. Anything else is a defect whose
/// message is the command's stderr (or stdout when stderr is empty).
#[derive(Debug, Clone)]
pub struct CommandSyntaxChecker {
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    timeout: Option<Duration>,
}

impl CommandSyntaxChecker {
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            working_dir: None,
            timeout: None,
        }
    }

    /// Kill the command and report it unavailable once `timeout` elapses.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Substitute the file path into the configured arguments.
    /// Without a placeholder the path is appended as the last argument.
    fn build_args(&self, path: &Path) -> Vec<OsString> {
        let mut substituted = false;
        let mut args: Vec<OsString> = self
            .args
            .iter()
            .map(|arg| {
                if arg.contains(PATH_PLACEHOLDER) {
                    substituted = true;
                    OsString::from(arg.replace(PATH_PLACEHOLDER, &path.to_string_lossy()))
                } else {
                    OsString::from(arg)
                }
            })
            .collect();
        if !substituted {
            args.push(path.as_os_str().to_os_string());
        }
        args
    }

    fn spawn(&self, path: &Path) -> Result<Child, String> {
        let mut command = Command::new(&self.program);
        command
            .args(self.build_args(path))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        command.spawn().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                format!("`{}` is not available on PATH", self.program)
            } else {
                format!("failed to start `{}`: {e}", self.program)
            }
        })
    }

    /// Wait for the child until `deadline`. `Ok(None)` means it timed out.
    fn wait(child: &mut Child, deadline: Option<Instant>) -> std::io::Result<Option<ExitStatus>> {
        let Some(deadline) = deadline else {
            return child.wait().map(Some);
        };

        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(Some(status));
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(None);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    fn timed_out(&self) -> SyntaxOutcome {
        let secs = self.timeout.map_or(0.0, |t| t.as_secs_f64());
        SyntaxOutcome::Unavailable(format!("`{}` timed out after {secs:.1}s", self.program))
    }
}

impl SyntaxChecker for CommandSyntaxChecker {
    fn check_syntax(&self, path: &Path) -> SyntaxOutcome {
        let deadline = self.timeout.map(|t| Instant::now() + t);
        let mut child = match self.spawn(path) {
            Ok(child) => child,
            Err(reason) => return SyntaxOutcome::Unavailable(reason),
        };

        // Drain both pipes concurrently so a chatty checker cannot fill a pipe and stall.
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let status = match Self::wait(&mut child, deadline) {
            Ok(Some(status)) => status,
            Ok(None) => {
                let _ = child.kill();
                let _ = child.wait();
                return self.timed_out();
            }
            Err(e) => {
                return SyntaxOutcome::Unavailable(format!(
                    "failed waiting for `{}`: {e}",
                    self.program
                ));
            }
        };

        if status.success() {
            return SyntaxOutcome::Valid;
        }

        // A background process the checker left behind may still hold a pipe open.
        let (Some(stderr), Some(stdout)) = (collect(stderr, deadline), collect(stdout, deadline))
        else {
            return self.timed_out();
        };
        let message = if !stderr.trim().is_empty() {
            stderr.trim().to_string()
        } else if !stdout.trim().is_empty() {
            stdout.trim().to_string()
        } else {
            status.code().map_or_else(
                || format!("`{}` terminated by a signal", self.program),
                |code| format!("`{}` exited with status {code}", self.program),
            )
        };
        SyntaxOutcome::Defect(message)
    }
}

/// Read a pipe to its end on a separate thread, delivering the text once.
fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// Wait for a reader's text. `None` means the pipe was still open at `deadline`.
fn collect(rx: Option<Receiver<String>>, deadline: Option<Instant>) -> Option<String> {
    let Some(rx) = rx else {
        return Some(String::new());
    };
    let received = match deadline {
        Some(deadline) => rx.recv_timeout(deadline.saturating_duration_since(Instant::now())),
        None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
    };
    match received {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
