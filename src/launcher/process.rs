//! External command execution.
//!
//! `Invocation` describes one command line; `ProcessRunner` is the seam through
//! which the launcher probes for tools and runs orchestration steps.

use crate::error::{LaunchError, EXIT_FAILURE};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, warn};

/// A single external command: program, arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_dir: Option<PathBuf>,
}

impl Invocation {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            current_dir: None,
        }
    }

    /// Run the command from `dir` instead of the launcher's own directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    /// Shell-like rendering used in diagnostics and plans.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(quote_arg)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.current_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@+,".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

/// Executes external commands on behalf of the launcher.
pub trait ProcessRunner {
    /// Whether the command can be spawned and exits successfully. Output is discarded.
    fn probe(&self, invocation: &Invocation) -> bool;

    /// Run the command to completion with inherited stdio and return its exit code.
    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn probe(&self, invocation: &Invocation) -> bool {
        (**self).probe(invocation)
    }

    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError> {
        (**self).run(invocation)
    }
}

/// `ProcessRunner` backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn probe(&self, invocation: &Invocation) -> bool {
        let status = invocation
            .to_command()
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();
        match status {
            Ok(status) => {
                debug!(command = %invocation, success = status.success(), "Probe finished");
                status.success()
            }
            Err(e) => {
                debug!(command = %invocation, error = %e, "Probe could not spawn command");
                false
            }
        }
    }

    fn run(&self, invocation: &Invocation) -> Result<i32, LaunchError> {
        let status = invocation
            .to_command()
            .status()
            .map_err(|source| LaunchError::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(exit_code_of(status))
    }
}

/// Exit code of a finished child. Signal deaths map to `128 + signal` on Unix.
pub fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            warn!(signal, "Child process terminated by signal");
            return 128 + signal;
        }
    }
    EXIT_FAILURE
}
