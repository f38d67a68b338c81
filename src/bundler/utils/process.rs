//! External tool invocation.
//!
//! Every tool the bundler drives (`ldd`, `glib-compile-schemas`, `iscc`, cargo,
//! the cache updaters) is started through [`ToolCommand`], which takes an
//! argument vector instead of a shell string and hands back a structured
//! [`CommandOutput`] that callers check immediately.

use crate::bundler::error::{Error, Result};
use std::{
    ffi::{OsStr, OsString},
    process::{ExitStatus, Stdio},
};

/// Captured result of a finished tool invocation.
#[derive(Debug)]
pub struct CommandOutput {
    /// Rendered command line, for diagnostics
    pub command: String,
    /// Exit status
    pub status: ExitStatus,
    /// Captured standard output (lossy UTF-8)
    pub stdout: String,
    /// Captured standard error (lossy UTF-8)
    pub stderr: String,
}

impl CommandOutput {
    /// Turns a non-zero exit status into [`Error::ToolFailed`].
    pub fn check(self) -> Result<Self> {
        if self.status.success() {
            Ok(self)
        } else {
            Err(Error::ToolFailed {
                command: self.command,
                code: self.status.code(),
                stderr: self.stderr,
            })
        }
    }
}

/// Builder for a single external tool invocation.
#[derive(Debug, Clone)]
pub struct ToolCommand {
    program: OsString,
    args: Vec<OsString>,
    envs: Vec<(OsString, OsString)>,
}

impl ToolCommand {
    /// Starts a command for `program`.
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            envs: Vec::new(),
        }
    }

    /// Appends one argument.
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Appends several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    /// Sets an environment variable for the child.
    pub fn env(mut self, key: impl AsRef<OsStr>, value: impl AsRef<OsStr>) -> Self {
        self.envs
            .push((key.as_ref().to_os_string(), value.as_ref().to_os_string()));
        self
    }

    /// Renders the command line for logs and error messages.
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|part| {
                let part = part.to_string_lossy();
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("\"{part}\"")
                } else {
                    part.into_owned()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn build(&self) -> tokio::process::Command {
        let mut command = tokio::process::Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in &self.envs {
            command.env(key, value);
        }
        command
    }

    /// Runs to completion, capturing stdout and stderr.
    ///
    /// Only a failure to spawn is an error here; the exit status is left to
    /// the caller (see [`CommandOutput::check`]).
    pub async fn output(&self) -> Result<CommandOutput> {
        let command = self.display();
        log::debug!("Running: {}", command);

        let output = self
            .build()
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|error| Error::CommandFailed {
                command: command.clone(),
                error,
            })?;

        Ok(CommandOutput {
            command,
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// Runs with captured output and fails on non-zero exit.
    pub async fn run_checked(&self) -> Result<CommandOutput> {
        self.output().await?.check()
    }

    /// Runs with inherited stdout/stderr and fails on non-zero exit.
    ///
    /// Used for long-running compilers whose progress should stay visible.
    pub async fn run_inherited(&self) -> Result<()> {
        let command = self.display();
        log::debug!("Running: {}", command);

        let status = self
            .build()
            .stdin(Stdio::null())
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: command.clone(),
                error,
            })?;

        if !status.success() {
            return Err(Error::ToolFailed {
                command,
                code: status.code(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}
