//! The external command capability.
//!
//! Archive creation and extraction are delegated to the `7z` and `tar`
//! binaries. This module is the single place where child processes are
//! spawned: it accepts a command line in either pre-tokenized or shell-style
//! string form, runs it with piped stdio, and returns the decoded, trimmed
//! output together with the exit code.
//!
//! The await point inside [`run`] is the only suspension point of this
//! crate; nothing else blocks on the child process.
//!
//! # Example
//!
//! ```rust,no_run
//! use partzip::command;
//!
//! # async fn demo() -> partzip::Result<()> {
//! let output = command::run("7z i").await?;
//! println!("exit {}: {}", output.code, output.stdout);
//! # Ok(())
//! # }
//! ```

use std::process::Stdio;

use tokio::process::Command;

use crate::{Error, Result};

/// A command line in one of the two accepted shapes.
///
/// Planner-built invocations use the token form; callers may also pass a
/// single shell-style string, which is split with shell word rules before
/// execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// An ordered sequence of command tokens, program first.
    Tokens(Vec<String>),
    /// A single string tokenized with shell word-splitting rules.
    Shell(String),
}

impl CommandLine {
    /// Resolves the command line into its token form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CommandParse`] when a shell-style string contains
    /// unbalanced quoting, and [`Error::EmptyCommand`] when no tokens remain.
    pub fn into_tokens(self) -> Result<Vec<String>> {
        let tokens = match self {
            Self::Tokens(tokens) => tokens,
            Self::Shell(line) => shell_words::split(&line)?,
        };
        if tokens.is_empty() {
            return Err(Error::EmptyCommand);
        }
        Ok(tokens)
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(tokens: Vec<String>) -> Self {
        Self::Tokens(tokens)
    }
}

impl From<String> for CommandLine {
    fn from(line: String) -> Self {
        Self::Shell(line)
    }
}

impl From<&str> for CommandLine {
    fn from(line: &str) -> Self {
        Self::Shell(line.to_string())
    }
}

/// Captured output of a completed child process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, decoded as UTF-8 (lossily) and trimmed.
    pub stdout: String,
    /// Standard error, decoded as UTF-8 (lossily) and trimmed.
    pub stderr: String,
    /// Exit code; `-1` when the process was terminated by a signal.
    pub code: i32,
}

/// Runs a command to completion, capturing stdout, stderr, and exit code.
///
/// The calling task suspends while the child runs; the surrounding thread is
/// never blocked. No retry, timeout, or cancellation is applied at this
/// layer.
///
/// # Errors
///
/// Returns an error when the command line cannot be tokenized or the child
/// process cannot be spawned. A child that ran but failed is *not* an error
/// here; its stderr and exit code are returned for the caller to classify.
pub async fn run(command: impl Into<CommandLine>) -> Result<CommandOutput> {
    let tokens = command.into().into_tokens()?;
    log::debug!("running command: {tokens:?}");

    let (program, args) = tokens.split_first().ok_or(Error::EmptyCommand)?;
    let output = Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    Ok(CommandOutput {
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        code: output.status.code().unwrap_or(-1),
    })
}
