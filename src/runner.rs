//! Sequential execution of shell command entries.
//!
//! Each entry is handed verbatim to a login shell, so anything the shell
//! understands (pipes, `&&`, variable expansion, profile scripts) keeps
//! working inside a single entry. Execution is strictly sequential: a step
//! must terminate before the next one starts, and the first failure aborts
//! the rest of the sequence. There is no retry and no timeout — a step that
//! never exits holds the run here.

use std::process::Command;

use tracing::{debug, error, info};

use crate::error::{ChainupError, Result};

/// Shell used to interpret command entries. `-l` makes it a login shell so
/// the operator's profile (nvm, PATH additions) applies to every step.
const SHELL: &str = "bash";

/// Run every command in order, stopping at the first failure.
///
/// Returns `Ok(())` when all entries exited zero, including the vacuous case
/// of an empty list. On failure the returned error names the offending entry;
/// entries after it are never attempted.
pub fn run_sequence<S: AsRef<str>>(commands: &[S]) -> Result<()> {
    for (index, command) in commands.iter().enumerate() {
        let command = command.as_ref();
        info!("step {}/{}: {command}", index + 1, commands.len());
        println!("🔧 Executing: {command}");
        if let Err(err) = run_step(command) {
            error!("aborting sequence: {err}");
            return Err(err);
        }
    }
    Ok(())
}

/// Run a single command entry to completion.
///
/// The child inherits stdin/stdout/stderr, so it owns the terminal while it
/// runs; nothing is captured.
pub fn run_step(command: &str) -> Result<()> {
    run_step_with(SHELL, command)
}

fn run_step_with(shell: &str, command: &str) -> Result<()> {
    debug!("spawning `{shell} -lc '{command}'`");

    let mut child = Command::new(shell)
        .arg("-lc")
        .arg(command)
        .spawn()
        .map_err(|source| ChainupError::Launch {
            command: command.to_string(),
            source,
        })?;

    // Blocking wait: a long-running step (the node) holds the sequence here
    // until its process exits.
    let status = child.wait().map_err(|source| ChainupError::Launch {
        command: command.to_string(),
        source,
    })?;

    if status.success() {
        debug!("`{command}` completed");
        Ok(())
    } else {
        Err(ChainupError::CommandFailed {
            command: command.to_string(),
            status,
        })
    }
}
