//! Error handling module for chainup
//!
//! Provides centralized error handling with proper error types using thiserror.
//! Every failure the sequencer can hit maps onto one of these variants.

use std::process::ExitStatus;

use thiserror::Error;

/// Main error type for chainup
///
/// A step can fail in exactly two ways: the login shell never started, or it
/// started and the command terminated unsuccessfully. Both abort the sequence.
#[derive(Error, Debug)]
pub enum ChainupError {
    /// The login shell could not be spawned (or waited on) at all.
    #[error("could not launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran and exited non-zero, or was killed by a signal
    /// (in which case `status.code()` is `None`).
    #[error("`{command}` exited with {status}")]
    CommandFailed { command: String, status: ExitStatus },
}

/// Result type alias for chainup operations
pub type Result<T> = std::result::Result<T, ChainupError>;

impl ChainupError {
    /// The command entry this error belongs to.
    pub fn command(&self) -> &str {
        match self {
            Self::Launch { command, .. } => command,
            Self::CommandFailed { command, .. } => command,
        }
    }
}
