//! Error handling module for sway-setup
//!
//! Provides the error types used across the crate, built with thiserror.
//!
//! - `CommandError` - the two ways an external command can fail
//! - `ActionError` - everything a menu action can report to the status line
//! - `SwaySetupError` - startup and terminal failures that end the process

use std::time::Duration;
use thiserror::Error;

/// Failure of a single external command.
///
/// There are exactly two kinds: the deadline elapsed, or the command
/// did not finish successfully.
#[derive(Error, Debug)]
pub enum CommandError {
    /// The command was still running when the timeout elapsed
    #[error("command timed out after {}s: {program}", .timeout.as_secs())]
    TimedOut { program: String, timeout: Duration },

    /// Non-zero exit, death by signal, or failure to spawn
    #[error("command failed: {program}: {reason}, output: {output}")]
    CommandFailed {
        program: String,
        /// Exit status or spawn error
        reason: String,
        /// Combined stdout/stderr captured before the failure
        output: String,
    },
}

impl CommandError {
    /// Create a failure for a command that could not be started
    pub fn spawn(program: impl Into<String>, err: &std::io::Error) -> Self {
        Self::CommandFailed {
            program: program.into(),
            reason: err.to_string(),
            output: String::new(),
        }
    }

    /// Captured output, if any
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { output, .. } => Some(output),
            Self::TimedOut { .. } => None,
        }
    }
}

/// Errors reported by a menu action.
///
/// These never end the process; the dispatcher renders them on the
/// status line.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("failed to enable seatd: {0}")]
    EnableSeatd(#[source] CommandError),

    #[error("failed to start seatd: {0}")]
    StartSeatd(#[source] CommandError),

    /// Filesystem errors pass through unclassified
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("home directory could not be determined")]
    HomeDirUnavailable,

    /// Raised when a string names no known action
    #[error("unknown action: {0}")]
    UnknownAction(String),
}

/// Fatal errors for startup and the terminal UI
#[derive(Error, Debug)]
pub enum SwaySetupError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors (loading, validation)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for fatal sway-setup operations
pub type Result<T> = std::result::Result<T, SwaySetupError>;

impl SwaySetupError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}
