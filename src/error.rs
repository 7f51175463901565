//! Error types for fcmd.
//!
//! Only fatal conditions are represented here. A directory that cannot be
//! opened is a per-segment outcome (see [`crate::scanner::ScanOutcome`]) and
//! never surfaces as an `FcmdError`.

use crate::pattern::PatternError;
use std::process::ExitCode;
use thiserror::Error;

/// Exit status used by clap when the required pattern is missing.
pub const EXIT_USAGE: u8 = 2;

#[derive(Error, Debug)]
pub enum FcmdError {
    #[error("environment variable '{var}' is not set")]
    MissingSearchPath { var: String },

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error("invalid state: {0}")]
    InvalidState(String),

    #[error("failed to write output: {}", crate::reporter::describe_io_error(.0))]
    Output(#[from] std::io::Error),
}

impl FcmdError {
    /// Create an InvalidState error for an operation on a released collection.
    pub fn released(operation: &str) -> Self {
        Self::InvalidState(format!("{operation} on a released collection"))
    }

    /// Whether the reader of the output went away. Such a run ends quietly.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, FcmdError::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            FcmdError::Output(_) => 1,
            FcmdError::MissingSearchPath { .. } => 3,
            FcmdError::Pattern(e) => e.exit_code(),
            FcmdError::InvalidState(_) => 70,
        }
    }
}

impl From<&FcmdError> for ExitCode {
    fn from(err: &FcmdError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, FcmdError>;
