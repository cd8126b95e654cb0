use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// A pipeline that runs to completion exits with 0 or 1 depending on the
/// variant it ended in, so scripts can branch on it like any other command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// The pipeline finished with a Success
    Success = 0,
    /// The pipeline finished with a Failure
    PipelineFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config file, output file, invalid step, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PipelineFailed => write!(f, "Pipeline Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application errors of the pipeline CLI.
///
/// These are faults of the tool itself. A step that fails while evaluating
/// is not one of them: it ends up in the pipeline's `Failure` instead.
#[derive(Debug, Error)]
pub enum TwotrackError {
    #[error("Invalid pipeline step: {step}\nReason: {reason}\n\n💡 Hint: Steps look like 'add:5', 'sub:1', 'mul:2', 'div:3', 'positive', 'recover:0' or 'label:text'")]
    InvalidStep { step: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
