use thiserror::Error;

use hello_task::usage_message;

/// Exit status for every failed invocation.
pub const EXIT_FAILURE: u8 = 1;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    /// Displays as the usage line.
    #[error("{}", usage_message(.program))]
    MissingArgument { program: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
