//! Crate-level error type and `Result` alias for the library API.
//! Converts I/O and settings-parsing errors, and reports task scripts that
//! cannot be found before an interpreter is launched.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings: {0}")]
    Config(#[from] serde_json::Error),

    #[error("File {} not found", path.display())]
    ScriptNotFound { path: PathBuf },
}
