use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Task processor settings suitable for JSON settings files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProcessorParams {
    /// Task script or executable. Looked up through `PATH` when no
    /// interpreter is set, otherwise treated as a script path.
    pub program: PathBuf,
    /// Optional interpreter the script is handed to (e.g. `python3`)
    pub interpreter: Option<String>,
}

impl Default for ProcessorParams {
    fn default() -> Self {
        Self {
            program: PathBuf::from("hello"),
            interpreter: None,
        }
    }
}

impl ProcessorParams {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
