//! Shared types used across the crate.
//! Includes the task identifier (`TaskName`) and the processing status
//! reported by the task processor (`TaskStatus`).
use std::ffi::OsStr;

use serde::{Deserialize, Serialize};

/// Identifier of a task as supplied by the caller.
///
/// No validation beyond presence: an empty string is a valid identifier.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskName(String);

impl TaskName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Build from a raw process argument, replacing invalid UTF-8 with U+FFFD.
    pub fn from_os_lossy(arg: &OsStr) -> Self {
        Self(arg.to_string_lossy().into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TaskName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TaskName {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl std::fmt::Display for TaskName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TaskStatus {
    Processed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::Processed => write!(f, "Processed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    #[test]
    fn empty_name_is_kept_as_is() {
        let name = TaskName::from_os_lossy(&OsString::from(""));
        assert_eq!(name.as_str(), "");
        assert_eq!(name.to_string(), "");
    }

    #[cfg(unix)]
    #[test]
    fn invalid_utf8_is_replaced() {
        use std::os::unix::ffi::OsStrExt;

        let raw = OsStr::from_bytes(b"De\xffploy");
        assert_eq!(TaskName::from_os_lossy(raw).as_str(), "De\u{FFFD}ploy");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&TaskName::from("Deploy")).unwrap();
        assert_eq!(json, "\"Deploy\"");
    }
}
