//! High-level library API: the completion and usage messages printed by the
//! `hello` binary, and a task processor that runs a task script as a child
//! process and reports what it printed. Prefer these entrypoints over the
//! low-level `core` modules when embedding.
use std::process::{Command, Stdio};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::core::output::compose_output;
use crate::core::params::ProcessorParams;
use crate::error::{Error, Result};
use crate::types::{TaskName, TaskStatus};

/// Placeholder shown for the positional argument in the usage line.
pub const TASK_NAME_PLACEHOLDER: &str = "<TaskName>";

/// `Task <name> completed`, without a trailing newline.
pub fn completion_message(task: &TaskName) -> String {
    format!("Task {task} completed")
}

/// `Usage: <program> <TaskName>`, without a trailing newline.
pub fn usage_message(program: &str) -> String {
    format!("Usage: {program} {TASK_NAME_PLACEHOLDER}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessTaskRequest {
    pub task_name: TaskName,
}

impl ProcessTaskRequest {
    pub fn new(task_name: impl Into<TaskName>) -> Self {
        Self {
            task_name: task_name.into(),
        }
    }
}

/// Result of running a task script for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    pub task_name: TaskName,
    pub output: String,
    pub status: TaskStatus,
}

/// Run the configured task script for `request` and capture its output.
///
/// Only a missing script (when an interpreter is configured) fails the call.
/// A script that cannot be spawned still yields a `Processed` report whose
/// output describes the failure.
pub fn process_task(request: &ProcessTaskRequest, params: &ProcessorParams) -> Result<TaskReport> {
    info!("Processing task: {}", request.task_name);

    let mut command = match &params.interpreter {
        Some(interpreter) => {
            if !params.program.is_file() {
                return Err(Error::ScriptNotFound {
                    path: params.program.clone(),
                });
            }
            let mut command = Command::new(interpreter);
            command.arg(&params.program);
            command
        }
        None => Command::new(&params.program),
    };
    command
        .arg(request.task_name.as_str())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let output = match command.output() {
        Ok(captured) => {
            debug!(
                "Task script for {} exited with {}",
                request.task_name, captured.status
            );
            compose_output(
                &String::from_utf8_lossy(&captured.stdout),
                &String::from_utf8_lossy(&captured.stderr),
            )
        }
        Err(e) => {
            error!(
                "Failed to execute task script at {:?}: {}",
                params.program, e
            );
            format!("Failed to execute script: {e}")
        }
    };

    info!("Task processed: {}", request.task_name);

    Ok(TaskReport {
        task_name: request.task_name.clone(),
        output,
        status: TaskStatus::Processed,
    })
}
