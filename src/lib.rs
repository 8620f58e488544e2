#![doc = r#"
hello-task — report a task as completed.

The `hello` binary takes one positional argument and prints
`Task <name> completed`; without it, it prints `Usage: hello <TaskName>` and
exits with status 1. This crate exposes the pieces behind that binary, plus a
small task processor that runs such a script as a child process and reports
what it printed.

Quick start: format the messages
--------------------------------
```rust
use hello_task::{completion_message, usage_message, TaskName};

assert_eq!(completion_message(&TaskName::from("Deploy")), "Task Deploy completed");
assert_eq!(usage_message("hello"), "Usage: hello <TaskName>");
```

Run a task script
-----------------
```rust,no_run
use hello_task::{process_task, ProcessTaskRequest, ProcessorParams};

fn main() -> hello_task::Result<()> {
    let params = ProcessorParams {
        program: "/opt/tasks/hello.py".into(),
        interpreter: Some("python3".to_string()),
    };

    let report = process_task(&ProcessTaskRequest::new("Deploy"), &params)?;
    println!("{}: {}", report.status, report.output);
    Ok(())
}
```

Error handling
--------------
Library functions return `hello_task::Result<T>`; match on `hello_task::Error`
to tell a missing script apart from I/O or settings errors.

Logging
-------
The library logs through `tracing`. The `hello` binary installs a subscriber
on stderr filtered by `RUST_LOG` (off by default), so stdout only ever
carries the completion or usage line.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

pub use crate::core::params::ProcessorParams;
pub use error::{Error, Result};
pub use types::{TaskName, TaskStatus};

pub use api::{
    ProcessTaskRequest, TaskReport, completion_message, process_task, usage_message,
};
