use std::path::PathBuf;

use hello_task::{ProcessTaskRequest, ProcessorParams, TaskStatus, process_task};

fn hello_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_hello"))
}

#[test]
fn runs_hello_binary_and_captures_completion() {
    let params = ProcessorParams {
        program: hello_bin(),
        interpreter: None,
    };

    let report = process_task(&ProcessTaskRequest::new("Deploy"), &params).unwrap();
    assert_eq!(report.task_name.as_str(), "Deploy");
    assert_eq!(report.output, "Task Deploy completed");
    assert_eq!(report.status, TaskStatus::Processed);
}

#[test]
fn task_name_is_passed_as_single_argument() {
    let params = ProcessorParams {
        program: hello_bin(),
        interpreter: None,
    };

    let report = process_task(&ProcessTaskRequest::new("Say \"hi\" twice"), &params).unwrap();
    assert_eq!(report.output, "Task Say \"hi\" twice completed");
}

#[cfg(unix)]
#[test]
fn interpreter_runs_script_and_splits_streams() {
    use std::io::Write;

    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "echo \"Task $1 completed\"").unwrap();
    writeln!(script, "echo \"slow disk\" >&2").unwrap();

    let params = ProcessorParams {
        program: script.path().to_path_buf(),
        interpreter: Some("sh".to_string()),
    };

    let report = process_task(&ProcessTaskRequest::new("Deploy"), &params).unwrap();
    assert_eq!(report.output, "Task Deploy completed\n---STDERR---\nslow disk");
    assert_eq!(report.status, TaskStatus::Processed);
}

#[cfg(unix)]
#[test]
fn stderr_only_is_flagged_as_error() {
    use std::io::Write;

    let mut script = tempfile::NamedTempFile::new().unwrap();
    writeln!(script, "echo \"no task given\" >&2").unwrap();
    writeln!(script, "exit 3").unwrap();

    let params = ProcessorParams {
        program: script.path().to_path_buf(),
        interpreter: Some("sh".to_string()),
    };

    let report = process_task(&ProcessTaskRequest::new("Deploy"), &params).unwrap();
    assert_eq!(report.output, "ERROR: no task given");
}
