use std::ffi::OsString;

use clap::Parser;

use hello_task::TaskName;

/// Help and version flags are disabled and the runner prefixes user
/// arguments with `--`, so every argument is taken as a value.
#[derive(Debug, Parser)]
#[command(
    name = "hello",
    about = "Report a task as completed",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Name of the task to report. Arguments after it are ignored.
    #[arg(
        value_name = "TaskName",
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<OsString>,
}

impl CliArgs {
    pub fn task_name(&self) -> Option<TaskName> {
        self.args.first().map(|arg| TaskName::from_os_lossy(arg))
    }

    pub fn ignored(&self) -> &[OsString] {
        self.args.get(1..).unwrap_or_default()
    }
}
