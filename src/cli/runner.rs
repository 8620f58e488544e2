use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::iter;
use std::path::Path;

use clap::Parser;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use hello_task::{TaskName, completion_message};

use super::args::CliArgs;
use super::errors::{AppError, EXIT_FAILURE};

const DEFAULT_PROGRAM_NAME: &str = "hello";

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (off when unset).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// File name of `argv[0]`, or `hello` when it is absent or empty.
pub fn program_name(argv0: Option<&OsStr>) -> String {
    argv0
        .and_then(|arg| Path::new(arg).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string())
}

/// Parse `argv` (program name first) and write the completion line to `out`.
///
/// Every user argument is taken literally, `--` included.
pub fn run<W: Write>(argv: &[OsString], out: &mut W) -> Result<TaskName, AppError> {
    let program = program_name(argv.first().map(OsString::as_os_str));
    let argv0 = argv
        .first()
        .cloned()
        .unwrap_or_else(|| OsString::from(DEFAULT_PROGRAM_NAME));
    let args = CliArgs::parse_from(
        iter::once(argv0)
            .chain(iter::once(OsString::from("--")))
            .chain(argv.iter().skip(1).cloned()),
    );

    let task = args
        .task_name()
        .ok_or(AppError::MissingArgument { program })?;
    if !args.ignored().is_empty() {
        debug!("Ignoring {} extra argument(s)", args.ignored().len());
    }

    writeln!(out, "{}", completion_message(&task))?;
    out.flush()?;

    info!("Reported task {:?} as completed", task.as_str());
    Ok(task)
}

/// Run and map the outcome to an exit status.
///
/// The usage line goes to `out` alongside regular output; any other failure
/// is reported on `err`.
pub fn execute<W: Write, E: Write>(argv: Vec<OsString>, out: &mut W, err: &mut E) -> u8 {
    match run(&argv, out) {
        Ok(_) => 0,
        Err(e) => {
            warn!("{e}");
            let written = match &e {
                AppError::MissingArgument { .. } => writeln!(out, "{e}").and_then(|()| out.flush()),
                AppError::Io(_) => writeln!(err, "error: {e}"),
            };
            if let Err(io) = written {
                debug!("Could not report failure: {io}");
            }
            EXIT_FAILURE
        }
    }
}
