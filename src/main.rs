//! `hello` CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: install logging, run against the
//! process arguments, and exit with the status the runner picked.

use std::io;
use std::process::ExitCode;

mod cli;

fn main() -> ExitCode {
    cli::init_logging();

    let code = cli::execute(
        std::env::args_os().collect(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    ExitCode::from(code)
}
