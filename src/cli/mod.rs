//! Everything between `main` and the library for the `hello` binary.
//!
//! `args` declares the single positional argument, `errors` the ways an
//! invocation can fail, and `runner` turns an argv into stdout text and an
//! exit status.
pub mod args;
pub mod errors;
pub mod runner;

pub use runner::{execute, init_logging};
