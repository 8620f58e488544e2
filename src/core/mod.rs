//! Core building blocks: processor settings and the rules for folding a
//! task script's captured streams into a single report. These are internal
//! primitives consumed by the high-level `api` module.
pub mod output;
pub mod params;
