//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for single-file and batch
//! watermarking. It wires user-provided options to the library API.
//!
//! If you are embedding the watermarker into another application, prefer
//! the high-level `watermark::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{CliArgs, normalize_legacy_flags};
pub use runner::run;
