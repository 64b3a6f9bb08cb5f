//! watermark CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: normalise legacy flags, parse
//! args, dispatch to single-file or batch processing, and exit with appropriate
//! status. For programmatic use, prefer the library API (`watermark::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse_from(cli::normalize_legacy_flags(std::env::args_os()));
    cli::run(args)
}
