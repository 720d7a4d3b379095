//! CLI entrypoint for the item information service.
//!
//! The binary delegates to [`iteminfo_cli::run`], which loads configuration,
//! wires the request chain, and writes one reply per identifier to stdout.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    iteminfo_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
