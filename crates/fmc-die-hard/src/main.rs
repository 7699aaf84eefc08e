//! Binary entry point for `fmc-die-hard`.

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> { fmc_die_hard::cli::run() }
