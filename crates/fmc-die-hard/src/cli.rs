//! Command-line entry point for checking a die-hard puzzle.
//!
//! Configuration is layered by `OrthoConfig`: built-in defaults, then a
//! `.fmc.toml` dotfile, then `FMC_*` environment variables, then flags. The
//! report goes to standard output; logs go to standard error, filtered by
//! `RUST_LOG` (default `info`).

use std::{
    ffi::OsString,
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Context, Result, anyhow};
use cli_defs::DieHardConfig;
use fmc::SearchLimits;
use ortho_config::OrthoConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::model::DieHard;

/// Loads configuration from the process arguments and environment, checks
/// the puzzle and prints the report.
///
/// Exits with success when no jug can hold the goal quantity and with failure
/// when a solution was found.
///
/// # Errors
///
/// Returns an error if logging cannot be set up, the configuration cannot be
/// loaded or describes no puzzle, the search aborts, or the report cannot be
/// written.
pub fn run() -> Result<ExitCode> {
    init_tracing()?;
    let config = load_config(std::env::args_os())?;
    let holds = check_and_report(&config, &mut io::stdout().lock())?;
    Ok(if holds {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Merges `args` with the configuration files and environment.
///
/// # Errors
///
/// Returns an error if any configuration layer fails to parse.
pub fn load_config<I, T>(args: I) -> Result<DieHardConfig>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    DieHardConfig::load_from_iter(args).context("failed to load die-hard configuration")
}

/// Checks the puzzle `config` describes and writes the report to `out`.
///
/// Returns `true` when every invariant holds.
///
/// # Errors
///
/// Returns an error if the capacities are invalid, the search aborts, or
/// writing fails.
pub fn check_and_report<W: Write>(config: &DieHardConfig, out: &mut W) -> Result<bool> {
    let puzzle = DieHard::new(config.capacities.clone(), config.goal)
        .context("invalid die-hard configuration")?;
    let limits = config
        .max_states
        .map_or_else(SearchLimits::unbounded, SearchLimits::with_max_unique_states);
    let report = puzzle.check(limits).context("model check aborted")?;
    info!(
        holds = report.is_success(),
        unique_states = report.unique_state_count(),
        "die-hard check finished"
    );
    write!(out, "{report}").context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(report.is_success())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("failed to install tracing subscriber")
}
