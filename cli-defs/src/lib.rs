//! Shared CLI type definitions for the `fmc-die-hard` build and runtime.
//!
//! The binary loads [`DieHardConfig`] through `OrthoConfig`, layering
//! defaults, a `.fmc.toml` dotfile, `FMC_*` environment variables and
//! command-line flags. The build script renders [`Cli`] into a man page, so
//! these types live in their own crate with no dependency on the checker.

// FIXME: File-wide suppressions are unavoidable here. Clap and OrthoConfig derive macros
// inject generated code throughout the module, and there is no mechanism to narrow
// the scope without restructuring the crate.
#![expect(
    non_snake_case,
    reason = "Clap/OrthoConfig derive macros generate helper modules with uppercase names"
)]
#![expect(
    missing_docs,
    reason = "OrthoConfig and Clap derive macros generate items that cannot be documented"
)]

use clap::{Args, Parser};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

/// Default jug capacities: the puzzle from the film.
pub const DEFAULT_CAPACITIES: [u32; 2] = [3, 5];
/// Default target quantity.
pub const DEFAULT_GOAL: u32 = 4;

/// Parameters of a generalised die-hard puzzle run.
///
/// The checker searches for a sequence of fills, empties and pours that
/// leaves exactly `goal` units in some jug.
#[derive(Args, OrthoConfig, Serialize, Deserialize, Default, Debug, Clone)]
#[ortho_config(prefix = "FMC_")]
pub struct DieHardConfig {
    /// Jug capacities, comma separated. Jugs are numbered from 1 in this order.
    #[ortho_config(default = DEFAULT_CAPACITIES.to_vec())]
    #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_CAPACITIES)]
    pub capacities: Vec<u32>,
    /// Quantity no jug may hold; reaching it is reported as a violation.
    #[ortho_config(default = DEFAULT_GOAL)]
    #[arg(long, default_value_t = DEFAULT_GOAL)]
    pub goal: u32,
    /// Abandon the search after this many unique states.
    #[arg(long)]
    pub max_states: Option<usize>,
}

/// Top-level CLI entry point consumed by the binary and the man page build.
#[derive(Parser, Serialize)]
#[command(
    name = "fmc-die-hard",
    about = "Model-check the generalised die-hard water jug puzzle"
)]
pub struct Cli {
    /// Puzzle configuration (merged with files and environment at runtime).
    #[command(flatten)]
    pub config: DieHardConfig,
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "test assertions")]

    use clap::CommandFactory;
    use figment::Jail;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn man_page_command_is_well_formed() {
        let command = Cli::command();
        command.clone().debug_assert();
        assert_eq!(command.get_name(), "fmc-die-hard");
        let flags: Vec<&str> = command
            .get_arguments()
            .filter_map(clap::Arg::get_long)
            .collect();
        assert_eq!(flags, vec!["capacities", "goal", "max-states"]);
    }

    #[rstest]
    fn cli_parses_flags_with_defaults() {
        let cli = Cli::try_parse_from(["fmc-die-hard", "--max-states", "50"]).expect("parse");
        assert_eq!(cli.config.capacities, DEFAULT_CAPACITIES.to_vec());
        assert_eq!(cli.config.goal, DEFAULT_GOAL);
        assert_eq!(cli.config.max_states, Some(50));
    }

    #[rstest]
    fn defaults_describe_the_film_puzzle() {
        Jail::expect_with(|_j| {
            let cfg = DieHardConfig::load_from_iter(["fmc-die-hard"]).expect("load");
            assert_eq!(cfg.capacities, vec![3, 5]);
            assert_eq!(cfg.goal, 4);
            assert_eq!(cfg.max_states, None);
            Ok(())
        });
    }

    #[rstest]
    fn env_config_loading() {
        Jail::expect_with(|j| {
            j.set_env("FMC_GOAL", "7");
            j.set_env("FMC_MAX_STATES", "100");
            let cfg = DieHardConfig::load_from_iter(["fmc-die-hard"]).expect("load");
            assert_eq!(cfg.goal, 7);
            assert_eq!(cfg.max_states, Some(100));
            Ok(())
        });
    }

    #[rstest]
    fn cli_overrides_env() {
        Jail::expect_with(|j| {
            j.set_env("FMC_GOAL", "7");
            let cfg = DieHardConfig::load_from_iter(["fmc-die-hard", "--goal", "2"]).expect("load");
            assert_eq!(cfg.goal, 2);
            Ok(())
        });
    }

    #[rstest]
    fn cli_accepts_capacity_lists() {
        Jail::expect_with(|_j| {
            let cfg = DieHardConfig::load_from_iter(["fmc-die-hard", "--capacities", "2,4,8"])
                .expect("load");
            assert_eq!(cfg.capacities, vec![2, 4, 8]);
            Ok(())
        });
    }

    #[rstest]
    fn loads_from_dotfile() {
        Jail::expect_with(|j| {
            j.create_file(".fmc.toml", "capacities = [3, 5, 7, 9]\ngoal = 8")?;
            let cfg = DieHardConfig::load_from_iter(["fmc-die-hard"]).expect("load");
            assert_eq!(cfg.capacities, vec![3, 5, 7, 9]);
            assert_eq!(cfg.goal, 8);
            Ok(())
        });
    }
}
