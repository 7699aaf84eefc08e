//! Renders the `fmc-die-hard` man page.
//!
//! The page is written to `$OUT_DIR/<command>.1` from the [`Cli`] definition
//! shared through `cli-defs`, so flags documented there and flags accepted at
//! runtime cannot drift apart.

use std::{
    env,
    fs,
    io,
    path::{Path, PathBuf},
};

use clap::CommandFactory;
use clap_mangen::Man;
use cli_defs::Cli;

fn write_man_page(out_dir: &Path) -> io::Result<PathBuf> {
    let command = Cli::command();
    let page = out_dir.join(format!("{}.1", command.get_name()));
    let mut roff = Vec::new();
    Man::new(command).render(&mut roff)?;
    fs::write(&page, roff)?;
    Ok(page)
}

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=../../cli-defs/src");
    println!("cargo::rerun-if-changed=build.rs");

    // Absent under `cargo check` and IDE analysis.
    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return Ok(());
    };
    write_man_page(&out_dir)?;
    Ok(())
}
