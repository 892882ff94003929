use std::path::PathBuf;

use clap::Args;
use ctorgen_manifest::CtorgenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to ctorgen.toml (defaults to ./ctorgen.toml)
    #[arg(short, long, default_value = "ctorgen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let ctorgen_toml = CtorgenToml::open(&self.config).unwrap_or_exit();
        ops::check(&ctorgen_toml).render(&mut TerminalOutput);
        Ok(())
    }
}
