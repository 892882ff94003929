use std::path::PathBuf;

use clap::Args;
use ctorgen_manifest::CtorgenToml;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to ctorgen.toml (defaults to ./ctorgen.toml)
    #[arg(short, long, default_value = "ctorgen.toml")]
    pub config: PathBuf,

    /// Output file (defaults to [output] path in ctorgen.toml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let ctorgen_toml = CtorgenToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &ctorgen_toml,
            GenerateOptions {
                output: self.output.as_deref(),
                dry_run: self.dry_run,
            },
        )?;
        report.render(&mut TerminalOutput);

        Ok(())
    }
}
