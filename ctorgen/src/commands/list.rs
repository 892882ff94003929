use std::path::PathBuf;

use clap::{Args, ValueEnum};
use ctorgen_manifest::CtorgenToml;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct ListCommand {
    /// Path to ctorgen.toml (defaults to ./ctorgen.toml)
    #[arg(short, long, default_value = "ctorgen.toml")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let ctorgen_toml = CtorgenToml::open(&self.config).unwrap_or_exit();
        let report = ops::list(ctorgen_toml.manifest());

        match self.format {
            ListFormat::Text => report.render(&mut TerminalOutput),
            ListFormat::Json => {
                let json =
                    serde_json::to_string_pretty(&report).wrap_err("Failed to serialize types")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}
