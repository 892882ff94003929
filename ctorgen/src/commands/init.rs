use std::path::PathBuf;

use clap::Args;
use ctorgen_codegen::File;
use ctorgen_core::Visibility;
use ctorgen_manifest::{BindingChoice, Manifest, TypeConfig};
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result};

use super::UnwrapOrExit;

const BINDINGS: [BindingChoice; 4] = [
    BindingChoice::Default,
    BindingChoice::Splat,
    BindingChoice::Hash,
    BindingChoice::Kwargs,
];

#[derive(Args)]
pub struct InitCommand {
    /// Attribute names for the starter type
    #[arg(default_values_t = ["request".to_string(), "response".to_string()])]
    pub attributes: Vec<String>,

    /// Name of the starter type
    #[arg(short, long, default_value = "Controller")]
    pub name: String,

    /// Binding strategy (prompted when omitted)
    #[arg(short, long)]
    pub binding: Option<BindingChoice>,

    /// Reader visibility
    #[arg(short, long, default_value_t = Visibility::Private)]
    pub visibility: Visibility,

    /// Where to write the manifest
    #[arg(short, long, default_value = "ctorgen.toml")]
    pub output: PathBuf,

    /// Overwrite an existing manifest
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            eyre::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        let binding = match self.binding {
            Some(binding) => binding,
            None => Self::prompt_binding()?,
        };

        let content = self.render(binding).unwrap_or_exit();
        File::new(&self.output, content)
            .write()
            .wrap_err("Failed to write manifest")?;

        println!("Created {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("  ctorgen check -c {}", self.output.display());
        println!("  ctorgen generate -c {}", self.output.display());

        Ok(())
    }

    /// Render the starter manifest, validating it like any user-written one.
    fn render(&self, binding: BindingChoice) -> ctorgen_manifest::Result<String> {
        let config = TypeConfig::new(&self.attributes)
            .binding(binding)
            .visibility(self.visibility);
        let content = Manifest::starter(&self.name, config).to_toml_string()?;
        Manifest::from_str_with_filename(&content, &self.output.display().to_string())?;
        Ok(content)
    }

    fn prompt_binding() -> Result<BindingChoice> {
        let labels = [
            "default (positional)",
            "splat (positional)",
            "hash (mapping)",
            "kwargs (named)",
        ];
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a binding")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get binding selection")?;

        Ok(BINDINGS[selection])
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn command(output: PathBuf) -> InitCommand {
        InitCommand {
            attributes: vec!["host".to_string(), "port".to_string()],
            name: "Config".to_string(),
            binding: Some(BindingChoice::Hash),
            visibility: Visibility::Public,
            output,
            force: false,
        }
    }

    #[test]
    fn test_init_writes_valid_manifest() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("ctorgen.toml");

        command(output.clone()).run().unwrap();

        let manifest = Manifest::from_file(&output).unwrap();
        let config = manifest.get("Config").unwrap();
        assert_eq!(config.attributes, ["host", "port"]);
        assert_eq!(config.binding, BindingChoice::Hash);
        assert_eq!(config.visibility, Visibility::Public);
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("ctorgen.toml");
        std::fs::write(&output, "# mine").unwrap();

        assert!(command(output.clone()).run().is_err());
        assert_eq!(std::fs::read_to_string(&output).unwrap(), "# mine");
    }

    #[test]
    fn test_render_rejects_invalid_names() {
        let mut cmd = command(PathBuf::from("ctorgen.toml"));
        cmd.attributes = vec!["fn".to_string()];
        assert!(cmd.render(BindingChoice::Splat).is_err());
    }
}
