//! Configuration bootstrap command.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use dskit_core::config::CONFIG_FILENAME;
use dskit_core::DskitConfig;

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: InitArgs, project_dir: &Path) -> Result<()> {
    let path = project_dir.join(CONFIG_FILENAME);

    if path.exists() && !args.force {
        bail!("{} already exists. Use --force to overwrite it.", path.display());
    }

    dskit_codegen::write_atomic(&path, DskitConfig::default_config_content())?;

    println!("{} Created {}", "✓".green().bold(), path.display().to_string().cyan());
    println!();
    println!("{}", "Next steps:".bold());
    println!("  dskit scan      # Check which components are found");
    println!("  dskit all       # Generate the rules document and stylesheet");

    Ok(())
}
