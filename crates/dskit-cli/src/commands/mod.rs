//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use dskit_core::DskitConfig;

pub mod generate;
pub mod init;
pub mod scan;

/// Design system build tools for React component libraries
#[derive(Parser)]
#[command(name = "dskit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the component rules document
    Rules {
        /// Preview without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Build the combined stylesheet
    Styles {
        /// Preview without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Generate the rules document and the combined stylesheet
    All {
        /// Preview without writing files
        #[arg(long)]
        dry_run: bool,
    },

    /// Show the components found in the project
    Scan {
        /// Print the scan as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default dskit.toml
    Init(init::InitArgs),
}

impl Cli {
    pub fn execute(self) -> Result<()> {
        let project_dir = match self.project {
            Some(dir) => dir,
            None => std::env::current_dir().context("Failed to resolve current directory")?,
        };

        match self.command {
            Commands::Rules { dry_run } => generate::cmd_rules(&load_config(&project_dir)?, &project_dir, dry_run),
            Commands::Styles { dry_run } => generate::cmd_styles(&load_config(&project_dir)?, &project_dir, dry_run),
            Commands::All { dry_run } => generate::cmd_all(&load_config(&project_dir)?, &project_dir, dry_run),
            Commands::Scan { json } => scan::execute(&load_config(&project_dir)?, &project_dir, json),
            Commands::Init(args) => init::execute(args, &project_dir),
        }
    }
}

fn load_config(project_dir: &Path) -> Result<DskitConfig> {
    let config = DskitConfig::load(project_dir)
        .with_context(|| format!("Failed to load configuration from {}", project_dir.display()))?;
    tracing::debug!(package = %config.package.name, modules = config.rules.modules.len(), "configuration loaded");
    Ok(config)
}
