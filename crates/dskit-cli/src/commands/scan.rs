//! Scan command: report what the rules generator would see.

use anyhow::{Context, Result};
use std::path::Path;

use dskit_core::{ComponentScanner, DskitConfig};

use crate::output;

pub fn execute(config: &DskitConfig, project_dir: &Path, json: bool) -> Result<()> {
    let report = ComponentScanner::new(config).scan(project_dir)?;

    if json {
        let rendered = serde_json::to_string_pretty(&report).context("Failed to serialize scan report")?;
        println!("{}", rendered);
    } else {
        output::print_scan_report(&report);
    }

    Ok(())
}
