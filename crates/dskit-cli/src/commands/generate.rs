//! Generation commands: rules document and combined stylesheet.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use dskit_core::DskitConfig;

use crate::output;

pub fn cmd_rules(config: &DskitConfig, project_dir: &Path, dry_run: bool) -> Result<()> {
    let output_path = config.rules_output(project_dir);
    let (report, generated) = dskit_codegen::generate_rules_md(config, project_dir)?;

    output::print_scan_summary(&report);

    if dry_run {
        println!("{} Would generate: {}", "→".dimmed(), output_path.display());
        println!("{}", "─".repeat(40));
        println!("{}", generated.content);
    } else {
        let path = dskit_codegen::write_rules_md(&generated, &output_path)?;
        println!(
            "{} Generated rules for {} components ({}): {}",
            "✓".green().bold(),
            generated.component_count,
            output::format_size(generated.content.len()),
            path
        );
    }

    Ok(())
}

pub fn cmd_styles(config: &DskitConfig, project_dir: &Path, dry_run: bool) -> Result<()> {
    let generated = dskit_codegen::generate_stylesheet(config, project_dir)?;

    output::print_stylesheet_summary(&generated);

    if dry_run {
        println!("{} Would generate: {}", "→".dimmed(), generated.path.display());
        println!("{}", "─".repeat(40));
        println!("{}", generated.content);
    } else {
        let path = dskit_codegen::write_stylesheet(&generated)?;
        println!(
            "{} Generated stylesheet ({}): {}",
            "✓".green().bold(),
            output::format_size(generated.content.len()),
            path
        );
    }

    Ok(())
}

pub fn cmd_all(config: &DskitConfig, project_dir: &Path, dry_run: bool) -> Result<()> {
    println!("{}", "Generating all artifacts...".bold());

    // Scan first so a broken components tree leaves the stylesheet untouched too
    let output_path = config.rules_output(project_dir);
    let (report, rules) = dskit_codegen::generate_rules_md(config, project_dir)?;
    let styles = dskit_codegen::generate_stylesheet(config, project_dir)?;

    if dry_run {
        println!("  {} components -> {}", report.component_count(), output_path.display());
        println!(
            "  {} foundational sheets -> {}",
            styles.included.len(),
            styles.path.display()
        );
    } else {
        dskit_codegen::write_rules_md(&rules, &output_path)?;
        println!("  {} rules ({} components)", "✓".green(), rules.component_count);
        dskit_codegen::write_stylesheet(&styles)?;
        println!("  {} stylesheet ({} foundational sheets)", "✓".green(), styles.included.len());
    }

    println!();
    if dry_run {
        println!("{}", "Dry run complete. No files written.".dimmed());
    } else {
        println!("{} All artifacts generated.", "✓".green().bold());
    }

    Ok(())
}
