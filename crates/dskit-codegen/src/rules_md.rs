//! Aggregated component rules document.
//!
//! Renders the scan of the whole components tree, together with fixed usage
//! guidance, into one markdown file for coding assistants and humans. The
//! output depends only on the scan and the configuration, so an unchanged tree
//! always produces the same bytes.

use anyhow::Result;
use std::path::Path;

use dskit_core::config::PACKAGE_PLACEHOLDER;
use dskit_core::{ComponentScanner, DskitConfig, ModuleScan, ScanReport};

use crate::component_doc::render_component_block;
use crate::write::write_atomic;

const DEFAULT_USAGE_RULES: &str = include_str!("templates/usage_rules.md");
const DEFAULT_GENERAL_RULES: &str = include_str!("templates/general_rules.md");

/// Generated rules document.
#[derive(Debug, Clone)]
pub struct GeneratedRules {
    pub content: String,
    pub component_count: usize,
}

/// Scan the project's components tree and render the rules document.
pub fn generate_rules_md(config: &DskitConfig, project_dir: &Path) -> Result<(ScanReport, GeneratedRules)> {
    let report = ComponentScanner::new(config).scan(project_dir)?;
    let generated = render_rules_md(config, &report);
    Ok((report, generated))
}

/// Render the rules document from an existing scan.
pub fn render_rules_md(config: &DskitConfig, report: &ScanReport) -> GeneratedRules {
    let package = &config.package.name;
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", config.title()));
    md.push_str(&format!(
        "> Generated by dskit from `{}`. Do not edit by hand; run `dskit rules` to refresh.\n\n",
        config.rules.components_root.display()
    ));

    md.push_str("## Usage Rules\n\n");
    let usage = config.rules.usage_rules.as_deref().unwrap_or(DEFAULT_USAGE_RULES);
    push_block(&mut md, &usage.replace(PACKAGE_PLACEHOLDER, package));

    for module in &report.modules {
        render_module_section(&mut md, module, config);
    }

    if !config.rules.aliases.is_empty() {
        md.push_str("## Import Aliases\n\n");
        md.push_str("| Import | Provides |\n");
        md.push_str("|--------|----------|\n");
        for alias in &config.rules.aliases {
            md.push_str(&format!(
                "| `{}` | {} |\n",
                alias.alias.replace(PACKAGE_PLACEHOLDER, package),
                alias.description
            ));
        }
        md.push('\n');
    }

    md.push_str("## General Rules\n\n");
    let general = config.rules.general_rules.as_deref().unwrap_or(DEFAULT_GENERAL_RULES);
    push_block(&mut md, &general.replace(PACKAGE_PLACEHOLDER, package));

    GeneratedRules {
        content: md,
        component_count: report.component_count(),
    }
}

fn render_module_section(md: &mut String, module: &ModuleScan, config: &DskitConfig) {
    let count = module.groups.len();
    md.push_str(&format!(
        "## {} ({} {})\n\n",
        module.title,
        count,
        if count == 1 { "component" } else { "components" }
    ));

    if module.groups.is_empty() {
        md.push_str("_No components found._\n\n");
        return;
    }

    for group in &module.groups {
        md.push_str(&render_component_block(group, &module.import_path, &config.examples));
    }
}

/// Append free text followed by exactly one blank line.
fn push_block(md: &mut String, text: &str) {
    md.push_str(text.trim_end());
    md.push_str("\n\n");
}

/// Write the rules document to its configured path, replacing prior content.
pub fn write_rules_md(generated: &GeneratedRules, output: &Path) -> Result<String> {
    write_atomic(output, &generated.content)?;
    Ok(output.display().to_string())
}
