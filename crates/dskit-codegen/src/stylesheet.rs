//! Combined stylesheet generation.
//!
//! Consumers import a single stylesheet. It is built from the foundational
//! sheets in load order (reset, theme tokens, base, icons, responsive) followed
//! by the component styles the bundler already wrote, so component rules win
//! by normal cascade order.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use dskit_core::DskitConfig;

use crate::write::write_atomic;

/// Separator comment placed before the bundled component styles.
pub const COMPONENT_STYLES_MARKER: &str = "/* Component styles */";

/// Generated combined stylesheet.
#[derive(Debug, Clone)]
pub struct GeneratedStylesheet {
    pub content: String,
    /// Where the bundle was read from and where the result goes.
    pub path: PathBuf,
    /// Foundational sheets that were found and included, in order.
    pub included: Vec<String>,
    /// Foundational sheets that were configured but absent.
    pub missing: Vec<String>,
    /// Whether the component section has any content.
    pub has_component_styles: bool,
}

/// Build the combined stylesheet for a project from its configuration.
pub fn generate_stylesheet(config: &DskitConfig, project_dir: &Path) -> Result<GeneratedStylesheet> {
    aggregate_stylesheet(
        &config.styles_source_dir(project_dir),
        &config.styles.foundation,
        &config.styles_bundle(project_dir),
    )
}

/// Concatenate `foundation` (looked up in `source_dir`) and then the
/// component styles currently at `bundle`, under the marker line.
///
/// Missing foundational files and a missing bundle are skipped, not errors.
/// The marker line is always written, with an empty section when there are
/// no component styles.
pub fn aggregate_stylesheet(source_dir: &Path, foundation: &[String], bundle: &Path) -> Result<GeneratedStylesheet> {
    let mut content = String::new();
    let mut included = Vec::new();
    let mut missing = Vec::new();

    for name in foundation {
        let path = source_dir.join(name);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "foundational stylesheet missing, skipping");
            missing.push(name.clone());
            continue;
        }
        let css = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display()))?;
        content.push_str(&format!("/* {} */\n{}\n\n", name, css));
        included.push(name.clone());
    }

    let existing = if bundle.is_file() {
        Some(
            std::fs::read_to_string(bundle)
                .with_context(|| format!("Failed to read component stylesheet {}", bundle.display()))?,
        )
    } else {
        tracing::warn!(path = %bundle.display(), "component stylesheet not found, writing foundational styles only");
        None
    };

    // The marker is written even with nothing under it so a re-run can find it
    let components = existing.as_deref().map(component_section).unwrap_or_default();
    content.push_str(COMPONENT_STYLES_MARKER);
    content.push('\n');
    content.push_str(components);
    let has_component_styles = !components.trim().is_empty();

    Ok(GeneratedStylesheet {
        content,
        path: bundle.to_path_buf(),
        included,
        missing,
        has_component_styles,
    })
}

/// The component part of a bundle. A bundle that was already aggregated is
/// cut after its last marker line so foundational sheets are not stacked.
fn component_section(existing: &str) -> &str {
    let marker_line = format!("{}\n", COMPONENT_STYLES_MARKER);
    match existing.rfind(&marker_line) {
        Some(idx) => &existing[idx + marker_line.len()..],
        None => existing,
    }
}

/// Overwrite the bundle path with the combined stylesheet.
pub fn write_stylesheet(generated: &GeneratedStylesheet) -> Result<String> {
    write_atomic(&generated.path, &generated.content)?;
    Ok(generated.path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_order_and_tags() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("reset.css"), "*{margin:0}").unwrap();
        fs::write(dir.path().join("theme.css"), ":root{--c:red}").unwrap();
        let bundle = dir.path().join("dist/styles.css");
        fs::create_dir_all(bundle.parent().unwrap()).unwrap();
        fs::write(&bundle, ".btn{}").unwrap();

        let generated = aggregate_stylesheet(dir.path(), &names(&["reset.css", "theme.css"]), &bundle).unwrap();

        assert_eq!(
            generated.content,
            "/* reset.css */\n*{margin:0}\n\n/* theme.css */\n:root{--c:red}\n\n/* Component styles */\n.btn{}"
        );
        assert!(generated.has_component_styles);
    }

    #[test]
    fn test_missing_foundation_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("theme.css"), "t").unwrap();
        let bundle = dir.path().join("styles.css");
        fs::write(&bundle, ".x{}").unwrap();

        let generated = aggregate_stylesheet(dir.path(), &names(&["reset.css", "theme.css"]), &bundle).unwrap();

        assert!(!generated.content.contains("reset.css"));
        assert_eq!(generated.included, vec!["theme.css"]);
        assert_eq!(generated.missing, vec!["reset.css"]);
    }

    #[test]
    fn test_missing_bundle_yields_foundation_only() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("reset.css"), "r").unwrap();

        let generated =
            aggregate_stylesheet(dir.path(), &names(&["reset.css"]), &dir.path().join("dist/styles.css")).unwrap();

        assert_eq!(generated.content, "/* reset.css */\nr\n\n/* Component styles */\n");
        assert!(!generated.has_component_styles);
    }

    #[test]
    fn test_rerun_without_bundle_does_not_stack_foundation() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("reset.css"), "r").unwrap();
        let bundle = dir.path().join("dist/styles.css");
        let foundation = names(&["reset.css"]);

        let first = aggregate_stylesheet(dir.path(), &foundation, &bundle).unwrap();
        write_stylesheet(&first).unwrap();
        let second = aggregate_stylesheet(dir.path(), &foundation, &bundle).unwrap();

        assert_eq!(first.content, second.content);
        assert!(!second.has_component_styles);
    }

    #[test]
    fn test_rerun_does_not_stack_foundation() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("reset.css"), "r").unwrap();
        let bundle = dir.path().join("styles.css");
        fs::write(&bundle, ".btn{}").unwrap();
        let foundation = names(&["reset.css"]);

        let first = aggregate_stylesheet(dir.path(), &foundation, &bundle).unwrap();
        write_stylesheet(&first).unwrap();
        let second = aggregate_stylesheet(dir.path(), &foundation, &bundle).unwrap();

        assert_eq!(first.content, second.content);
        assert_eq!(fs::read_to_string(&bundle).unwrap(), first.content);
    }
}
