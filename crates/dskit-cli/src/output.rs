//! Terminal output formatting.

use colored::Colorize;

use dskit_codegen::GeneratedStylesheet;
use dskit_core::{ModuleScan, ScanReport};

/// Print the directory scanned per module and one line per group found.
pub fn print_scan_summary(report: &ScanReport) {
    for module in &report.modules {
        println!("{} Scanning {}", "→".blue().bold(), module.root.display());
        for group in &module.groups {
            println!(
                "  {} {}: {} symbols, {} prop types",
                "✓".green(),
                group.name(),
                group.symbols.len(),
                group.prop_type_count()
            );
        }
        print_skipped(module);
    }
}

/// Print every module and group with symbol and props counts.
pub fn print_scan_report(report: &ScanReport) {
    if report.modules.is_empty() {
        println!("{}", "No modules found.".dimmed());
        return;
    }

    for module in &report.modules {
        println!(
            "{} {}",
            module.title.cyan().bold(),
            format!("({})", module.root.display()).dimmed()
        );

        if module.groups.is_empty() {
            println!("  {}", "No components found.".dimmed());
        }

        println!("  {:<24} {:<8} {:<10} {}", "Component", "Symbols", "Props", "Variants");
        println!("  {}", "-".repeat(52));
        for group in &module.groups {
            println!(
                "  {:<24} {:<8} {:<10} {}",
                truncate(group.name(), 22),
                group.symbols.len(),
                group.prop_type_count(),
                group.variants().len()
            );
        }
        print_skipped(module);
        println!();
    }

    println!("{} {} components", "Total:".bold(), report.component_count());
}

fn print_skipped(module: &ModuleScan) {
    for name in &module.skipped {
        println!("  {} {} (no source file)", "skipped".yellow(), name);
    }
}

/// Print which foundational sheets were found.
pub fn print_stylesheet_summary(generated: &GeneratedStylesheet) {
    for name in &generated.included {
        println!("  {} {}", "✓".green(), name);
    }
    for name in &generated.missing {
        println!("  {} {} (missing)", "✗".dimmed(), name.dimmed());
    }
    if !generated.has_component_styles {
        println!("  {}", "No component styles found; run the bundler first.".yellow());
    }
}

pub fn format_size(bytes: usize) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Button", 22), "Button");
        assert_eq!(truncate("VeryLongComponentName", 10), "VeryLon...");
    }
}
