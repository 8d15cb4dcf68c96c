//! Exported component symbol extraction.

use regex::Regex;
use std::sync::LazyLock;

static EXPORTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\bexport\s+(?:default\s+)?(?:(?:async\s+)?function\s*\*?\s*|const\s+)([A-Za-z_$][\w$]*)",
    )
    .unwrap()
});

/// Names introduced by `export function` or `export const` that look like
/// components: leading uppercase letter, not ending with `props_suffix`.
///
/// Duplicates are dropped, keeping first-occurrence order.
pub fn exported_symbols(source: &str, props_suffix: &str) -> Vec<String> {
    let mut symbols: Vec<String> = Vec::new();

    for caps in EXPORTED.captures_iter(source) {
        let name = &caps[1];
        if is_component_name(name, props_suffix) && !symbols.iter().any(|s| s == name) {
            symbols.push(name.to_string());
        }
    }

    symbols
}

fn is_component_name(name: &str, props_suffix: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase())
        && (props_suffix.is_empty() || !name.ends_with(props_suffix))
}

/// Merge `incoming` into `symbols`, skipping names already present.
pub fn merge_symbols(symbols: &mut Vec<String>, incoming: Vec<String>) {
    for name in incoming {
        if !symbols.contains(&name) {
            symbols.push(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_functions_and_consts_in_order() {
        let source = r#"
export const Tabs = ({ children }: TabsProps) => <div>{children}</div>;
export function TabList() { return null; }
export default function TabPanel() { return null; }
export async function LazyTab() { return null; }
"#;
        assert_eq!(
            exported_symbols(source, "Props"),
            vec!["Tabs", "TabList", "TabPanel", "LazyTab"]
        );
    }

    #[test]
    fn test_filters_lowercase_and_props_names() {
        let source = r#"
export const useTabs = () => {};
export const tabVariants = {};
export const DefaultTabProps = {};
export function Tabs() {}
"#;
        assert_eq!(exported_symbols(source, "Props"), vec!["Tabs"]);
    }

    #[test]
    fn test_deduplicates_first_occurrence() {
        let source = "export const Modal = 1;\nexport function Dialog() {}\nexport const Modal = 2;";
        assert_eq!(exported_symbols(source, "Props"), vec!["Modal", "Dialog"]);
    }

    #[test]
    fn test_ignores_types_and_reexports() {
        let source = "export interface ModalProps {}\nexport type Size = 'a';\nexport { Modal } from './Modal';";
        assert!(exported_symbols(source, "Props").is_empty());
    }

    #[test]
    fn test_merge_symbols() {
        let mut symbols = vec!["Grid".to_string()];
        merge_symbols(&mut symbols, vec!["GridItem".to_string(), "Grid".to_string()]);
        assert_eq!(symbols, vec!["Grid", "GridItem"]);
    }
}
