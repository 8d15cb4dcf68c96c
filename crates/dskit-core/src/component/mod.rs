//! Component tree scanning.
//!
//! One pipeline serves every module. A module is either flat (one entry file
//! per group folder, every props declaration in it is reported) or recursive
//! (every source file below the group folder, props declarations are looked up
//! per exported symbol).

pub mod enumerate;
pub mod lexer;
pub mod model;
pub mod symbols;

use std::path::Path;

use crate::config::{DskitConfig, ModuleConfig};
use crate::error::{DskitError, DskitResult};

use enumerate::{read_source, SourceLocator};
use lexer::{ExtractMode, PropsExtractor};
use model::{ComponentGroup, ExtractedGroup, ModuleScan, PropSchema, ScanReport};

/// Scans the components tree described by a [`DskitConfig`].
#[derive(Debug, Clone)]
pub struct ComponentScanner<'a> {
    config: &'a DskitConfig,
    locator: SourceLocator,
    extractor: PropsExtractor,
}

impl<'a> ComponentScanner<'a> {
    pub fn new(config: &'a DskitConfig) -> Self {
        Self {
            config,
            locator: SourceLocator::from_config(&config.rules),
            extractor: PropsExtractor::new(config.rules.props_suffix.clone())
                .with_variant_filter(config.rules.filter_variants),
        }
    }

    /// Scan every configured module, in configured order.
    ///
    /// Fails if the components root or a required module root is missing.
    pub fn scan(&self, project_dir: &Path) -> DskitResult<ScanReport> {
        let root = self.config.components_root(project_dir);
        if !root.is_dir() {
            return Err(DskitError::ComponentsRootNotFound(root));
        }

        let mut report = ScanReport::default();
        for module in &self.config.rules.modules {
            if let Some(scan) = self.scan_module(&root, module)? {
                report.modules.push(scan);
            }
        }

        Ok(report)
    }

    /// Scan one module. An absent optional module yields `Ok(None)`.
    pub fn scan_module(&self, components_root: &Path, module: &ModuleConfig) -> DskitResult<Option<ModuleScan>> {
        let module_root = components_root.join(module.dir());
        if !module_root.is_dir() {
            if module.required {
                return Err(DskitError::ModuleRootNotFound {
                    module: module.name.clone(),
                    path: module_root,
                });
            }
            tracing::warn!(module = %module.name, path = %module_root.display(), "module directory missing, skipping");
            return Ok(None);
        }

        tracing::info!(module = %module.name, path = %module_root.display(), "scanning module");

        let enumerated = if module.recursive {
            self.locator.recursive_groups(&module_root)?
        } else {
            self.locator.flat_groups(&module_root)?
        };

        for name in &enumerated.skipped {
            tracing::warn!(module = %module.name, group = %name, "no source file found, skipping group");
        }

        let groups = enumerated
            .groups
            .into_iter()
            .map(|group| self.extract_group(group, module.recursive))
            .collect::<DskitResult<Vec<_>>>()?;

        Ok(Some(ModuleScan {
            name: module.name.clone(),
            title: module.title(),
            root: module_root,
            import_path: module.import_path(&self.config.package.name),
            groups,
            skipped: enumerated.skipped,
        }))
    }

    /// Read a group's files and extract its symbols and props schemas.
    ///
    /// With `per_symbol`, only `<Symbol>Props` declarations for the group's
    /// exported symbols are reported, wherever in the group they are declared.
    /// Otherwise every props declaration is.
    pub fn extract_group(&self, group: ComponentGroup, per_symbol: bool) -> DskitResult<ExtractedGroup> {
        let suffix = self.extractor.suffix();
        let mut sources = Vec::with_capacity(group.source_files.len());
        let mut group_symbols = Vec::new();

        for path in &group.source_files {
            let source = read_source(path)?;
            symbols::merge_symbols(&mut group_symbols, symbols::exported_symbols(&source, suffix));
            sources.push(source);
        }

        let mut schemas: Vec<PropSchema> = Vec::new();
        for (path, source) in group.source_files.iter().zip(&sources) {
            let found: Vec<PropSchema> = if per_symbol {
                group_symbols
                    .iter()
                    .flat_map(|symbol| self.extractor.extract(source, ExtractMode::Targeted(symbol)))
                    .collect()
            } else {
                self.extractor.extract(source, ExtractMode::Untargeted)
            };

            tracing::debug!(file = %path.display(), schemas = found.len(), "extracted source file");

            for schema in found {
                if !schemas.iter().any(|s| s.owner_name == schema.owner_name) {
                    schemas.push(schema);
                }
            }
        }

        Ok(ExtractedGroup {
            group,
            symbols: group_symbols,
            schemas,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "src/components/primitives/Button/Button.tsx",
            "export interface ButtonProps { variant?: \"primary\" | \"ghost\"; label: string }\nexport function Button() {}",
        );
        write(dir.path(), "src/components/primitives/Placeholder/notes.md", "todo");
        write(
            dir.path(),
            "src/components/layout/Stack/Stack.tsx",
            "export type StackProps = { gap: number };\nexport const Stack = () => null;",
        );
        write(
            dir.path(),
            "src/components/layout/Stack/parts/StackItem.tsx",
            "export interface StackItemProps { grow?: boolean }\ninterface InternalProps { x: 1 }\nexport const StackItem = () => null;",
        );
        dir
    }

    #[test]
    fn test_scan_reports_modules_in_order() {
        let dir = project();
        let config = DskitConfig::default();

        let report = ComponentScanner::new(&config).scan(dir.path()).unwrap();

        // compositions is optional and absent
        let names: Vec<_> = report.modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["primitives", "layout"]);

        let primitives = &report.modules[0];
        assert_eq!(primitives.groups.len(), 1);
        assert_eq!(primitives.skipped, vec!["Placeholder"]);
        assert_eq!(primitives.import_path, "@acme/ui/primitives");

        let button = &primitives.groups[0];
        assert_eq!(button.symbols, vec!["Button"]);
        assert_eq!(button.schemas[0].fields.len(), 2);
        assert_eq!(button.schemas[0].variants[0].alternatives, vec!["primary", "ghost"]);
    }

    #[test]
    fn test_recursive_group_collects_nested_symbols() {
        let dir = project();
        let config = DskitConfig::default();

        let report = ComponentScanner::new(&config).scan(dir.path()).unwrap();
        let stack = &report.modules[1].groups[0];

        assert_eq!(stack.name(), "Stack");
        assert_eq!(stack.symbols, vec!["Stack", "StackItem"]);
        let owners: Vec<_> = stack.schemas.iter().map(|s| s.owner_name.as_str()).collect();
        assert_eq!(owners, vec!["Stack", "StackItem"]);
    }

    #[test]
    fn test_missing_components_root_is_fatal() {
        let dir = TempDir::new().unwrap();
        let config = DskitConfig::default();

        let err = ComponentScanner::new(&config).scan(dir.path()).unwrap_err();
        assert!(matches!(err, DskitError::ComponentsRootNotFound(_)));
    }

    #[test]
    fn test_missing_required_module_is_fatal() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/components/layout")).unwrap();
        let config = DskitConfig::default();

        let err = ComponentScanner::new(&config).scan(dir.path()).unwrap_err();
        assert!(matches!(err, DskitError::ModuleRootNotFound { ref module, .. } if module == "primitives"));
    }

    #[test]
    fn test_flat_module_reports_every_props_declaration() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "menus/Menu/index.tsx",
            "export interface MenuProps { open: boolean }\nexport interface MenuItemProps { label: string }\nexport function Menu() {}",
        );
        let config = DskitConfig::default();
        let scanner = ComponentScanner::new(&config);

        let scan = scanner
            .scan_module(dir.path(), &ModuleConfig::new("menus", false, true))
            .unwrap()
            .unwrap();

        assert_eq!(scan.groups[0].prop_type_count(), 2);
    }

    #[test]
    fn test_recursive_group_finds_props_in_sibling_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/components/primitives/Box/Box.tsx", "export function Box() {}");
        write(
            dir.path(),
            "src/components/layout/Grid/Grid.tsx",
            "import type { GridProps } from \"./Grid.types\";\nexport const Grid = (props: GridProps) => null;",
        );
        write(
            dir.path(),
            "src/components/layout/Grid/Grid.types.ts",
            "export interface GridProps { columns: number; gap?: \"sm\" | \"lg\" }",
        );
        let config = DskitConfig::default();

        let report = ComponentScanner::new(&config).scan(dir.path()).unwrap();
        let grid = &report.modules[1].groups[0];

        assert_eq!(grid.symbols, vec!["Grid"]);
        assert_eq!(grid.schemas.len(), 1);
        assert_eq!(grid.schemas[0].owner_name, "Grid");
        assert_eq!(grid.schemas[0].fields.len(), 2);
        assert_eq!(grid.variants()[0].alternatives, vec!["sm", "lg"]);
    }
}
