//! Component API model.
//!
//! Everything here is rebuilt from the source tree on every run and never
//! persisted.

use serde::Serialize;
use std::path::PathBuf;

/// One folder under a module root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentGroup {
    pub name: String,
    /// One entry file for flat modules, every collected file for recursive ones.
    pub source_files: Vec<PathBuf>,
}

/// A single declared prop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropField {
    pub name: String,
    pub optional: bool,
    /// Declared type as written in the source, not further parsed.
    pub declared_type: String,
}

/// A field restricted to a fixed set of string literals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantField {
    pub name: String,
    pub alternatives: Vec<String>,
}

/// The declared shape of a component's props object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropSchema {
    /// Symbol the schema belongs to (`Button` for `ButtonProps`).
    pub owner_name: String,
    /// Fields in declaration order, duplicates included.
    pub fields: Vec<PropField>,
    pub variants: Vec<VariantField>,
}

impl PropSchema {
    pub fn new(owner_name: impl Into<String>) -> Self {
        Self {
            owner_name: owner_name.into(),
            fields: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.name == name)
    }

    /// Fields with duplicates collapsed: a repeated name keeps the position of
    /// its first declaration and the value of its last.
    pub fn resolved_fields(&self) -> Vec<&PropField> {
        let mut resolved: Vec<&PropField> = Vec::new();
        for field in &self.fields {
            match resolved.iter_mut().find(|f| f.name == field.name) {
                Some(slot) => *slot = field,
                None => resolved.push(field),
            }
        }
        resolved
    }

    /// Record a variant, replacing an earlier one of the same name in place.
    pub fn insert_variant(&mut self, variant: VariantField) {
        insert_variant(&mut self.variants, variant);
    }
}

/// Insert into an ordered variant list with map-overwrite semantics.
pub fn insert_variant(variants: &mut Vec<VariantField>, variant: VariantField) {
    match variants.iter_mut().find(|v| v.name == variant.name) {
        Some(existing) => *existing = variant,
        None => variants.push(variant),
    }
}

/// Extraction result for one component group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedGroup {
    pub group: ComponentGroup,
    /// Exported component symbols, first occurrence order across files.
    pub symbols: Vec<String>,
    pub schemas: Vec<PropSchema>,
}

impl ExtractedGroup {
    pub fn name(&self) -> &str {
        &self.group.name
    }

    /// Number of props declarations found for the group.
    pub fn prop_type_count(&self) -> usize {
        self.schemas.len()
    }

    /// Variants across all schemas, later schemas overwriting earlier names.
    pub fn variants(&self) -> Vec<VariantField> {
        let mut merged = Vec::new();
        for schema in &self.schemas {
            for variant in &schema.variants {
                insert_variant(&mut merged, variant.clone());
            }
        }
        merged
    }
}

/// Scan result for one module.
#[derive(Debug, Clone, Serialize)]
pub struct ModuleScan {
    pub name: String,
    pub title: String,
    pub root: PathBuf,
    /// Import path prefix for the module's groups.
    pub import_path: String,
    pub groups: Vec<ExtractedGroup>,
    /// Folders that had no locatable source file.
    pub skipped: Vec<String>,
}

/// Scan result for the whole components tree, modules in configured order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    pub modules: Vec<ModuleScan>,
}

impl ScanReport {
    pub fn component_count(&self) -> usize {
        self.modules.iter().map(|m| m.groups.len()).sum()
    }
}
