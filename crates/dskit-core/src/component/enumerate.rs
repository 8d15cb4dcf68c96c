//! Directory and source file enumeration.
//!
//! Everything returned here is sorted by name so repeated runs see the tree in
//! the same order regardless of what the platform's directory listing does.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::model::ComponentGroup;
use crate::config::RulesConfig;
use crate::error::{DskitError, DskitResult};

/// Generic entry file stem tried after `<Group>.<ext>`.
pub const INDEX_STEM: &str = "index";

/// Groups found under a module root, plus folders that were passed over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enumerated {
    pub groups: Vec<ComponentGroup>,
    pub skipped: Vec<String>,
}

/// Locates component source files by naming convention.
#[derive(Debug, Clone)]
pub struct SourceLocator {
    extensions: Vec<String>,
    ignore_patterns: Vec<String>,
}

impl SourceLocator {
    pub fn new<S: Into<String>>(extensions: impl IntoIterator<Item = S>) -> Self {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            ignore_patterns: Vec::new(),
        }
    }

    /// Skip files whose name contains any of the given substrings.
    pub fn with_ignore_patterns<S: Into<String>>(mut self, patterns: impl IntoIterator<Item = S>) -> Self {
        self.ignore_patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_config(rules: &RulesConfig) -> Self {
        Self::new(rules.source_extensions.iter().cloned())
            .with_ignore_patterns(rules.ignore_patterns.iter().cloned())
    }

    /// Whether `path` has a source extension and matches no ignore pattern.
    pub fn is_source_file(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext));
        if !has_extension {
            return false;
        }
        let file_name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        !self.ignore_patterns.iter().any(|p| file_name.contains(p.as_str()))
    }

    /// Find a group's entry file: `<Group>.<ext>` first, then `index.<ext>`.
    ///
    /// Returns `None` for placeholder folders with neither.
    pub fn locate_entry_file(&self, group_dir: &Path, group_name: &str) -> Option<PathBuf> {
        [group_name, INDEX_STEM]
            .iter()
            .flat_map(|stem| self.extensions.iter().map(move |ext| format!("{}.{}", stem, ext)))
            .map(|file| group_dir.join(file))
            .find(|path| path.is_file())
    }

    /// Flat enumeration: immediate sub-directories that hold an entry file.
    pub fn flat_groups(&self, root: &Path) -> DskitResult<Enumerated> {
        let mut result = Enumerated::default();

        for name in list_subdirectories(root)? {
            match self.locate_entry_file(&root.join(&name), &name) {
                Some(entry) => result.groups.push(ComponentGroup {
                    name,
                    source_files: vec![entry],
                }),
                None => {
                    tracing::debug!(group = %name, "no entry file, skipping");
                    result.skipped.push(name);
                }
            }
        }

        Ok(result)
    }

    /// Recursive enumeration: each sub-directory collects every source file
    /// beneath it; loose source files in `root` become single-file groups.
    pub fn recursive_groups(&self, root: &Path) -> DskitResult<Enumerated> {
        let mut result = Enumerated::default();

        for name in list_subdirectories(root)? {
            let files = self.collect_source_files(&root.join(&name))?;
            if files.is_empty() {
                tracing::debug!(group = %name, "no source files, skipping");
                result.skipped.push(name);
            } else {
                result.groups.push(ComponentGroup {
                    name,
                    source_files: files,
                });
            }
        }

        for path in list_files(root)? {
            if !self.is_source_file(&path) {
                continue;
            }
            let Some(stem) = loose_file_group_name(&path) else {
                continue;
            };
            match result.groups.iter_mut().find(|g| g.name == stem) {
                Some(group) => group.source_files.push(path),
                None => result.groups.push(ComponentGroup {
                    name: stem,
                    source_files: vec![path],
                }),
            }
        }

        result.groups.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    /// Every source file below `dir`, at any depth, sorted by path.
    pub fn collect_source_files(&self, dir: &Path) -> DskitResult<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(dir).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && self.is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }
}

/// Group name for a loose file: the file name up to its first dot.
fn loose_file_group_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.split('.').next()?;
    if stem.is_empty() || stem == INDEX_STEM {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Sorted names of the immediate, non-hidden sub-directories of `root`.
pub fn list_subdirectories(root: &Path) -> DskitResult<Vec<String>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if !name.starts_with('.') {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}

fn list_files(root: &Path) -> DskitResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

/// Read a source file, attaching its path to any error.
pub fn read_source(path: &Path) -> DskitResult<String> {
    std::fs::read_to_string(path).map_err(|e| DskitError::read_source(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn locator() -> SourceLocator {
        SourceLocator::new(["tsx", "ts"]).with_ignore_patterns([".stories.", ".test."])
    }

    fn touch(dir: &Path, rel: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "export {}").unwrap();
    }

    #[test]
    fn test_flat_groups_require_entry_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Button/Button.tsx");
        touch(dir.path(), "Input/index.tsx");
        touch(dir.path(), "Card/styles.css");
        fs::create_dir(dir.path().join("Empty")).unwrap();

        let found = locator().flat_groups(dir.path()).unwrap();

        let names: Vec<_> = found.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Button", "Input"]);
        assert_eq!(found.skipped, vec!["Card", "Empty"]);
        assert!(found.groups[1].source_files[0].ends_with("Input/index.tsx"));
    }

    #[test]
    fn test_component_named_file_wins_over_index() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Badge/index.tsx");
        touch(dir.path(), "Badge/Badge.tsx");

        let entry = locator().locate_entry_file(&dir.path().join("Badge"), "Badge").unwrap();
        assert!(entry.ends_with("Badge/Badge.tsx"));
    }

    #[test]
    fn test_extension_priority_applies_within_a_stem() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Icon/Icon.ts");
        touch(dir.path(), "Icon/index.tsx");

        let entry = locator().locate_entry_file(&dir.path().join("Icon"), "Icon").unwrap();
        assert!(entry.ends_with("Icon/Icon.ts"));
    }

    #[test]
    fn test_recursive_groups_descend_and_sort() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Stack/Stack.tsx");
        touch(dir.path(), "Grid/parts/deep/GridItem.tsx");
        touch(dir.path(), "Grid/Grid.tsx");
        touch(dir.path(), "Grid/Grid.stories.tsx");
        touch(dir.path(), "Grid/grid.css");
        touch(dir.path(), "Spacer.tsx");
        fs::create_dir(dir.path().join("Placeholder")).unwrap();

        let found = locator().recursive_groups(dir.path()).unwrap();

        let names: Vec<_> = found.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Grid", "Spacer", "Stack"]);
        assert_eq!(found.skipped, vec!["Placeholder"]);

        let grid = &found.groups[0];
        assert_eq!(grid.source_files.len(), 2);
        assert!(grid.source_files[0].ends_with("Grid/Grid.tsx"));
        assert!(grid.source_files[1].ends_with("Grid/parts/deep/GridItem.tsx"));
    }

    #[test]
    fn test_is_source_file() {
        let l = locator();
        assert!(l.is_source_file(Path::new("a/Button.tsx")));
        assert!(l.is_source_file(Path::new("a/utils.ts")));
        assert!(!l.is_source_file(Path::new("a/Button.stories.tsx")));
        assert!(!l.is_source_file(Path::new("a/Button.css")));
        assert!(!l.is_source_file(Path::new("a/README")));
    }

    #[test]
    fn test_missing_root_is_error() {
        let result = locator().flat_groups(Path::new("/nonexistent/components/primitives"));
        assert!(matches!(result, Err(DskitError::Io(_))));
    }
}
