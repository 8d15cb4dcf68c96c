//! Project configuration.
//!
//! Loaded from an optional `dskit.toml` at the project root. Every field has a
//! default, so a project that follows the usual layout needs no file at all.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{DskitError, DskitResult};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "dskit.toml";

/// Placeholder replaced by the package name in import paths and aliases.
pub const PACKAGE_PLACEHOLDER: &str = "{package}";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DskitConfig {
    pub package: PackageConfig,
    pub rules: RulesConfig,
    pub styles: StylesConfig,
    /// Usage example per component group, keyed by group name.
    pub examples: BTreeMap<String, String>,
}

/// Published package identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageConfig {
    /// Package name used as the import path prefix.
    pub name: String,
}

/// Rule-document generator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Output path, relative to the project root.
    pub output: PathBuf,
    /// Document title. Defaults to `<package> Component Rules`.
    pub title: Option<String>,
    /// Directory holding one sub-directory per module.
    pub components_root: PathBuf,
    /// Suffix identifying props declarations (`ButtonProps`).
    pub props_suffix: String,
    /// Source file extensions, in lookup priority order.
    pub source_extensions: Vec<String>,
    /// Substrings that exclude a file from recursive collection.
    pub ignore_patterns: Vec<String>,
    /// Keep a variant only when its field belongs to the same schema.
    pub filter_variants: bool,
    /// Override for the built-in usage rules block.
    pub usage_rules: Option<String>,
    /// Override for the built-in general rules footer.
    pub general_rules: Option<String>,
    pub aliases: Vec<ImportAlias>,
    pub modules: Vec<ModuleConfig>,
}

/// One row of the import alias reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportAlias {
    pub alias: String,
    pub description: String,
}

/// A scanned module (primitives, layout, compositions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Directory under the components root. Defaults to `name`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    /// Collect every source file below each group instead of one entry file.
    #[serde(default)]
    pub recursive: bool,
    /// A missing root aborts the run instead of being skipped.
    #[serde(default)]
    pub required: bool,
    /// Import path for the module's groups. Defaults to `{package}/<name>`.
    #[serde(default)]
    pub import_path: Option<String>,
}

/// Stylesheet aggregator settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StylesConfig {
    /// Directory holding the foundational stylesheets.
    pub source_dir: PathBuf,
    /// Foundational stylesheets in load order. Missing files are skipped.
    pub foundation: Vec<String>,
    /// Bundled component stylesheet, read and then overwritten.
    pub bundle: PathBuf,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            name: "@acme/ui".to_string(),
        }
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("AI_RULES.md"),
            title: None,
            components_root: PathBuf::from("src/components"),
            props_suffix: "Props".to_string(),
            source_extensions: vec!["tsx".to_string(), "ts".to_string()],
            ignore_patterns: vec![
                ".stories.".to_string(),
                ".test.".to_string(),
                ".spec.".to_string(),
                ".d.ts".to_string(),
            ],
            filter_variants: true,
            usage_rules: None,
            general_rules: None,
            aliases: default_aliases(),
            modules: default_modules(),
        }
    }
}

impl Default for StylesConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src/styles"),
            foundation: ["reset.css", "theme.css", "index.css", "icons.css", "responsive.css"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            bundle: PathBuf::from("dist/styles.css"),
        }
    }
}

fn default_aliases() -> Vec<ImportAlias> {
    [
        ("{package}/styles.css", "Combined stylesheet, import once at the application root"),
        ("{package}/icons", "Icon components"),
        ("{package}/hooks", "Shared React hooks"),
        ("{package}/tokens", "Design tokens as TypeScript constants"),
    ]
    .iter()
    .map(|(alias, description)| ImportAlias {
        alias: alias.to_string(),
        description: description.to_string(),
    })
    .collect()
}

fn default_modules() -> Vec<ModuleConfig> {
    vec![
        ModuleConfig::new("primitives", false, true),
        ModuleConfig::new("layout", true, false),
        ModuleConfig::new("compositions", true, false),
    ]
}

impl ModuleConfig {
    pub fn new(name: impl Into<String>, recursive: bool, required: bool) -> Self {
        Self {
            name: name.into(),
            title: None,
            dir: None,
            recursive,
            required,
            import_path: None,
        }
    }

    /// Section title, defaulting to the capitalised module name.
    pub fn title(&self) -> String {
        if let Some(ref title) = self.title {
            return title.clone();
        }
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Directory relative to the components root.
    pub fn dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from(&self.name))
    }

    /// Import path for this module with the package placeholder resolved.
    pub fn import_path(&self, package: &str) -> String {
        match self.import_path {
            Some(ref path) => path.replace(PACKAGE_PLACEHOLDER, package),
            None => format!("{}/{}", package, self.name),
        }
    }
}

impl DskitConfig {
    /// Load `dskit.toml` from the project directory, or defaults if absent.
    pub fn load(project_dir: &Path) -> DskitResult<Self> {
        let path = project_dir.join(CONFIG_FILENAME);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from an explicit file path.
    pub fn load_from(path: &Path) -> DskitResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| DskitError::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::parse(&content)
            .map_err(|e| DskitError::config(format!("{}: {}", path.display(), e)))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> DskitResult<Self> {
        toml::from_str(content).map_err(|e| DskitError::config(e.to_string()))
    }

    /// Document title with the package name filled in.
    pub fn title(&self) -> String {
        self.rules
            .title
            .clone()
            .unwrap_or_else(|| format!("{} Component Rules", self.package.name))
    }

    pub fn components_root(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.rules.components_root)
    }

    pub fn rules_output(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.rules.output)
    }

    pub fn styles_source_dir(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.styles.source_dir)
    }

    pub fn styles_bundle(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.styles.bundle)
    }

    /// Commented default configuration, written by `dskit init`.
    pub fn default_config_content() -> &'static str {
        include_str!("templates/dskit.toml")
    }
}
