//! Run configuration loaded from `katalog.toml` in the project root.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use katalog_util::errors::KatalogError;

/// Which operation a run performs. `Nothing` keeps the tool inert so it
/// can stay wired into a build without touching anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    #[default]
    Nothing,
    GenerateCatalog,
    ReplaceFromCatalog,
}

/// Settings for one run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    pub operation: Operation,

    /// File name of the build-declaration files to scan for.
    pub input_file_name: String,

    /// Catalog location, relative to the project root.
    pub catalog_path: PathBuf,

    /// Pin collected versions back into the scanned build files during
    /// generation.
    pub replace_versions_inline: bool,

    /// Run the Groovy-to-Kotlin rewrite on every written build file.
    pub kotlin_conversion: bool,

    /// Write rewritten files in place instead of as `.converted`
    /// siblings.
    pub overwrite_originals: bool,

    /// Name of the catalog table library entries are read from. Older
    /// catalogs used `dependencies` instead of `libraries`.
    pub catalog_table: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            operation: Operation::default(),
            input_file_name: "build.gradle".to_string(),
            catalog_path: PathBuf::from("gradle/libs.versions.toml"),
            replace_versions_inline: false,
            kotlin_conversion: false,
            overwrite_originals: false,
            catalog_table: katalog_core::catalog::DEFAULT_LIBRARY_TABLE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`. A missing file is not an error;
    /// it yields the defaults (and therefore the `Nothing` operation).
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(KatalogError::Io)?;
        let config: Config = toml::from_str(&content).map_err(|e| KatalogError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        Ok(config)
    }
}
