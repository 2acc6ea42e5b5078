//! Operation: aggregate declared dependencies into a version catalog.

use std::path::{Path, PathBuf};

use regex::Regex;

use katalog_convert::convert_to_kotlin;
use katalog_core::aggregator::{AggregatedDependencies, DependencyAggregator};
use katalog_core::catalog;
use katalog_util::errors::KatalogError;
use katalog_util::fs::{collect_build_files, concat_files, ensure_dir};

use crate::config::Config;

/// Finalize the aggregated dependencies against the build files under
/// `root`, print both sets, render the catalog to the configured path,
/// and (optionally) rewrite the build files themselves.
pub fn generate_catalog(
    root: &Path,
    aggregator: DependencyAggregator,
    config: &Config,
) -> miette::Result<()> {
    let build_files =
        collect_build_files(root, &config.input_file_name).map_err(KatalogError::Io)?;
    let combined = concat_files(&build_files).map_err(KatalogError::Io)?;
    let deps = aggregator.finalize(&combined);

    println!("Dependencies");
    for dep in &deps.main {
        println!("{dep}");
    }
    println!();
    println!("Test Dependencies");
    for dep in &deps.test {
        println!("{dep}");
    }

    if config.replace_versions_inline || config.kotlin_conversion {
        for file in &build_files {
            rewrite_build_file(file, &deps, config)?;
        }
    }

    let catalog_path = root.join(&config.catalog_path);
    if let Some(parent) = catalog_path.parent() {
        ensure_dir(parent).map_err(KatalogError::Io)?;
    }
    let rendered = catalog::render(&deps)?;
    std::fs::write(&catalog_path, rendered).map_err(KatalogError::Io)?;
    Ok(())
}

fn rewrite_build_file(
    file: &Path,
    deps: &AggregatedDependencies,
    config: &Config,
) -> miette::Result<()> {
    let mut content = std::fs::read_to_string(file).map_err(KatalogError::Io)?;

    if config.replace_versions_inline {
        content = pin_versions(&content, deps);
    }

    let mut suffix = String::new();
    if !config.overwrite_originals {
        suffix.push_str(".converted");
    }
    let already_kotlin = file.extension().is_some_and(|ext| ext == "kts");
    if config.kotlin_conversion && !already_kotlin {
        content = convert_to_kotlin(&content);
        suffix.push_str(".kts");
    }

    std::fs::write(output_path(file, &suffix), content).map_err(KatalogError::Io)?;
    Ok(())
}

/// Rewrite every textual occurrence of a collected module's coordinate
/// to carry the version that survived deduplication, so all declaring
/// files agree with the catalog.
fn pin_versions(content: &str, deps: &AggregatedDependencies) -> String {
    let mut result = content.to_string();
    for dep in deps.iter_all() {
        if dep.version.is_none() {
            continue;
        }
        let prefix = format!("{}:{}:", dep.group, dep.name);
        let pattern = Regex::new(&format!("{}[^\"']+", regex::escape(&prefix)))
            .expect("escaped coordinate pattern must compile");
        result = pattern.replace_all(&result, dep.to_string()).into_owned();
    }
    result
}

fn output_path(file: &Path, suffix: &str) -> PathBuf {
    if suffix.is_empty() {
        return file.to_path_buf();
    }
    let mut name = file.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(suffix);
    file.with_file_name(name)
}
