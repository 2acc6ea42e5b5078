//! Operation: rewrite coordinate literals to catalog references.

use std::path::Path;

use regex::Regex;

use katalog_convert::convert_to_kotlin;
use katalog_core::catalog::Catalog;
use katalog_util::errors::KatalogError;
use katalog_util::fs::collect_build_files;

use crate::config::Config;

/// Replace every quoted `group:name[:version]` literal that has a
/// catalog entry with the corresponding `libs.<alias>` reference, in
/// every build file under `root`.
///
/// A catalog that fails to parse is not fatal: the build files are left
/// untouched and the run succeeds, so a stale hand-edited catalog never
/// corrupts sources. A missing or unreadable catalog file is an error
/// like any other filesystem failure.
pub fn replace_from_catalog(root: &Path, config: &Config) -> miette::Result<()> {
    let catalog_path = root.join(&config.catalog_path);
    let content = std::fs::read_to_string(&catalog_path).map_err(KatalogError::Io)?;
    let catalog = match Catalog::parse(&content, &config.catalog_table) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::warn!("Skipping catalog replacement: {err}");
            return Ok(());
        }
    };

    let aliases = catalog.module_aliases();
    for (module, alias) in &aliases {
        println!("{module} -> libs.{alias}");
    }

    let build_files =
        collect_build_files(root, &config.input_file_name).map_err(KatalogError::Io)?;
    for file in &build_files {
        rewrite_build_file(file, &aliases, config)?;
    }
    Ok(())
}

fn rewrite_build_file(
    file: &Path,
    aliases: &[(String, String)],
    config: &Config,
) -> miette::Result<()> {
    let content = std::fs::read_to_string(file).map_err(KatalogError::Io)?;
    let mut updated = replace_coordinates(&content, aliases);

    let mut suffix = String::new();
    if !config.overwrite_originals {
        suffix.push_str(".converted");
    }
    let already_kotlin = file.extension().is_some_and(|ext| ext == "kts");
    if config.kotlin_conversion && !already_kotlin {
        updated = convert_to_kotlin(&updated);
        suffix.push_str(".kts");
    }

    let target = if suffix.is_empty() {
        file.to_path_buf()
    } else {
        let mut name = file.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(&suffix);
        file.with_file_name(name)
    };
    std::fs::write(target, updated).map_err(KatalogError::Io)?;
    Ok(())
}

/// The quoted literal is replaced whole, quotes included: the catalog
/// accessor is an expression, not a string.
///
/// The module must be followed by `:` or the closing quote, so an entry
/// for `g:name` never captures a sibling artifact like `g:name-ktx`.
fn replace_coordinates(content: &str, aliases: &[(String, String)]) -> String {
    let mut result = content.to_string();
    for (module, alias) in aliases {
        let pattern = Regex::new(&format!("[\"']{}(:[^\"']*)?[\"']", regex::escape(module)))
            .expect("escaped coordinate pattern must compile");
        result = pattern.replace_all(&result, format!("libs.{alias}")).into_owned();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Operation;

    const CATALOG: &str = r#"[versions]
okhttp = "4.9.0"

[libraries]
okhttp = { module = "com.squareup.okhttp3:okhttp", version.ref="okhttp" }
junit = { module = "junit:junit", version="4.12" }
"#;

    fn config() -> Config {
        Config {
            operation: Operation::ReplaceFromCatalog,
            ..Config::default()
        }
    }

    #[test]
    fn coordinate_literals_become_catalog_references() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("gradle")).unwrap();
        std::fs::write(dir.path().join("gradle/libs.versions.toml"), CATALOG).unwrap();
        std::fs::write(
            dir.path().join("build.gradle"),
            "implementation \"com.squareup.okhttp3:okhttp:4.9.0\"\ntestImplementation 'junit:junit:4.12'\n",
        )
        .unwrap();

        replace_from_catalog(dir.path(), &config()).unwrap();

        let rewritten =
            std::fs::read_to_string(dir.path().join("build.gradle.converted")).unwrap();
        assert!(rewritten.contains("implementation libs.okhttp"));
        assert!(rewritten.contains("testImplementation libs.junit"));
        assert!(!rewritten.contains("com.squareup.okhttp3"));
    }

    #[test]
    fn versionless_literal_is_also_replaced() {
        let replaced = replace_coordinates(
            "implementation \"junit:junit\"\n",
            &[("junit:junit".to_string(), "junit".to_string())],
        );
        assert_eq!(replaced, "implementation libs.junit\n");
    }

    #[test]
    fn unrelated_coordinates_are_untouched() {
        let replaced = replace_coordinates(
            "implementation \"com.google.guava:guava:28.0\"\n",
            &[("junit:junit".to_string(), "junit".to_string())],
        );
        assert!(replaced.contains("com.google.guava:guava:28.0"));
    }

    #[test]
    fn sibling_artifact_sharing_a_module_prefix_is_untouched() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("gradle")).unwrap();
        std::fs::write(dir.path().join("gradle/libs.versions.toml"), CATALOG).unwrap();
        std::fs::write(
            dir.path().join("build.gradle"),
            "implementation \"com.squareup.okhttp3:okhttp:4.9.0\"\n\
             implementation \"com.squareup.okhttp3:okhttp-tls:4.9.0\"\n",
        )
        .unwrap();

        replace_from_catalog(dir.path(), &config()).unwrap();

        let rewritten =
            std::fs::read_to_string(dir.path().join("build.gradle.converted")).unwrap();
        assert!(rewritten.contains("implementation libs.okhttp\n"));
        // the catalog has no entry for okhttp-tls, so it must survive
        assert!(rewritten.contains("implementation \"com.squareup.okhttp3:okhttp-tls:4.9.0\""));
    }

    #[test]
    fn missing_catalog_aborts_the_run() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("build.gradle"),
            "implementation \"junit:junit:4.12\"\n",
        )
        .unwrap();

        assert!(replace_from_catalog(dir.path(), &config()).is_err());
        assert!(!dir.path().join("build.gradle.converted").exists());
    }

    #[test]
    fn malformed_catalog_is_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("gradle")).unwrap();
        std::fs::write(dir.path().join("gradle/libs.versions.toml"), "not [ valid").unwrap();
        std::fs::write(
            dir.path().join("build.gradle"),
            "implementation \"junit:junit:4.12\"\n",
        )
        .unwrap();

        replace_from_catalog(dir.path(), &config()).unwrap();

        assert!(!dir.path().join("build.gradle.converted").exists());
    }
}
