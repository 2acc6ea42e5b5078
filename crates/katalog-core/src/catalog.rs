//! The version catalog document: render and parse.
//!
//! The rendered document has two ordered sections: a `[versions]` table
//! (shared version aliases) and a library table (`alias = { module =
//! "g:n", version(.ref)="v" }` lines, main block then test block). The
//! document is fully regenerated on every run, never merged with prior
//! content.

use std::collections::{BTreeMap, HashMap};

use katalog_util::errors::KatalogError;

use crate::aggregator::AggregatedDependencies;
use crate::alias::generate_alias;
use crate::coordinate::Coordinate;

/// Name of the library table both script generations write.
pub const DEFAULT_LIBRARY_TABLE: &str = "libraries";

/// Render the catalog document for the finalized dependency sets.
///
/// Fails if two different modules derive the same library alias, or two
/// version groups derive the same version alias; silently overwriting
/// a table entry would corrupt the catalog.
pub fn render(deps: &AggregatedDependencies) -> miette::Result<String> {
    let groups = deps.version_groups();

    let mut out = String::from("[versions]\n");
    let mut version_aliases: HashMap<Coordinate, String> = HashMap::new();
    let mut seen_versions: HashMap<String, String> = HashMap::new();
    for group in &groups {
        if let Some(previous) = seen_versions.insert(group.alias.clone(), group.version.clone()) {
            return Err(KatalogError::Catalog {
                message: format!(
                    "version alias collision: '{}' derived for both version {} and version {}",
                    group.alias, previous, group.version
                ),
            }
            .into());
        }
        out.push_str(&format!("{} = \"{}\"\n", group.alias, group.version));
        for member in &group.members {
            version_aliases.insert(member.clone(), group.alias.clone());
        }
    }

    out.push('\n');
    out.push_str(&format!("[{DEFAULT_LIBRARY_TABLE}]\n"));

    let mut seen_libraries: HashMap<String, String> = HashMap::new();
    for d in &deps.main {
        write_library(&mut out, d, &version_aliases, &mut seen_libraries)?;
    }
    out.push('\n');
    for d in &deps.test {
        write_library(&mut out, d, &version_aliases, &mut seen_libraries)?;
    }

    Ok(out)
}

fn write_library(
    out: &mut String,
    d: &Coordinate,
    version_aliases: &HashMap<Coordinate, String>,
    seen_libraries: &mut HashMap<String, String>,
) -> miette::Result<()> {
    let alias = generate_alias(d);
    let module = d.module();
    if let Some(existing) = seen_libraries.insert(alias.clone(), module.clone()) {
        if existing != module {
            return Err(KatalogError::Catalog {
                message: format!(
                    "library alias collision: '{alias}' derived for both {existing} and {module}"
                ),
            }
            .into());
        }
    }

    match (version_aliases.get(d), &d.version) {
        (Some(vref), _) => {
            out.push_str(&format!(
                "{alias} = {{ module = \"{module}\", version.ref=\"{vref}\" }}\n"
            ));
        }
        (None, Some(version)) => {
            out.push_str(&format!(
                "{alias} = {{ module = \"{module}\", version=\"{version}\" }}\n"
            ));
        }
        // No version known: legal, serialized without a version key.
        (None, None) => {
            out.push_str(&format!("{alias} = {{ module = \"{module}\"}}\n"));
        }
    }
    Ok(())
}

/// A library entry parsed from a catalog document.
#[derive(Debug, Clone)]
pub struct CatalogLibrary {
    pub module: String,
    pub version: Option<String>,
    pub version_ref: Option<String>,
}

/// A parsed catalog document.
///
/// Library entries keep document order so that downstream replacement
/// passes are deterministic.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub versions: BTreeMap<String, String>,
    pub libraries: Vec<(String, CatalogLibrary)>,
}

impl Catalog {
    /// Parse a catalog document, reading library entries from the table
    /// named `library_table` (the table name differed between tool
    /// generations, so it is configurable rather than guessed).
    pub fn parse(content: &str, library_table: &str) -> miette::Result<Self> {
        let doc: toml_edit::DocumentMut = content.parse().map_err(|e: toml_edit::TomlError| {
            KatalogError::Catalog {
                message: format!("Failed to parse catalog: {e}"),
            }
        })?;

        let mut versions = BTreeMap::new();
        if let Some(table) = doc.get("versions").and_then(|item| item.as_table_like()) {
            for (key, value) in table.iter() {
                if let Some(s) = value.as_str() {
                    versions.insert(key.to_string(), s.to_string());
                }
            }
        }

        let mut libraries = Vec::new();
        if let Some(table) = doc.get(library_table).and_then(|item| item.as_table_like()) {
            for (alias, item) in table.iter() {
                let Some(entry) = item.as_table_like() else {
                    continue;
                };
                let Some(module) = entry.get("module").and_then(|i| i.as_str()) else {
                    continue;
                };
                // `version` is either a plain string or a dotted
                // `version.ref` key, which parses as a nested table.
                let (version, version_ref) = match entry.get("version") {
                    Some(v) if v.as_str().is_some() => {
                        (v.as_str().map(String::from), None)
                    }
                    Some(v) => (
                        None,
                        v.as_table_like()
                            .and_then(|t| t.get("ref"))
                            .and_then(|r| r.as_str())
                            .map(String::from),
                    ),
                    None => (None, None),
                };
                libraries.push((
                    alias.to_string(),
                    CatalogLibrary {
                        module: module.to_string(),
                        version,
                        version_ref,
                    },
                ));
            }
        }

        Ok(Self { versions, libraries })
    }

    /// `(module, alias)` pairs in document order, for reverse-replacing
    /// coordinate literals with `libs.<alias>` references.
    pub fn module_aliases(&self) -> Vec<(String, String)> {
        self.libraries
            .iter()
            .map(|(alias, lib)| (lib.module.clone(), alias.clone()))
            .collect()
    }

    /// Resolve a library's version, following a `version.ref` into the
    /// `[versions]` table when present.
    pub fn resolve_version(&self, library: &CatalogLibrary) -> Option<String> {
        if let Some(ref vref) = library.version_ref {
            return self.versions.get(vref).cloned();
        }
        library.version.clone()
    }
}
