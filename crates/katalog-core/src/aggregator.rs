//! Per-run dependency aggregation.
//!
//! The aggregator is constructed once per run and fed by the host build
//! system while it walks the module graph; `finalize` then performs the
//! filter / dedup / precedence steps and yields the sets the catalog is
//! generated from. There is no ambient global state.

use std::collections::HashSet;

use crate::alias::shared_group_alias;
use crate::coordinate::Coordinate;

/// Configuration-name prefixes that route a dependency to the test set.
const TEST_CONFIGURATION_PREFIXES: [&str; 2] = ["test", "androidTest"];

/// Collects declared dependencies across a module graph, partitioned
/// into main and test sets by configuration name.
#[derive(Debug, Default)]
pub struct DependencyAggregator {
    main: Vec<Coordinate>,
    test: Vec<Coordinate>,
}

impl DependencyAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one declared dependency. `configuration` is the name of
    /// the configuration/scope it was declared under; `test*` and
    /// `androidTest*` configurations route to the test set, everything
    /// else to main. Insertion order is preserved; exact duplicates
    /// (full triple) are not re-inserted.
    pub fn add(&mut self, coordinate: Coordinate, configuration: &str) {
        let set = if TEST_CONFIGURATION_PREFIXES
            .iter()
            .any(|prefix| configuration.starts_with(prefix))
        {
            &mut self.test
        } else {
            &mut self.main
        };
        if !set.contains(&coordinate) {
            set.push(coordinate);
        }
    }

    /// Filter, deduplicate, and apply main-over-test precedence.
    ///
    /// `build_files_text` is the concatenated text of every discovered
    /// build-declaration file; dependencies with no textual counterpart
    /// there (injected programmatically or transitively) are dropped,
    /// since there is nothing on disk to rewrite for them.
    pub fn finalize(self, build_files_text: &str) -> AggregatedDependencies {
        let main = filter(self.main, build_files_text);
        let test = filter(self.test, build_files_text)
            .into_iter()
            .filter(|d| !main.contains(d))
            .collect();
        AggregatedDependencies { main, test }
    }
}

/// Sort descending by `group + name + version`, keep the first entry
/// per `(group, name)`, drop entries absent from the build-file text,
/// then restore ascending order.
///
/// Versions are compared as plain strings, not parsed: "10.0.0" sorts
/// below "9.0.0", so a lexicographically-smaller newer version can
/// lose. Known limitation, kept for output compatibility.
fn filter(mut input: Vec<Coordinate>, build_files_text: &str) -> Vec<Coordinate> {
    input.sort_by(|a, b| sort_key(b).cmp(&sort_key(a)));

    let mut seen = HashSet::new();
    input.retain(|d| seen.insert((d.group.clone(), d.name.clone())));
    input.retain(|d| build_files_text.contains(&d.module()));
    input.reverse();
    input
}

fn sort_key(d: &Coordinate) -> String {
    format!("{}{}{}", d.group, d.name, d.version.as_deref().unwrap_or_default())
}

/// The finalized main and test dependency sets.
#[derive(Debug)]
pub struct AggregatedDependencies {
    pub main: Vec<Coordinate>,
    pub test: Vec<Coordinate>,
}

/// Coordinates sharing one `(group, version)` pair, collapsed to a
/// shared version alias.
#[derive(Debug, Clone)]
pub struct VersionGroup {
    pub alias: String,
    pub version: String,
    pub members: Vec<Coordinate>,
}

impl AggregatedDependencies {
    /// Main dependencies followed by test dependencies.
    pub fn iter_all(&self) -> impl Iterator<Item = &Coordinate> {
        self.main.iter().chain(self.test.iter())
    }

    /// Group coordinates by `(group, version)`, in encounter order, and
    /// retain only groups with two or more members. Singleton groups
    /// keep inline versions; coordinates without a version never join a
    /// group (a group is defined by an actual version pair).
    pub fn version_groups(&self) -> Vec<VersionGroup> {
        let mut groups: Vec<((String, String), Vec<Coordinate>)> = Vec::new();
        for d in self.iter_all() {
            let Some(version) = &d.version else { continue };
            let key = (d.group.clone(), version.clone());
            match groups.iter_mut().find(|(k, _)| *k == key) {
                Some((_, members)) => members.push(d.clone()),
                None => groups.push((key, vec![d.clone()])),
            }
        }

        groups
            .into_iter()
            .filter(|(_, members)| members.len() >= 2)
            .map(|((_, version), members)| VersionGroup {
                alias: shared_group_alias(&members[0], &members[1]),
                version,
                members,
            })
            .collect()
    }
}
