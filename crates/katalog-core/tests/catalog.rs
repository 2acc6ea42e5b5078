use katalog_core::aggregator::{AggregatedDependencies, DependencyAggregator};
use katalog_core::catalog::{self, Catalog, DEFAULT_LIBRARY_TABLE};
use katalog_core::coordinate::Coordinate;

fn coord(group: &str, name: &str, version: &str) -> Coordinate {
    Coordinate::new(group, name, Some(version))
}

fn sample_deps() -> AggregatedDependencies {
    let mut agg = DependencyAggregator::new();
    agg.add(coord("com.google.firebase", "firebase-config", "19.0.0"), "implementation");
    agg.add(coord("com.google.firebase", "firebase-core", "19.0.0"), "implementation");
    agg.add(coord("com.squareup.okhttp3", "okhttp", "4.9.0"), "implementation");
    agg.add(coord("junit", "junit", "4.13.2"), "testImplementation");
    agg.finalize(
        "com.google.firebase:firebase-config com.google.firebase:firebase-core \
         com.squareup.okhttp3:okhttp junit:junit",
    )
}

#[test]
fn renders_versions_then_libraries() {
    let rendered = catalog::render(&sample_deps()).unwrap();

    assert!(rendered.starts_with("[versions]\n"));
    assert!(rendered.contains("firebase = \"19.0.0\"\n"));
    assert!(rendered.contains("\n[libraries]\n"));
    assert!(rendered.contains(
        "firebaseConfig = { module = \"com.google.firebase:firebase-config\", version.ref=\"firebase\" }"
    ));
    assert!(rendered.contains(
        "firebaseCore = { module = \"com.google.firebase:firebase-core\", version.ref=\"firebase\" }"
    ));
    assert!(rendered
        .contains("okhttp = { module = \"com.squareup.okhttp3:okhttp\", version=\"4.9.0\" }"));
    assert!(rendered.contains("junit = { module = \"junit:junit\", version=\"4.13.2\" }"));

    // main block and test block are separated by a blank line
    let okhttp_pos = rendered.find("okhttp = {").unwrap();
    let junit_pos = rendered.find("junit = {").unwrap();
    assert!(okhttp_pos < junit_pos);
    assert!(rendered[okhttp_pos..junit_pos].contains("\n\n"));
}

#[test]
fn every_version_alias_has_two_or_more_references() {
    let rendered = catalog::render(&sample_deps()).unwrap();
    let parsed = Catalog::parse(&rendered, DEFAULT_LIBRARY_TABLE).unwrap();

    for alias in parsed.versions.keys() {
        let referencing = parsed
            .libraries
            .iter()
            .filter(|(_, lib)| lib.version_ref.as_deref() == Some(alias))
            .count();
        assert!(referencing >= 2, "version alias '{alias}' referenced {referencing} times");
    }
}

#[test]
fn versionless_entry_omits_version_key() {
    let deps = AggregatedDependencies {
        main: vec![Coordinate::new("com.example", "mystery", None)],
        test: vec![],
    };
    let rendered = catalog::render(&deps).unwrap();
    assert!(rendered.contains("mystery = { module = \"com.example:mystery\"}"));
    assert!(!rendered.contains("version="));
    assert!(!rendered.contains("version.ref"));

    let parsed = Catalog::parse(&rendered, DEFAULT_LIBRARY_TABLE).unwrap();
    let (_, lib) = &parsed.libraries[0];
    assert!(lib.version.is_none());
    assert!(lib.version_ref.is_none());
}

#[test]
fn library_alias_collision_fails_loudly() {
    let deps = AggregatedDependencies {
        main: vec![
            coord("com.first", "widget-android", "1.0"),
            coord("com.second", "widget", "2.0"),
        ],
        test: vec![],
    };
    let err = catalog::render(&deps).unwrap_err();
    assert!(err.to_string().contains("collision"));
}

#[test]
fn parse_resolves_version_refs() {
    let rendered = catalog::render(&sample_deps()).unwrap();
    let parsed = Catalog::parse(&rendered, DEFAULT_LIBRARY_TABLE).unwrap();

    let (_, config) = parsed
        .libraries
        .iter()
        .find(|(alias, _)| alias == "firebaseConfig")
        .unwrap();
    assert_eq!(parsed.resolve_version(config).as_deref(), Some("19.0.0"));

    let (_, okhttp) = parsed.libraries.iter().find(|(alias, _)| alias == "okhttp").unwrap();
    assert_eq!(parsed.resolve_version(okhttp).as_deref(), Some("4.9.0"));
}

#[test]
fn round_trip_preserves_module_set() {
    let deps = sample_deps();
    let modules: Vec<String> = deps.iter_all().map(|d| d.module()).collect();

    let rendered = catalog::render(&deps).unwrap();
    let parsed = Catalog::parse(&rendered, DEFAULT_LIBRARY_TABLE).unwrap();
    let parsed_modules: Vec<String> =
        parsed.libraries.iter().map(|(_, lib)| lib.module.clone()).collect();

    assert_eq!(modules, parsed_modules);
}

#[test]
fn parse_reads_configurable_table_name() {
    let content = r#"
[dependencies]
okhttp = { module = "com.squareup.okhttp3:okhttp", version="4.9.0" }
"#;
    let parsed = Catalog::parse(content, "dependencies").unwrap();
    assert_eq!(parsed.libraries.len(), 1);
    assert_eq!(parsed.module_aliases()[0].0, "com.squareup.okhttp3:okhttp");

    // and the default table name finds nothing in this document
    let parsed = Catalog::parse(content, DEFAULT_LIBRARY_TABLE).unwrap();
    assert!(parsed.libraries.is_empty());
}

#[test]
fn parse_rejects_malformed_documents() {
    assert!(Catalog::parse("[versions\nbroken", DEFAULT_LIBRARY_TABLE).is_err());
}

#[test]
fn module_aliases_keep_document_order() {
    let content = r#"
[libraries]
zebra = { module = "org.zoo:zebra", version="1.0" }
alpha = { module = "org.zoo:alpha", version="1.0" }
"#;
    let parsed = Catalog::parse(content, DEFAULT_LIBRARY_TABLE).unwrap();
    let aliases = parsed.module_aliases();
    assert_eq!(aliases[0].1, "zebra");
    assert_eq!(aliases[1].1, "alpha");
}
