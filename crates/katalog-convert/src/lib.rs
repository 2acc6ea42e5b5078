//! Groovy-to-Kotlin build-script conversion.
//!
//! The pipeline is a fixed, ordered chain of independent text rewrites.
//! Each rule is a pure `&str -> String` function matching one legacy
//! construct; each stage receives the complete output of the previous
//! one. Ordering matters: later rules assume syntax already normalized
//! by earlier ones (quote style above all), so the chain in
//! [`convert_to_kotlin`] must not be rearranged.
//!
//! All rules are line/regex-oriented, not AST-based. Re-running the
//! pipeline on already-converted text is unverified and may
//! double-transform; idempotence is a non-goal.

pub mod android;
pub mod block;
pub mod declarations;
pub mod dependencies;
pub mod plugins;
pub mod project;
pub mod strings;

/// Apply the full rewrite chain to one file's text.
pub fn convert_to_kotlin(text: &str) -> String {
    let text = strings::replace_apostrophes(text);
    let text = declarations::modernize_def(&text);
    let text = declarations::convert_array_expression(&text);
    let text = declarations::convert_variable_declaration(&text);
    let text = plugins::convert_plugin_application(&text);
    let text = plugins::merge_plugin_block(&text);
    let text = dependencies::rename_legacy_scopes(&text);
    let text = dependencies::parenthesize_dependencies(&text);
    let text = project::convert_maven_url(&text);
    let text = android::parenthesize_sdk_settings(&text);
    let text = android::insert_assignment_equals(&text);
    let text = android::normalize_java_compatibility(&text);
    let text = project::convert_clean_task(&text);
    let text = android::convert_proguard_files(&text);
    let text = android::prefix_boolean_flags(&text);
    let text = project::convert_include(&text);
    let text = android::convert_build_types(&text);
    let text = android::convert_source_sets(&text);
    let text = android::convert_signing_configs(&text);
    let text = dependencies::expand_classpath_exclude(&text);
    let text = plugins::convert_kotlin_shorthand(&text);
    let text = android::convert_signing_assignment(&text);
    let text = project::convert_ext_properties(&text);
    let text = plugins::parenthesize_plugin_ids(&text);
    strings::replace_colons_with_equals(&text)
}
