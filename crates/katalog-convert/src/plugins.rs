//! Plugin application rewrites.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static APPLY_PLUGIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"apply plugin: (\S+)").expect("hardcoded regex must compile"));

/// `apply plugin: "kotlin-android"` becomes `apply(plugin = "kotlin-android")`.
pub fn convert_plugin_application(text: &str) -> String {
    APPLY_PLUGIN.replace_all(text, "apply(plugin = $1)").into_owned()
}

static PLUGIN_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(apply\(plugin\s*=\s*".*"\)[\s\S]){2,}"#).expect("hardcoded regex must compile")
});

static PLUGIN_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"("[^"]*")\)"#).expect("hardcoded regex must compile"));

/// Two or more consecutive `apply(plugin = "...")` lines become a
/// single `plugins { id(...) }` block.
///
/// Every line must start at column zero; indented applications break
/// the run detection and are left as individual calls.
pub fn merge_plugin_block(text: &str) -> String {
    PLUGIN_RUN
        .replace_all(text, |caps: &Captures<'_>| {
            let mut ids = String::new();
            for id in PLUGIN_ID.captures_iter(&caps[0]) {
                ids.push_str(&format!("    id({})\n", &id[1]));
            }
            format!("plugins {{\n{ids}}}\n")
        })
        .into_owned()
}

static ID_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"id\s*(".*?")"#).expect("hardcoded regex must compile"));

/// `id "io.gitlab.arturbosch.detekt" version "1.0.0.RC8"` becomes
/// `id("io.gitlab.arturbosch.detekt") version "1.0.0.RC8"`. Skips ids
/// that are already calls (`id("...")`).
pub fn parenthesize_plugin_ids(text: &str) -> String {
    ID_CALL.replace_all(text, "id($1)").into_owned()
}

static KOTLIN_COORDINATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""org\.jetbrains\.kotlin:kotlin-.*\)"#).expect("hardcoded regex must compile")
});

/// First-party Kotlin coordinates become the `kotlin(...)` helper call:
///
/// `classpath("org.jetbrains.kotlin:kotlin-gradle-plugin:$v")` becomes
/// `classpath(kotlin("gradle-plugin", version = "$v"))`, and the stdlib
/// artifact becomes `kotlin("stdlib", KotlinCompilerVersion.VERSION)`.
/// If the stdlib form was used anywhere, the required import line is
/// prepended to the whole file.
pub fn convert_kotlin_shorthand(text: &str) -> String {
    let mut needs_compiler_import = false;

    let converted = KOTLIN_COORDINATE
        .replace_all(text, |caps: &Captures<'_>| {
            let matched = &caps[0];
            // drop the trailing ')', re-emitted after the rewrite
            let inner = &matched[..matched.len() - 1];
            let rest = inner
                .split_once('-')
                .map(|(_, rest)| rest.replace('"', ""))
                .unwrap_or_default();
            let parts: Vec<&str> = rest.split(':').collect();

            let call = if rest.contains("stdlib") {
                needs_compiler_import = true;
                r#"kotlin("stdlib", KotlinCompilerVersion.VERSION)"#.to_string()
            } else if parts.len() == 2 {
                format!(r#"kotlin("{}", version = "{}")"#, parts[0], parts[1])
            } else {
                format!(r#"kotlin("{}")"#, parts[0])
            };
            format!("{call})")
        })
        .into_owned();

    if needs_compiler_import {
        format!("import org.jetbrains.kotlin.config.KotlinCompilerVersion\n\n{converted}")
    } else {
        converted
    }
}
