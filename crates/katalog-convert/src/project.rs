//! Project-level rewrites: repositories, includes, clean task and
//! extra properties.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static MAVEN_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"maven\s*\{\s*url\s*(.*?)\s*?\}").expect("hardcoded regex must compile")
});

static MAVEN_NOISE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(= *uri *\()|\)|(url)|( )").expect("hardcoded regex must compile")
});

/// `maven { url "https://jitpack.io" }` becomes
/// `maven("https://jitpack.io")`. Handles the `url = uri(...)` spelling
/// too by stripping the wrapper before rebuilding the call.
pub fn convert_maven_url(text: &str) -> String {
    MAVEN_BLOCK
        .replace_all(text, |caps: &Captures<'_>| {
            MAVEN_NOISE
                .replace_all(&caps[0], "")
                .replace('{', "(")
                .replace('}', ")")
        })
        .into_owned()
}

static INCLUDE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"include\s*((".*"\s*,)\s*)*(".*")"#).expect("hardcoded regex must compile")
});

/// `include ":app", ":lib"` becomes `include(":app", ":lib")`. A call
/// whose arguments span several lines keeps the line breaks inside the
/// parentheses.
pub fn convert_include(text: &str) -> String {
    INCLUDE_CALL
        .replace_all(text, |caps: &Captures<'_>| {
            let args = caps[0].trim_start_matches("include").trim();
            let multi_line = caps[0].lines().filter(|l| !l.trim().is_empty()).count() > 1;
            if multi_line {
                format!("include(\n{args}\n)")
            } else {
                format!("include({args})")
            }
        })
        .into_owned()
}

static CLEAN_TASK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)task clean\(type: Delete\)\s*\{.*\}").expect("hardcoded regex must compile")
});

const CLEAN_TASK_KOTLIN: &str =
    "tasks.register<Delete>(\"clean\").configure {\n    delete(rootProject.buildDir)\n }";

/// The conventional Groovy clean task becomes the typed `register` form.
pub fn convert_clean_task(text: &str) -> String {
    CLEAN_TASK.replace_all(text, CLEAN_TASK_KOTLIN).into_owned()
}

static EXT_PROPERTY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ext\.(\w+)\s*=\s*(.*)").expect("hardcoded regex must compile"));

/// `ext.kotlin_version = "1.3.50"` becomes
/// `extra["kotlin_version"] = "1.3.50"`.
pub fn convert_ext_properties(text: &str) -> String {
    EXT_PROPERTY
        .replace_all(text, "extra[\"${1}\"] = ${2}")
        .into_owned()
}
