//! Dependency-declaration rewrites.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static LEGACY_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(compile|testCompile)(.*".*")"#).expect("hardcoded regex must compile"));

/// `compile "..."` becomes `implementation "..."`, `testCompile` becomes
/// `testImplementation`. Must run before [`parenthesize_dependencies`]
/// so the renamed scope is picked up by the call-form rewrite.
///
/// A keyword continuing with a capital letter (`compileOnly`,
/// `testCompileOnly`) is a different scope and is left alone.
pub fn rename_legacy_scopes(text: &str) -> String {
    LEGACY_SCOPE
        .replace_all(text, |caps: &Captures<'_>| {
            if caps[2].starts_with('O') {
                return caps[0].to_string();
            }
            if caps[0].contains("testCompile") {
                caps[0].replace("testCompile", "testImplementation")
            } else {
                caps[0].replace("compile", "implementation")
            }
        })
        .into_owned()
}

const SCOPE_KEYWORDS: &str = "testImplementation|androidTestImplementation|debugImplementation|\
compileOnly|testCompileOnly|runtimeOnly|developmentOnly|\
implementation|api|annotationProcessor|classpath|kapt|check";

static SCOPE_CALL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({SCOPE_KEYWORDS}).*")).expect("hardcoded regex must compile")
});

static SCOPE_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({SCOPE_KEYWORDS})")).expect("hardcoded regex must compile")
});

static TRAILING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*//.*").expect("hardcoded regex must compile"));

/// `implementation ":epoxy-annotations"` becomes
/// `implementation(":epoxy-annotations")`.
///
/// A keyword followed by a block (`kapt { ... }`), a member access
/// (`configurations.classpath.exclude`), or an already-closed call is
/// left alone, and an already-parenthesized argument is never wrapped
/// twice. A trailing `//` comment is detached before the rewrite and
/// reattached after it.
pub fn parenthesize_dependencies(text: &str) -> String {
    SCOPE_CALL
        .replace_all(text, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let after = whole[caps[1].len()..].trim_start();
            if after.starts_with('{') || after.starts_with("\")") || after.starts_with('.') {
                return whole.to_string();
            }

            let comment = TRAILING_COMMENT
                .find(whole)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let processed = if comment.is_empty() {
                whole.to_string()
            } else {
                whole.replace(&comment, "")
            };

            let keyword = SCOPE_KEYWORD
                .find(&processed)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let isolated = SCOPE_KEYWORD.replace(&processed, "").trim().to_string();

            if !isolated.is_empty() && !(isolated.starts_with('(') && isolated.ends_with(')')) {
                format!("{keyword}({isolated}){comment}")
            } else {
                format!("{keyword}{isolated}{comment}")
            }
        })
        .into_owned()
}

static EXCLUDE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r".*configurations\.classpath\.exclude.*group:.*").expect("hardcoded regex must compile")
});

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"".*""#).expect("hardcoded regex must compile"));

/// The single-line `configurations.classpath.exclude group: "..."`
/// becomes the explicit nested block form.
pub fn expand_classpath_exclude(text: &str) -> String {
    EXCLUDE_LINE
        .replace_all(text, |caps: &Captures<'_>| {
            let group = QUOTED.find(&caps[0]).map(|m| m.as_str()).unwrap_or("");
            format!("configurations.classpath {{\n    exclude(group = {group})\n}}")
        })
        .into_owned()
}
