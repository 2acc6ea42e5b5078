//! Android-block rewrites: SDK settings, defaultConfig/signing
//! assignments, build types and friends.

use regex::{Captures, Regex};
use std::sync::LazyLock;

use crate::block::rewrite_blocks;

static SDK_SETTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(compileSdkVersion|minSdkVersion|targetSdkVersion)\s*\d*")
        .expect("hardcoded regex must compile")
});

/// `compileSdkVersion 28` becomes `compileSdkVersion(28)`. No-op when
/// no numeric literal follows the keyword.
pub fn parenthesize_sdk_settings(text: &str) -> String {
    SDK_SETTING
        .replace_all(text, |caps: &Captures<'_>| {
            let parts: Vec<&str> = caps[0].split(' ').collect();
            if parts.iter().any(|p| p.parse::<i64>().is_ok()) {
                format!("{}({})", parts[0], parts.last().copied().unwrap_or(""))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

static KEY_VALUE_SETTING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "(applicationId|versionCode|versionName|testInstrumentationRunner|\
keyAlias|keyPassword|storeFile|storePassword|multiDexEnabled|correctErrorTypes).*",
    )
    .expect("hardcoded regex must compile")
});

/// `versionCode 4` becomes `versionCode = 4`. Takes the first and last
/// whitespace-separated token, discarding anything in between.
pub fn insert_assignment_equals(text: &str) -> String {
    KEY_VALUE_SETTING
        .replace_all(text, |caps: &Captures<'_>| {
            let parts: Vec<&str> = caps[0].split(' ').collect();
            if parts.iter().any(|p| !p.trim().is_empty()) {
                format!("{} = {}", parts[0], parts.last().copied().unwrap_or(""))
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

static COMPATIBILITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(sourceCompatibility|targetCompatibility).*").expect("hardcoded regex must compile")
});

static QUOTE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""\]*"#).expect("hardcoded regex must compile"));

/// `sourceCompatibility "1.8"` (or `sourceCompatibility
/// JavaVersion.VERSION_1_8`) becomes `sourceCompatibility =
/// JavaVersion.VERSION_1_8`. Bare version literals are turned into the
/// enum constant name by substituting dots with underscores.
pub fn normalize_java_compatibility(text: &str) -> String {
    COMPATIBILITY
        .replace_all(text, |caps: &Captures<'_>| {
            let cleaned = QUOTE_NOISE.replace_all(&caps[0], "").into_owned();
            let parts: Vec<&str> = cleaned.split(' ').collect();
            match parts.last() {
                Some(last) if last.contains("JavaVersion") => {
                    format!("{} = {}", parts[0], last)
                }
                Some(last) => {
                    format!("{} = JavaVersion.VERSION_{}", parts[0], last.replace('.', "_"))
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

static PROGUARD_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"proguardFiles .*").expect("hardcoded regex must compile"));

static PROGUARD_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"proguardFiles\s*").expect("hardcoded regex must compile"));

/// `proguardFiles a, b` becomes `setProguardFiles(listOf(a, b))`.
pub fn convert_proguard_files(text: &str) -> String {
    PROGUARD_LINE
        .replace_all(text, |caps: &Captures<'_>| {
            let args = PROGUARD_PREFIX.replace_all(&caps[0], "");
            format!("setProguardFiles(listOf({args}))")
        })
        .into_owned()
}

static SIGNING_ASSIGNMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"signingConfig.*signingConfigs.*").expect("hardcoded regex must compile")
});

static SIGNING_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"signingConfig.*signingConfigs\.").expect("hardcoded regex must compile")
});

/// `signingConfig signingConfigs.release` becomes
/// `signingConfig = signingConfigs.getByName("release")`.
pub fn convert_signing_assignment(text: &str) -> String {
    SIGNING_ASSIGNMENT
        .replace_all(text, |caps: &Captures<'_>| {
            let name = SIGNING_PREFIX.replace_all(&caps[0], "");
            format!("signingConfig = signingConfigs.getByName(\"{name}\")")
        })
        .into_owned()
}

/// `(block, flag)` pairs: the flag is rewritten only when its block
/// type appears in the file.
static FLAG_RULES: LazyLock<[(Regex, Regex); 6]> = LazyLock::new(|| {
    let rule = |block: &str, flag: &str| {
        (
            Regex::new(&format!(r"{block}\s*\{{[\s\S]*\}}"))
                .expect("hardcoded regex must compile"),
            Regex::new(&format!(r"{flag}.*")).expect("hardcoded regex must compile"),
        )
    };
    [
        rule("androidExtensions", "experimental"),
        rule("dataBinding", "enabled"),
        rule("lintOptions", "abortOnError"),
        rule("buildTypes", "debuggable"),
        rule("buildTypes", "minifyEnabled"),
        rule("buildTypes", "shrinkResources"),
    ]
});

/// Prefix the flag keyword with `is` inside the blocks that renamed
/// their properties: `minifyEnabled true` inside `buildTypes` becomes
/// `isMinifyEnabled = true`.
///
/// The scope check is textual only: the rewrite fires whenever the
/// block type appears anywhere in the file, without verifying that the
/// flag is truly nested inside it.
pub fn prefix_boolean_flags(text: &str) -> String {
    let mut out = text.to_string();
    for (block_pattern, flag_pattern) in FLAG_RULES.iter() {
        out = add_is_prefix(&out, block_pattern, flag_pattern);
    }
    out
}

fn add_is_prefix(text: &str, block_pattern: &Regex, flag_pattern: &Regex) -> String {
    if !block_pattern.is_match(text) {
        return text.to_string();
    }

    flag_pattern
        .replace_all(text, |caps: &Captures<'_>| {
            let parts: Vec<&str> = caps[0].split(' ').collect();
            if parts.iter().any(|p| !p.trim().is_empty()) {
                format!(
                    "is{} = {}",
                    capitalize(parts[0]),
                    parts.last().copied().unwrap_or("")
                )
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

static NAME_BEFORE_BRACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S*\s)\{").expect("hardcoded regex must compile"));

static BUILD_TYPES_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"buildTypes\s*\{").expect("hardcoded regex must compile"));

static SOURCE_SETS_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"sourceSets\s*\{").expect("hardcoded regex must compile"));

static SIGNING_CONFIGS_OPENER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"signingConfigs\s*\{").expect("hardcoded regex must compile"));

/// `buildTypes { release { ... } }` becomes
/// `buildTypes { named("release"){ ... } }`.
pub fn convert_build_types(text: &str) -> String {
    convert_named_blocks(text, &BUILD_TYPES_OPENER, "named")
}

/// `sourceSets { test { ... } }` becomes
/// `sourceSets { named("test"){ ... } }`.
pub fn convert_source_sets(text: &str) -> String {
    convert_named_blocks(text, &SOURCE_SETS_OPENER, "named")
}

/// `signingConfigs { release { ... } }` becomes
/// `signingConfigs { register("release"){ ... } }`; configs are
/// created, not looked up.
pub fn convert_signing_configs(text: &str) -> String {
    convert_named_blocks(text, &SIGNING_CONFIGS_OPENER, "register")
}

fn convert_named_blocks(text: &str, opener: &Regex, accessor: &str) -> String {
    rewrite_blocks(text, opener, |body| {
        NAME_BEFORE_BRACE
            .replace_all(body, |caps: &Captures<'_>| {
                let name = caps[1].replace(' ', "");
                format!("{accessor}(\"{name}\"){{")
            })
            .into_owned()
    })
}
