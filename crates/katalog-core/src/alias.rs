//! Deterministic alias derivation for catalog entries.
//!
//! Aliases are a pure function of `(group, name)`. The rule chain is an
//! ordered precedence list, specific to general; the first matching
//! rule wins and the order must not be rearranged, or generated
//! catalogs stop matching existing ones.

use crate::coordinate::Coordinate;

/// Ad-mediation adapters all live under one group with near-identical
/// artifact names; they get a distinguishing prefix.
const AD_MEDIATION_GROUP: &str = "com.google.ads.mediation";

/// The AppsFlyer SDK artifact id carries no recognizable vendor name.
const APPSFLYER_ARTIFACT: &str = "af-android-sdk";

/// Derive the catalog alias for a coordinate.
///
/// No uniqueness guarantee: unrelated `(group, name)` pairs can collide.
/// The catalog renderer detects that and fails loudly.
pub fn generate_alias(coordinate: &Coordinate) -> String {
    let group = &coordinate.group;
    let name = &coordinate.name;

    let mut alias = name.replace("-android", "");

    if group.contains("androidx.test") {
        alias = format!("androidx-test-{alias}");
    } else if group.contains("androidx") {
        alias = format!("androidx-{alias}");
    } else if group == AD_MEDIATION_GROUP {
        alias = format!("googleAdsMediation-{alias}");
    } else if name == "lib" {
        alias = group.rsplit('.').next().unwrap_or(group).to_string();
    } else if name == APPSFLYER_ARTIFACT {
        alias = "appsflyer".to_string();
    } else if group.contains("okhttp") && !name.contains("okhttp") {
        alias = format!("okhttp-{name}");
    }

    to_camel_case(&alias)
}

/// Derive the shared version alias for a group of coordinates with
/// equal `(group, version)`: the longest common prefix of the first two
/// members' aliases, with literal overrides where the computed prefix
/// collapses to a misleading short name.
pub fn shared_group_alias(first: &Coordinate, second: &Coordinate) -> String {
    let prefix = common_prefix(&generate_alias(first), &generate_alias(second));
    match prefix.as_str() {
        "firebaseCo" => "firebase".to_string(),
        "kotlinStdlibJdk" => "kotlinStdlib".to_string(),
        "androidxTestEspressoCo" => "androidxTestEspresso".to_string(),
        _ => prefix,
    }
}

/// Convert to camelCase: split on non-word characters, lower-case the
/// first segment, capitalize the first letter of every later segment.
pub fn to_camel_case(s: &str) -> String {
    s.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .enumerate()
        .map(|(index, segment)| {
            if index == 0 {
                decapitalize(segment)
            } else {
                capitalize(segment)
            }
        })
        .collect()
}

/// Longest common prefix of two strings, on char boundaries.
pub fn common_prefix(a: &str, b: &str) -> String {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x)
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
