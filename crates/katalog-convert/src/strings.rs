//! Quote and named-argument normalization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// `'anything'` becomes `"anything"`. Plain character substitution with
/// no escaping logic; this runs first so every later rule only has to
/// match double quotes.
pub fn replace_apostrophes(text: &str) -> String {
    text.replace('\'', "\"")
}

static NAMED_ARGUMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\w*:\s*".*?""#).expect("hardcoded regex must compile"));

/// `key: "value"` named arguments become `key = "value"`.
///
/// Every colon inside the match is rewritten, so this must run last:
/// earlier rules still need to see `group:name:version` coordinates
/// intact.
pub fn replace_colons_with_equals(text: &str) -> String {
    NAMED_ARGUMENT
        .replace_all(text, |caps: &Captures<'_>| caps[0].replace(':', " ="))
        .into_owned()
}
