//! Variable-declaration and list-literal rewrites.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static DEF_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)def ").expect("hardcoded regex must compile"));

/// `def appcompat = "1.0.0"` becomes `val appcompat = "1.0.0"`.
///
/// Only converts `def` at the start of the text or after whitespace, so
/// an identifier like `highdef` is left alone.
pub fn modernize_def(text: &str) -> String {
    DEF_KEYWORD
        .replace_all(text, |caps: &Captures<'_>| caps[0].replace("def", "val"))
        .into_owned()
}

static ARRAY_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*?)\]").expect("hardcoded regex must compile"));

/// `[items...]` becomes `listOf(items...)`.
///
/// Does not span nested brackets correctly; the inner class excludes
/// `]`, so `[[a], b]` converts the inner list only. Known limitation.
pub fn convert_array_expression(text: &str) -> String {
    ARRAY_LITERAL.replace_all(text, "listOf($1)").into_owned()
}

static VAR_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:final\s+)?(\w+)(<.+>)? +(\w+)\s*=\s*(.+)").expect("hardcoded regex must compile")
});

/// `final String<T> foo = "bar"` becomes `val foo: String<T> = "bar"`.
///
/// A declaration whose type keyword is already `val` (a `def` converted
/// by the previous stage) gets the type-inferred form instead. Single
/// line only.
pub fn convert_variable_declaration(text: &str) -> String {
    VAR_DECLARATION
        .replace_all(text, |caps: &Captures<'_>| {
            let type_name = &caps[1];
            let generics = caps.get(2).map_or("", |m| m.as_str());
            let id = &caps[3];
            let value = &caps[4];
            if type_name == "val" {
                format!("val {id} = {value}")
            } else {
                format!("val {id}: {type_name}{generics} = {value}")
            }
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn def_becomes_val() {
        assert_eq!(modernize_def("def appcompat = \"1.0.0\""), "val appcompat = \"1.0.0\"");
        assert_eq!(modernize_def("  def x = 1"), "  val x = 1");
    }

    #[test]
    fn def_inside_identifier_is_preserved() {
        assert_eq!(modernize_def("highdef = 1"), "highdef = 1");
    }

    #[test]
    fn array_becomes_list_of() {
        assert_eq!(
            convert_array_expression(r#"flavorDimensions ["tier", "mode"]"#),
            r#"flavorDimensions listOf("tier", "mode")"#
        );
    }

    #[test]
    fn typed_declaration_gets_explicit_type() {
        assert_eq!(
            convert_variable_declaration(r#"final String name = "katalog""#),
            r#"val name: String = "katalog""#
        );
        assert_eq!(
            convert_variable_declaration(r#"List<String> names = emptyList()"#),
            r#"val names: List<String> = emptyList()"#
        );
    }

    #[test]
    fn val_declaration_keeps_inferred_type() {
        assert_eq!(
            convert_variable_declaration(r#"val appcompat = "1.0.0""#),
            r#"val appcompat = "1.0.0""#
        );
    }
}
