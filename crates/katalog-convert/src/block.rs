//! Brace-depth block scanning.
//!
//! Block extents cannot be expressed in a single regex at arbitrary
//! nesting depth, so the opener is located by regex and the matching
//! closing brace by an explicit depth-counting scan.

use regex::Regex;

/// Rewrite every `{`-delimited block opened by a match of `opener`.
///
/// The scan walks forward from the opening brace, incrementing and
/// decrementing a depth counter on `{`/`}` until depth returns to zero.
/// `modify` receives the block text from the opening brace up to (not
/// including) the matching closing brace. If no matching brace exists
/// the block runs to the end of the text. Blocks are rewritten
/// back-to-front so earlier match offsets stay valid.
pub fn rewrite_blocks(text: &str, opener: &Regex, modify: impl Fn(&str) -> String) -> String {
    let matches: Vec<usize> = opener.find_iter(text).map(|m| m.end()).collect();

    let mut result = text.to_string();
    for end in matches.into_iter().rev() {
        // the opener pattern ends with the opening brace
        let open = end - 1;
        let close = matching_brace(&result, open);
        let converted = modify(&result[open..close]);
        result.replace_range(open..close, &converted);
    }
    result
}

/// Index of the brace closing the block opened at `open`, or the text
/// length if the block never closes.
fn matching_brace(text: &str, open: usize) -> usize {
    let mut depth: i64 = 0;
    for (i, byte) in text.as_bytes().iter().enumerate().skip(open) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return i;
                }
            }
            _ => {}
        }
    }
    text.len()
}
