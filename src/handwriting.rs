use crate::error::NameError;
use itertools::Itertools;
use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_]").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]").unwrap());

/// Cleans up a hand-written recipe name.
///
/// Hyphens and underscores become spaces, every other character that is not
/// an ASCII letter or a space is dropped, runs of spaces collapse, and each
/// remaining word is title-cased.
///
/// ```rust
/// use cookbook::handwriting::parse_handwriting;
///
/// assert_eq!(parse_handwriting("  Boston-Roll_42!!").unwrap(), "Boston Roll");
/// assert!(parse_handwriting("---").is_err());
/// ```
pub fn parse_handwriting(input: &str) -> Result<String, NameError> {
    let spaced = SEPARATORS.replace_all(input, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");

    let parsed = letters.split_whitespace().map(title_case).join(" ");
    if parsed.is_empty() {
        Err(NameError::Empty)
    } else {
        Ok(parsed)
    }
}

fn title_case(word: &str) -> String {
    word.chars()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}
