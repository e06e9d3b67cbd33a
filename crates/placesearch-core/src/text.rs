// crates/placesearch-core/src/text.rs

//! Text helpers shared by the index and the query pipeline: folding,
//! word segmentation and query splitting.

use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("static word pattern"));
static SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,]+").expect("static separator pattern"));

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use placesearch_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Plain Unicode lowercasing, diacritics kept.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Compares two strings for equality after [`fold_key`].
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// Word tokens of a display term: maximal runs of alphanumeric or `_`
/// characters, in order of appearance.
///
/// ```rust
/// use placesearch_core::text::tokens;
///
/// let words: Vec<_> = tokens("Rome, Italy").collect();
/// assert_eq!(words, ["Rome", "Italy"]);
/// ```
pub fn tokens(term: &str) -> impl Iterator<Item = &str> {
    WORD.find_iter(term).map(|m| m.as_str())
}

/// Splits a raw query on runs of whitespace and commas. Empty pieces
/// (leading or trailing separators) are dropped.
pub fn split_query(query: &str) -> impl Iterator<Item = &str> {
    SEPARATORS.split(query).filter(|s| !s.is_empty())
}

/// Length in characters, not bytes.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
