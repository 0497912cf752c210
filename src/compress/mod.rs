//! Lexical compression
//!
//! Applies a fixed, ordered sequence of global rewrite rules to the
//! extractive summary: drop articles, drop intensifiers, strip the literal
//! `ing` suffix at word boundaries, collapse whitespace, trim. The suffix
//! rule is a blunt substring removal, not stemming — it happily corrupts
//! words that merely end in those three letters (`running` -> `runn`,
//! `swinging` -> `swing`). That is reproducible reference behavior and is
//! kept as-is.
//!
//! The pass is deterministic and pure but not idempotent: removing one
//! `ing` can expose another (`swinging` -> `swing`, and a second pass would
//! give `sw`). Callers get exactly one pass.

use once_cell::sync::Lazy;
use regex::Regex;

static ARTICLES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:the|a|an)\s+").expect("articles pattern"));
static INTENSIFIERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:very|really|extremely)\s+").expect("intensifiers pattern"));
// Case-sensitive, matching the reference: "AmazING" keeps its suffix.
static ING_SUFFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"ing\b").expect("ing pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Apply the rewrite rules, in order, to `summary`.
///
/// Total function: any string in, including empty, possibly-empty string
/// out. No error conditions.
///
/// # Examples
///
/// ```
/// use condensr::compress::compress;
///
/// assert_eq!(compress("the very running dog"), "runn dog");
/// ```
pub fn compress(summary: &str) -> String {
    let pass = ARTICLES.replace_all(summary, "");
    let pass = INTENSIFIERS.replace_all(&pass, "");
    let pass = ING_SUFFIX.replace_all(&pass, "");
    let pass = WHITESPACE.replace_all(&pass, " ");
    pass.trim().to_string()
}
