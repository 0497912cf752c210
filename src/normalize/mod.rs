//! Text normalization
//!
//! Produces a canonical lowercase, punctuation-reduced view of the input:
//! word characters, whitespace, and periods survive; everything else
//! (commas, quotes, hyphens, and notably the sentence terminators `!` and
//! `?`) is stripped, whitespace runs collapse to single spaces, and the
//! result is trimmed.
//!
//! Because `!`/`?` do not survive, the normalized view is unsuitable for
//! sentence boundary detection — the segmenter runs on the raw text, and
//! this view exists only for presentation-neutral matching. That split is
//! reference behavior, not an accident.

/// Normalize raw text into its canonical matching form.
///
/// Total and idempotent; empty input yields empty output.
///
/// # Examples
///
/// ```
/// use condensr::normalize::normalize;
///
/// assert_eq!(normalize("  Hello, World!  It's FINE. "), "hello world its fine.");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }
        let keep = c.is_alphanumeric() || c == '_' || c == '.';
        if !keep {
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        for lower in c.to_lowercase() {
            out.push(lower);
        }
    }

    out
}
