//! Sentence segmentation
//!
//! Splits raw text into sentence-level units at every point where `.`, `!`,
//! or `?` is immediately followed by whitespace. The terminal punctuation
//! stays attached to the preceding sentence and the whitespace run is
//! consumed as the delimiter — a lookbehind-style split. Fragments whose
//! trimmed length is at most [`MIN_SENTENCE_CHARS`] characters are treated
//! as noise (headers, stray abbreviations) and dropped.
//!
//! Segmentation runs on the *raw* text, never the normalized view: the
//! normalizer strips `!` and `?`, so boundaries would be lost there.

use crate::types::Sentence;

/// A fragment must be strictly longer than this (in chars, after trimming)
/// to count as a sentence.
pub const MIN_SENTENCE_CHARS: usize = 10;

/// Split text into ordered sentences.
///
/// Total function. Text with no qualifying boundary yields a single sentence
/// equal to the whole trimmed text, or nothing if that is too short.
/// `Sentence::index` numbers the kept sentences, which is what the ranker's
/// positional bonus consumes.
///
/// # Examples
///
/// ```
/// use condensr::segment::segment;
///
/// let sentences = segment("First sentence here. Second sentence there.");
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text, "First sentence here.");
/// assert_eq!(sentences[1].index, 1);
/// ```
pub fn segment(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut frag_start = 0usize;

    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        let is_terminal = matches!(c, '.' | '!' | '?');
        if !is_terminal {
            continue;
        }
        let boundary = matches!(chars.peek(), Some((_, next)) if next.is_whitespace());
        if !boundary {
            continue;
        }

        let frag_end = i + c.len_utf8();
        push_fragment(text, frag_start, frag_end, &mut sentences);

        // Consume the whitespace run; the next fragment starts after it.
        frag_start = frag_end;
        while let Some((j, next)) = chars.peek().copied() {
            if !next.is_whitespace() {
                frag_start = j;
                break;
            }
            frag_start = j + next.len_utf8();
            chars.next();
        }
    }

    push_fragment(text, frag_start, text.len(), &mut sentences);
    sentences
}

/// Trim the fragment, apply the length filter, and append it with offsets
/// relative to the source text.
fn push_fragment(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let frag = &text[start..end];
    let trimmed = frag.trim();
    if trimmed.chars().count() <= MIN_SENTENCE_CHARS {
        return;
    }
    let lead = frag.len() - frag.trim_start().len();
    out.push(Sentence {
        text: trimmed.to_string(),
        index: out.len(),
        start: start + lead,
        end: start + lead + trimmed.len(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminator_followed_by_whitespace() {
        let s = segment("This is the first sentence. This is the second one! Is this the third?");
        assert_eq!(s.len(), 3);
        assert_eq!(s[0].text, "This is the first sentence.");
        assert_eq!(s[1].text, "This is the second one!");
        assert_eq!(s[2].text, "Is this the third?");
    }

    #[test]
    fn test_terminator_without_whitespace_is_not_a_boundary() {
        let s = segment("Version 2.5 shipped on time today.");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "Version 2.5 shipped on time today.");
    }

    #[test]
    fn test_short_fragments_are_dropped() {
        let s = segment("Heading. This sentence is long enough to keep. Ok. End");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "This sentence is long enough to keep.");
        assert_eq!(s[0].index, 0);
    }

    #[test]
    fn test_no_sentence_at_or_under_min_length() {
        let text = "One. Two three. Something sufficiently long here. Tiny bit. x";
        for sentence in segment(text) {
            assert!(sentence.text.trim().chars().count() > MIN_SENTENCE_CHARS);
        }
    }

    #[test]
    fn test_indices_number_kept_sentences() {
        // The dropped heading must not leave a gap in the indices.
        let s = segment("Intro. A first sentence that is kept. A second sentence that is kept.");
        assert_eq!(s.len(), 2);
        assert_eq!(s[0].index, 0);
        assert_eq!(s[1].index, 1);
    }

    #[test]
    fn test_no_boundary_yields_whole_text() {
        let s = segment("no terminal punctuation at all");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "no terminal punctuation at all");
    }

    #[test]
    fn test_empty_and_too_short_input() {
        assert!(segment("").is_empty());
        assert!(segment("Too short.").is_empty());
        assert!(segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  First sentence padded out.   Second sentence padded out.  ";
        let s = segment(text);
        assert_eq!(s.len(), 2);
        for sentence in &s {
            assert_eq!(&text[sentence.start..sentence.end], sentence.text);
        }
    }

    #[test]
    fn test_trailing_whitespace_after_last_terminator() {
        let s = segment("Only one full sentence here.   ");
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].text, "Only one full sentence here.");
    }

    #[test]
    fn test_multibyte_text() {
        let s = segment("Ein Satz über Flüsse und Täler. Noch ein längerer Satz über Berge.");
        assert_eq!(s.len(), 2);
        assert_eq!(s[1].text, "Noch ein längerer Satz über Berge.");
    }
}
