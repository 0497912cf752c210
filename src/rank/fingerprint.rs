//! Sentence fingerprints
//!
//! A fingerprint is a single scalar derived from a sentence's words: each
//! word is hashed with the classic multiply-by-31 string hash, the hash is
//! mapped into `[-1, 1]` through `sin`, and the sentence fingerprint is the
//! arithmetic mean of its words' values. It is a hash-derived pseudo-random
//! value, not a semantic embedding — useful only for relative comparison
//! within one document, never persisted or compared across documents.
//!
//! Changing either the hash recurrence or the sine mapping changes every
//! downstream score, so both are pinned by golden tests.

/// Hash a single word: fold character scalar values left-to-right with
/// `acc' = acc * 31 + char`, seeded at 0, in wrapping 64-bit arithmetic.
/// Bit-for-bit equivalent to the shift/subtract form `(acc << 5) - acc`.
pub fn word_hash(word: &str) -> i64 {
    word.chars()
        .fold(0i64, |acc, c| acc.wrapping_mul(31).wrapping_add(c as i64))
}

/// Compute the fingerprint of a sentence: the mean of `sin(word_hash(w))`
/// over its whitespace-delimited words. The mean of zero words is defined
/// as 0, so the function is total.
pub fn fingerprint(sentence: &str) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for word in sentence.split_whitespace() {
        sum += (word_hash(word) as f64).sin();
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Similarity between two sentences under the fingerprint metric:
/// `1 - |fp(a) - fp(b)|`. Symmetric, and exactly 1 for identical input.
/// Fingerprints lie in `[-1, 1]`, so values normally fall in `[-1, 1]`
/// with 1 meaning indistinguishable fingerprints.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_of(fingerprint(a), fingerprint(b))
}

/// Similarity from precomputed fingerprints. The selector uses this so the
/// O(n²) pairwise pass costs scalar arithmetic only.
#[inline]
pub fn similarity_of(fp_a: f64, fp_b: f64) -> f64 {
    1.0 - (fp_a - fp_b).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_word_hash_recurrence() {
        // ((0*31 + 'a')*31 + 'b')*31 + 'c'
        assert_eq!(word_hash("abc"), 96_354);
        assert_eq!(word_hash("word"), 3_655_434);
        assert_eq!(word_hash("here."), 99_167_806);
        assert_eq!(word_hash(""), 0);
    }

    #[test]
    fn test_word_hash_is_order_sensitive() {
        assert_ne!(word_hash("abc"), word_hash("cba"));
    }

    #[test]
    fn test_word_hash_long_words_wrap_without_panicking() {
        let long = "pneumonoultramicroscopicsilicovolcanoconiosis";
        let _ = word_hash(long);
        assert_eq!(word_hash(long), word_hash(long));
    }

    #[test]
    fn test_sine_mapping_golden_values() {
        // Pinned against the reference recurrence; any drift in the hash or
        // the sine mapping shows up here first.
        assert!(((word_hash("abc") as f64).sin() - 0.976_443_873_209_758_7).abs() < EPS);
        assert!(((word_hash("word") as f64).sin() - 0.636_231_405_215_232_1).abs() < EPS);
        assert!(((word_hash("sentence") as f64).sin() - (-0.090_360_606_381_679_85)).abs() < EPS);
    }

    #[test]
    fn test_fingerprint_golden_value() {
        assert!((fingerprint("this is a test") - 0.419_316_818_538_424).abs() < EPS);
    }

    #[test]
    fn test_fingerprint_in_unit_interval() {
        for s in [
            "a sentence of ordinary words",
            "another different sentence entirely",
            "x",
        ] {
            let fp = fingerprint(s);
            assert!((-1.0..=1.0).contains(&fp), "fingerprint {fp} out of range");
        }
    }

    #[test]
    fn test_fingerprint_of_empty_sentence_is_zero() {
        assert_eq!(fingerprint(""), 0.0);
        assert_eq!(fingerprint("   \t "), 0.0);
    }

    #[test]
    fn test_self_similarity_is_one() {
        for s in ["one ordinary sentence", "Mixed CASE words.", "x y z"] {
            assert!((similarity(s, s) - 1.0).abs() < EPS);
        }
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = "the quick brown fox";
        let b = "a completely different phrase";
        assert!((similarity(a, b) - similarity(b, a)).abs() < EPS);
    }
}
