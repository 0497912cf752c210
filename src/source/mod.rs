//! Document sources and the text extraction boundary.
//!
//! The core pipeline consumes plain text. Documents arrive either as text
//! already or as bytes in some binary format that an external collaborator
//! turns into text. Extraction is a single opaque request that either
//! yields text or reports [`Extraction::NotExtracted`] — never a fault.
//! `NotExtracted` degrades to empty text, which the boundary layer then
//! treats as the ordinary empty-input case.

use std::borrow::Cow;

/// Format tag for binary document bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Plain UTF-8 bytes (e.g. a `.txt` upload).
    PlainUtf8,
    /// A PDF document; extraction requires an external collaborator.
    Pdf,
}

/// A document handed to the condenser: either plain text or tagged bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// Text that needs no extraction.
    PlainText(String),
    /// Raw bytes in a tagged binary format.
    Binary {
        bytes: Vec<u8>,
        format: DocumentFormat,
    },
}

impl DocumentSource {
    /// Resolve the source to plain text using `extractor` for binary
    /// formats. Extraction failure yields the empty string; the caller's
    /// empty-input handling takes it from there.
    pub fn resolve(&self, extractor: &impl TextExtractor) -> Cow<'_, str> {
        match self {
            DocumentSource::PlainText(text) => Cow::Borrowed(text.as_str()),
            DocumentSource::Binary { bytes, format } => match extractor.extract(bytes, *format) {
                Extraction::Text(text) => Cow::Owned(text),
                Extraction::NotExtracted => Cow::Borrowed(""),
            },
        }
    }
}

impl From<String> for DocumentSource {
    fn from(text: String) -> Self {
        DocumentSource::PlainText(text)
    }
}

impl From<&str> for DocumentSource {
    fn from(text: &str) -> Self {
        DocumentSource::PlainText(text.to_string())
    }
}

/// Outcome of a single extraction request. A distinct marker, not an error:
/// the pipeline never raises a separate "extraction failed" kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// The extracted plain text.
    Text(String),
    /// The format could not be read; maps to empty input downstream.
    NotExtracted,
}

/// Converts binary document bytes into plain text.
///
/// Implementations must be total: return [`Extraction::NotExtracted`] for
/// anything unreadable rather than panicking or erroring.
pub trait TextExtractor {
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Extraction;
}

/// Built-in extractor: decodes [`DocumentFormat::PlainUtf8`] bytes (lossy,
/// so invalid sequences become replacement characters) and declines every
/// other format. PDF parsing stays with external collaborators that
/// implement [`TextExtractor`] themselves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Extractor;

impl TextExtractor for Utf8Extractor {
    fn extract(&self, bytes: &[u8], format: DocumentFormat) -> Extraction {
        match format {
            DocumentFormat::PlainUtf8 => {
                Extraction::Text(String::from_utf8_lossy(bytes).into_owned())
            }
            DocumentFormat::Pdf => Extraction::NotExtracted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_resolves_to_itself() {
        let source = DocumentSource::from("hello there");
        assert_eq!(source.resolve(&Utf8Extractor), "hello there");
    }

    #[test]
    fn test_utf8_bytes_resolve_to_text() {
        let source = DocumentSource::Binary {
            bytes: "bytes of text".as_bytes().to_vec(),
            format: DocumentFormat::PlainUtf8,
        };
        assert_eq!(source.resolve(&Utf8Extractor), "bytes of text");
    }

    #[test]
    fn test_invalid_utf8_is_lossy_not_fatal() {
        let source = DocumentSource::Binary {
            bytes: vec![b'o', b'k', 0xFF, b'!'],
            format: DocumentFormat::PlainUtf8,
        };
        let text = source.resolve(&Utf8Extractor);
        assert!(text.starts_with("ok"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_unreadable_format_degrades_to_empty() {
        let source = DocumentSource::Binary {
            bytes: vec![0x25, 0x50, 0x44, 0x46],
            format: DocumentFormat::Pdf,
        };
        assert_eq!(source.resolve(&Utf8Extractor), "");
    }

    #[test]
    fn test_custom_extractor() {
        struct FakePdf;
        impl TextExtractor for FakePdf {
            fn extract(&self, _bytes: &[u8], format: DocumentFormat) -> Extraction {
                match format {
                    DocumentFormat::Pdf => Extraction::Text("pdf text".to_string()),
                    DocumentFormat::PlainUtf8 => Extraction::NotExtracted,
                }
            }
        }

        let source = DocumentSource::Binary {
            bytes: vec![],
            format: DocumentFormat::Pdf,
        };
        assert_eq!(source.resolve(&FakePdf), "pdf text");
    }
}
