//! Text extraction from uploaded documents.

use tracing::{debug, warn};

use crate::document::{Document, DocumentKind};

/// Extract cleaned text from an uploaded document.
///
/// PDF text is read from the text layer page by page; pages without one
/// (scanned images) are skipped, and every whitespace run collapses to a
/// single space. Plain text is decoded as UTF-8 verbatim.
///
/// Extraction never fails. Malformed or unreadable input yields an empty
/// string, which callers treat as "no content to process" rather than an
/// error.
pub fn extract(document: &Document) -> String {
    match document.kind {
        DocumentKind::Pdf => extract_pdf(&document.bytes),
        DocumentKind::PlainText => extract_plain_text(&document.bytes),
    }
}

fn extract_pdf(bytes: &[u8]) -> String {
    let pages = match pdf_extract::extract_text_from_mem_by_pages(bytes) {
        Ok(pages) => pages,
        Err(err) => {
            warn!(error = %err, "failed to extract PDF text");
            return String::new();
        }
    };

    let mut text = String::new();
    for (number, page) in pages.iter().enumerate() {
        let cleaned = collapse_whitespace(page);
        if cleaned.is_empty() {
            debug!(page = number + 1, "skipping page without a text layer");
            continue;
        }
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(&cleaned);
    }
    text
}

fn extract_plain_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(err) => {
            warn!(error = %err, "uploaded text is not valid UTF-8");
            String::new()
        }
    }
}

/// Collapse every whitespace run (including newlines) to a single space.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        assert_eq!(collapse_whitespace("a  b\n\nc\td"), "a b c d");
        assert_eq!(collapse_whitespace("  padded  "), "padded");
        assert_eq!(collapse_whitespace(" \n\t "), "");
    }

    #[test]
    fn plain_text_passes_through_verbatim() {
        let document = Document::new(DocumentKind::PlainText, "line one\nline two\n".as_bytes());
        assert_eq!(extract(&document), "line one\nline two\n");
    }

    #[test]
    fn invalid_utf8_yields_empty_text() {
        let document = Document::new(DocumentKind::PlainText, vec![0xff, 0xfe, 0x00]);
        assert_eq!(extract(&document), "");
    }

    #[test]
    fn unreadable_pdf_yields_empty_text() {
        let document = Document::new(DocumentKind::Pdf, b"not a pdf at all".to_vec());
        assert_eq!(extract(&document), "");
    }

    #[test]
    fn empty_upload_yields_empty_text() {
        let document = Document::new(DocumentKind::PlainText, Vec::new());
        assert_eq!(extract(&document), "");
    }
}
