use std::path::Path;

use lopdf::Document;

use crate::error::ExtractError;
use crate::extraction::PdfExtractor;
use crate::file_basename;
use crate::model::{ExtractedPage, PageText};

/// PDF extraction backend using the pure-Rust `lopdf` parser.
///
/// Pages are extracted one at a time so that a malformed content stream on
/// one page degrades to an inline annotation instead of failing the whole
/// file.
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn new() -> Self {
        LopdfExtractor
    }
}

impl Default for LopdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfExtractor for LopdfExtractor {
    fn extract_pages(&self, path: &Path) -> Result<Vec<ExtractedPage>, ExtractError> {
        let file = file_basename(path);

        let document = Document::load(path).map_err(|e| ExtractError::Unreadable {
            file: file.clone(),
            reason: e.to_string(),
        })?;

        if document.is_encrypted() {
            return Err(ExtractError::Unreadable {
                file,
                reason: "file is encrypted".into(),
            });
        }

        // get_pages() keys are 1-based page numbers; BTreeMap iteration
        // yields them in document order.
        let mut pages = Vec::new();
        for &page_number in document.get_pages().keys() {
            let text = match document.extract_text(&[page_number]) {
                Ok(t) if t.trim().is_empty() => PageText::Empty,
                Ok(t) => PageText::Text(t),
                Err(e) => PageText::Failed(e.to_string()),
            };
            pages.push(ExtractedPage { page_number, text });
        }

        Ok(pages)
    }

    fn backend_name(&self) -> &str {
        "lopdf"
    }
}
