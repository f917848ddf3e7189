use serde::{Deserialize, Serialize};

/// Outcome of text extraction for a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageText {
    /// Non-empty extracted text.
    Text(String),
    /// The page parsed but yielded no extractable text (image-only page).
    Empty,
    /// Extraction for this page failed; the document keeps processing.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Page number, 1-based, matching document order.
    pub page_number: u32,
    pub text: PageText,
}

/// All pages extracted from one document, in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedDocument {
    /// Base name of the source file (used in diagnostics).
    pub file_name: String,
    pub pages: Vec<ExtractedPage>,
}

impl ExtractedDocument {
    /// Render the concatenated plain-text output.
    ///
    /// Each page contributes its extracted text, or a bracketed placeholder
    /// when the page held no extractable text, or a bracketed error
    /// annotation when extraction for that page failed. Every page's
    /// contribution is followed by exactly one blank-line separator.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            match &page.text {
                PageText::Text(text) => out.push_str(text),
                PageText::Empty => out.push_str(&format!(
                    "[Page {} contained no extractable text or was an image]\n",
                    page.page_number
                )),
                PageText::Failed(reason) => out.push_str(&format!(
                    "[Error extracting text from page {}: {}]\n",
                    page.page_number, reason
                )),
            }
            out.push_str("\n\n");
        }
        out
    }
}
