pub mod lopdf_backend;

use std::path::Path;

use crate::error::ExtractError;
use crate::model::ExtractedPage;

/// Trait for PDF text extraction backends.
pub trait PdfExtractor: Send + Sync {
    /// Extract text from the document at `path`, returning one entry per
    /// page in document order.
    ///
    /// A failure confined to a single page is captured in that page's
    /// [`crate::model::PageText::Failed`] entry; only whole-file failures
    /// (unreadable or encrypted document) surface as `Err`.
    fn extract_pages(&self, path: &Path) -> Result<Vec<ExtractedPage>, ExtractError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;

    /// Whether the backend can run on this system. Compiled-in backends
    /// always report true; a backend that shells out to an external tool
    /// overrides this to probe for the binary.
    fn is_available(&self) -> bool {
        true
    }
}
