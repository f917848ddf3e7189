pub mod error;
pub mod extraction;
pub mod model;

use std::path::Path;

use error::ExtractError;
use extraction::PdfExtractor;
use model::ExtractedDocument;

/// Main API entry point: extract all page text from the PDF at `path`.
///
/// Validates that the file exists and that the backend is usable, then
/// delegates parsing and per-page extraction to `extractor`. Page-level
/// failures are recorded inside the returned document; only whole-file
/// failures surface as `Err`.
pub fn extract_file(
    path: &Path,
    extractor: &dyn PdfExtractor,
) -> Result<ExtractedDocument, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if !extractor.is_available() {
        return Err(ExtractError::BackendUnavailable {
            backend: extractor.backend_name().to_string(),
        });
    }

    let pages = extractor.extract_pages(path)?;

    Ok(ExtractedDocument {
        file_name: file_basename(path),
        pages,
    })
}

/// Base name of `path` for diagnostics, falling back to the full path when
/// it has no final component.
pub fn file_basename(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn basename_of_regular_path() {
        assert_eq!(file_basename(Path::new("/tmp/dir/report.pdf")), "report.pdf");
    }

    #[test]
    fn basename_falls_back_to_full_path() {
        assert_eq!(file_basename(Path::new("..")), "..");
        assert_eq!(file_basename(&PathBuf::from("/")), "/");
    }
}
