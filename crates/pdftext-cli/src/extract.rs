use std::io::Write;
use std::path::Path;

use pdftext_core::error::ExtractError;
use pdftext_core::extraction::lopdf_backend::LopdfExtractor;

/// Extract the PDF at `pdf_file` and write its text to stdout.
///
/// Warnings (zero pages, no extractable text) go to stderr and do not fail
/// the run; the returned error covers fatal whole-file conditions only.
pub fn run(pdf_file: &Path) -> Result<(), ExtractError> {
    let extractor = LopdfExtractor::new();
    let document = pdftext_core::extract_file(pdf_file, &extractor)?;

    if document.pages.is_empty() {
        eprintln!("--- No pages found in PDF {}. ---", document.file_name);
    }

    let output = document.render();
    if output.trim().is_empty() {
        eprintln!(
            "--- No text extracted from PDF {}. The PDF might be image-based or password-protected. ---",
            document.file_name
        );
    }

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .map_err(|e| ExtractError::Processing {
            file: document.file_name.clone(),
            reason: e.to_string(),
        })?;

    Ok(())
}
