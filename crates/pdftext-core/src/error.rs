use std::path::PathBuf;

/// Whole-file failures. Page-level extraction failures never reach this
/// type; they are captured as [`crate::model::PageText::Failed`] and
/// annotated inline in the output instead.
///
/// Display strings are the full user-facing message; the CLI only wraps
/// them in `--- ... ---` markers before printing to stderr.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Error: PDF file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Error: PDF backend '{backend}' is not available on this system.")]
    BackendUnavailable { backend: String },

    #[error("Error reading PDF {file} (possibly encrypted or corrupted): {reason}")]
    Unreadable { file: String, reason: String },

    #[error("Error processing PDF {file}: {reason}")]
    Processing { file: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_includes_path() {
        let err = ExtractError::NotFound {
            path: PathBuf::from("/tmp/missing.pdf"),
        };
        assert_eq!(
            err.to_string(),
            "Error: PDF file not found at /tmp/missing.pdf"
        );
    }

    #[test]
    fn unreadable_message_names_file_and_reason() {
        let err = ExtractError::Unreadable {
            file: "report.pdf".into(),
            reason: "Invalid file header".into(),
        };
        assert_eq!(
            err.to_string(),
            "Error reading PDF report.pdf (possibly encrypted or corrupted): Invalid file header"
        );
    }
}
