use std::path::Path;

use thiserror::Error;

use crate::ExtractionResult;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text-layer extraction backends.
///
/// Implementors read the whole document and report the page count, the
/// number of text items the renderer found, and the concatenated text.
/// Deciding whether that text is usable is left to
/// [`crate::text_layer::has_text_layer`].
pub trait PdfBackend: Send + Sync {
    /// Extract the text layer of a PDF file.
    fn extract(&self, path: &Path) -> Result<ExtractionResult, BackendError>;
}
