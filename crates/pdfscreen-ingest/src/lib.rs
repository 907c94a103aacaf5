use std::path::{Path, PathBuf};

use thiserror::Error;

// Re-export domain types for convenience
pub use pdfscreen_core::{BackendError, ExtractionResult, PdfBackend};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("only single PDF files are supported in v1 scan (got: {})", .0.display())]
    NotAFile(PathBuf),
    #[error("not a PDF: {}", .0.display())]
    NotPdf(PathBuf),
    #[error("PDF extraction error")]
    Extraction(#[from] BackendError),
    #[cfg(not(feature = "pdf"))]
    #[error("PDF support not compiled in (enable the `pdf` feature of pdfscreen-ingest)")]
    NoPdfSupport,
}

impl IngestError {
    /// Whether the input was rejected before any extraction was attempted.
    pub fn is_input_rejection(&self) -> bool {
        matches!(
            self,
            IngestError::NotFound(_) | IngestError::NotAFile(_) | IngestError::NotPdf(_)
        )
    }
}

/// Resolve `path` to an absolute path and check it names a single `.pdf`
/// file. The extension check ignores case.
pub fn resolve_input(path: &Path) -> Result<PathBuf, IngestError> {
    let full = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let meta = std::fs::metadata(&full).map_err(|_| IngestError::NotFound(full.clone()))?;
    if !meta.is_file() {
        return Err(IngestError::NotAFile(full));
    }

    let is_pdf = full
        .extension()
        .map(|e| e.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(IngestError::NotPdf(full));
    }

    Ok(full)
}

/// Extract the text layer of an already validated PDF with `backend`.
/// Backend failures are passed through unchanged.
pub fn extract_with(path: &Path, backend: &dyn PdfBackend) -> Result<ExtractionResult, IngestError> {
    let result = backend.extract(path)?;
    tracing::info!(
        path = %result.file_path.display(),
        pages = result.num_pages,
        items = result.total_text_items,
        "extracted"
    );
    Ok(result)
}

/// Extract the text layer of a validated PDF using the default backend
/// (requires the `pdf` feature / mupdf).
#[cfg(feature = "pdf")]
pub fn extract_text_layer(path: &Path) -> Result<ExtractionResult, IngestError> {
    let backend = pdfscreen_pdf_mupdf::MupdfBackend::default();
    extract_with(path, &backend)
}

#[cfg(not(feature = "pdf"))]
pub fn extract_text_layer(_path: &Path) -> Result<ExtractionResult, IngestError> {
    Err(IngestError::NoPdfSupport)
}
