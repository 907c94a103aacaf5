use std::path::Path;

use mupdf::{Document, TextPageFlags};

use pdfscreen_core::{BackendError, ExtractionResult, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate isolates the mupdf dependency (which is AGPL-3.0) so that
/// the scanning engine does not transitively depend on it.
///
/// Every text line MuPDF reports counts as one text item, including lines
/// that hold only whitespace; deciding whether the text is usable is the
/// caller's job. Pages are separated by a blank line in the output text.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract(&self, path: &Path) -> Result<ExtractionResult, BackendError> {
        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut pages_text = Vec::new();
        let mut total_text_items = 0usize;

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut page_text = String::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    page_text.push_str(&line_text);
                    page_text.push('\n');
                    total_text_items += 1;
                }
            }
            pages_text.push(page_text);
        }

        tracing::debug!(
            path = %path.display(),
            pages = pages_text.len(),
            items = total_text_items,
            "extracted text layer"
        );

        Ok(ExtractionResult {
            file_path: path.to_path_buf(),
            num_pages: pages_text.len(),
            total_text_items,
            text: pages_text.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_open_error() {
        let dir = std::env::temp_dir().join("pdfscreen-mupdf-missing");
        let err = MupdfBackend::new()
            .extract(&dir.join("absent.pdf"))
            .unwrap_err();
        assert!(matches!(err, BackendError::OpenError(_)));
    }
}
