use std::path::PathBuf;

pub mod backend;
pub mod catalogue;
pub mod config_file;
pub mod scanner;
pub mod terms;
pub mod text_layer;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use catalogue::{BUILTIN_CATEGORIES, CategorySpec, builtin_categories};
pub use scanner::{CategoryCount, CategoryKind, ScanCounts, scan_baseline};
pub use terms::{TermsError, collect_custom_terms, load_terms_file, parse_terms};
pub use text_layer::has_text_layer;

/// Text layer pulled out of a PDF by a [`PdfBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionResult {
    pub file_path: PathBuf,
    pub num_pages: usize,
    /// Number of text items (lines) the backend found across all pages.
    pub total_text_items: usize,
    /// All page text concatenated.
    pub text: String,
}

/// Outcome of scanning one successfully extracted document.
///
/// A missing text layer is an expected result, not an error: the document
/// was readable but there is nothing to count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    Scanned {
        extraction: ExtractionResult,
        counts: ScanCounts,
    },
    NoTextLayer {
        extraction: ExtractionResult,
    },
}

impl ScanOutcome {
    pub fn extraction(&self) -> &ExtractionResult {
        match self {
            ScanOutcome::Scanned { extraction, .. } | ScanOutcome::NoTextLayer { extraction } => {
                extraction
            }
        }
    }

    pub fn has_text_layer(&self) -> bool {
        matches!(self, ScanOutcome::Scanned { .. })
    }

    pub fn counts(&self) -> Option<&ScanCounts> {
        match self {
            ScanOutcome::Scanned { counts, .. } => Some(counts),
            ScanOutcome::NoTextLayer { .. } => None,
        }
    }
}

/// Check the text layer of `extraction` and, if present, count sensitive
/// terms in it. Counting is skipped entirely when there is no usable text.
pub fn scan_extraction(extraction: ExtractionResult, custom_terms: &[String]) -> ScanOutcome {
    if !has_text_layer(&extraction) {
        tracing::info!(
            path = %extraction.file_path.display(),
            items = extraction.total_text_items,
            "no usable text layer"
        );
        return ScanOutcome::NoTextLayer { extraction };
    }

    let counts = scan_baseline(&extraction.text, custom_terms);
    tracing::info!(
        path = %extraction.file_path.display(),
        categories = counts.len(),
        matches = counts.total(),
        "scan complete"
    );
    ScanOutcome::Scanned { extraction, counts }
}
