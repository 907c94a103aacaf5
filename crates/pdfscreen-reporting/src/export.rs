use std::io::Write;
use std::path::Path;

use pdfscreen_core::{CategoryCount, CategoryKind, ScanOutcome};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Shown in every report format when a document has no usable text layer.
pub const NO_TEXT_LAYER_MESSAGE: &str =
    "This PDF appears to have no extractable text. v1 does not support scanned PDFs.";

/// Machine-readable report formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Markdown,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
        }
    }
}

/// Render `outcome` in the given format.
pub fn render(outcome: &ScanOutcome, format: ExportFormat) -> Result<String, ReportError> {
    Ok(match format {
        ExportFormat::Json => export_json(outcome)?,
        ExportFormat::Markdown => export_markdown(outcome),
    })
}

/// Render `outcome` and write it to `path`.
pub fn export_to_file(
    outcome: &ScanOutcome,
    format: ExportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    let content = render(outcome, format)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    file: String,
    pages: usize,
    text_items: usize,
    text_layer: bool,
    /// `None` when there is no text layer: nothing was counted.
    total_matches: Option<usize>,
    counts: Option<&'a [CategoryCount]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

/// Pretty-printed JSON. `counts` keeps report order as an array so
/// repeated custom terms survive.
pub fn export_json(outcome: &ScanOutcome) -> Result<String, serde_json::Error> {
    let extraction = outcome.extraction();
    let counts = outcome.counts();
    let report = JsonReport {
        file: extraction.file_path.display().to_string(),
        pages: extraction.num_pages,
        text_items: extraction.total_text_items,
        text_layer: outcome.has_text_layer(),
        total_matches: counts.map(|c| c.total()),
        counts: counts.map(|c| c.entries()),
        message: counts.is_none().then_some(NO_TEXT_LAYER_MESSAGE),
    };
    serde_json::to_string_pretty(&report)
}

fn md_escape(s: &str) -> String {
    s.replace('|', "\\|")
}

fn kind_str(kind: CategoryKind) -> &'static str {
    match kind {
        CategoryKind::BuiltIn => "built-in",
        CategoryKind::Custom => "custom",
    }
}

pub fn export_markdown(outcome: &ScanOutcome) -> String {
    let extraction = outcome.extraction();
    let mut out = String::new();

    out.push_str("# PDF Scan Report\n\n");
    out.push_str(&format!(
        "- **File:** `{}`\n",
        extraction.file_path.display()
    ));
    out.push_str(&format!("- **Pages:** {}\n", extraction.num_pages));
    out.push_str(&format!(
        "- **Text items:** {}\n",
        extraction.total_text_items
    ));

    let Some(counts) = outcome.counts() else {
        out.push_str("- **Text layer:** NO (likely scanned/image-only)\n\n");
        out.push_str(NO_TEXT_LAYER_MESSAGE);
        out.push('\n');
        return out;
    };

    out.push_str("- **Text layer:** YES (text-based PDF)\n\n");
    out.push_str("## Potential redactions\n\n");
    out.push_str("| Category | Kind | Count |\n");
    out.push_str("|----------|------|------:|\n");
    for entry in counts {
        out.push_str(&format!(
            "| {} | {} | {} |\n",
            md_escape(&entry.name),
            kind_str(entry.kind),
            entry.count
        ));
    }
    out.push_str(&format!("\n**Total:** {}\n", counts.total()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdfscreen_core::{ExtractionResult, scan_extraction};

    fn extraction(items: usize, text: &str) -> ExtractionResult {
        ExtractionResult {
            file_path: "/docs/contract.pdf".into(),
            num_pages: 3,
            total_text_items: items,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_md_escape_pipe() {
        assert_eq!(md_escape("A | B"), "A \\| B");
    }

    #[test]
    fn test_json_scanned() {
        let outcome = scan_extraction(extraction(4, "Alice at alice@example.org"), &["Alice".into()]);
        let json: serde_json::Value = serde_json::from_str(&export_json(&outcome).unwrap()).unwrap();
        assert_eq!(json["file"], "/docs/contract.pdf");
        assert_eq!(json["pages"], 3);
        assert_eq!(json["text_items"], 4);
        assert_eq!(json["text_layer"], true);
        let counts = json["counts"].as_array().unwrap();
        let email = counts.iter().find(|c| c["name"] == "Email-like").unwrap();
        assert_eq!(email["count"], 1);
        let alice = counts.last().unwrap();
        assert_eq!(alice["name"], "Alice");
        // "Alice" and the local part "alice" both match
        assert_eq!(alice["count"], 2);
        assert_eq!(json["total_matches"], 3);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_json_no_text_layer() {
        let outcome = scan_extraction(extraction(0, ""), &[]);
        let json: serde_json::Value = serde_json::from_str(&export_json(&outcome).unwrap()).unwrap();
        assert_eq!(json["text_layer"], false);
        assert!(json["counts"].is_null());
        assert!(json["total_matches"].is_null());
        assert_eq!(json["message"], NO_TEXT_LAYER_MESSAGE);
    }

    #[test]
    fn test_markdown_table() {
        let outcome = scan_extraction(extraction(1, "call 555-123-4567"), &["a|b".into()]);
        let md = export_markdown(&outcome);
        assert!(md.contains("- **Text layer:** YES (text-based PDF)"));
        assert!(md.contains("| Phone-like | built-in | 1 |"));
        assert!(md.contains("| a\\|b | custom | 0 |"));
        assert!(md.contains("**Total:** 1"));
    }

    #[test]
    fn test_markdown_no_text_layer() {
        let md = export_markdown(&scan_extraction(extraction(0, ""), &[]));
        assert!(md.contains("NO (likely scanned/image-only)"));
        assert!(!md.contains("Potential redactions"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(format!("report.{}", ExportFormat::Json.extension()));
        let outcome = scan_extraction(extraction(1, "hello"), &[]);
        export_to_file(&outcome, ExportFormat::Json, &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"text_layer\": true"));
    }
}
