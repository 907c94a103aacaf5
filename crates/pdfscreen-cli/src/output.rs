use std::io::Write;

use owo_colors::OwoColorize;
use pdfscreen_core::{ScanOutcome, builtin_categories};
use pdfscreen_reporting::NO_TEXT_LAYER_MESSAGE;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print the plain-text scan report.
pub fn print_report(w: &mut dyn Write, outcome: &ScanOutcome, color: ColorMode) -> std::io::Result<()> {
    let extraction = outcome.extraction();

    if color.enabled() {
        writeln!(w, "{}", "=== PDF Scan Report ===".bold())?;
    } else {
        writeln!(w, "=== PDF Scan Report ===")?;
    }
    writeln!(w, "File: {}", extraction.file_path.display())?;
    writeln!(w, "Pages: {}", extraction.num_pages)?;
    writeln!(w, "Text items: {}", extraction.total_text_items)?;

    let layer = if outcome.has_text_layer() {
        "YES (text-based PDF)"
    } else {
        "NO (likely scanned/image-only)"
    };
    if color.enabled() {
        if outcome.has_text_layer() {
            writeln!(w, "Text layer: {}", layer.green())?;
        } else {
            writeln!(w, "Text layer: {}", layer.red())?;
        }
    } else {
        writeln!(w, "Text layer: {}", layer)?;
    }
    writeln!(w)?;

    let Some(counts) = outcome.counts() else {
        writeln!(w, "{NO_TEXT_LAYER_MESSAGE}")?;
        return Ok(());
    };

    writeln!(w, "Potential redactions (counts):")?;
    for entry in counts {
        if color.enabled() && entry.count > 0 {
            writeln!(w, "- {}: {}", entry.name, entry.count.yellow())?;
        } else {
            writeln!(w, "- {}: {}", entry.name, entry.count)?;
        }
    }
    Ok(())
}

/// Print the built-in category catalogue.
pub fn print_categories(w: &mut dyn Write, color: ColorMode) -> std::io::Result<()> {
    writeln!(w, "Built-in categories (matched case-insensitively, in report order):")?;
    writeln!(w)?;
    for category in builtin_categories() {
        if color.enabled() {
            writeln!(w, "{}", category.name().bold())?;
        } else {
            writeln!(w, "{}", category.name())?;
        }
        writeln!(w, "  {}", category.spec.description)?;
        for pattern in category.spec.patterns {
            if color.enabled() {
                writeln!(w, "  {}", pattern.dimmed())?;
            } else {
                writeln!(w, "  {}", pattern)?;
            }
        }
        writeln!(w)?;
    }
    writeln!(
        w,
        "Custom terms (--add-term, --add-terms-file) are literal, case-insensitive and each get their own line."
    )?;
    Ok(())
}
