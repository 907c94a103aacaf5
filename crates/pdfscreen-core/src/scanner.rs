use regex::RegexBuilder;
use serde::Serialize;

use crate::catalogue::builtin_categories;

/// Where a report entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    BuiltIn,
    Custom,
}

/// Occurrence count for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub kind: CategoryKind,
    pub count: usize,
}

/// Ordered per-category counts for one scan.
///
/// Built-in categories come first in catalogue order, followed by one entry
/// per custom term in the order supplied. Custom terms are not deduplicated,
/// so a term given twice appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanCounts {
    entries: Vec<CategoryCount>,
}

impl ScanCounts {
    pub fn entries(&self) -> &[CategoryCount] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCount> {
        self.entries.iter()
    }

    /// Count of the first entry with this name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all entries. Overlapping matches are counted once per entry.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    fn push(&mut self, name: impl Into<String>, kind: CategoryKind, count: usize) {
        self.entries.push(CategoryCount {
            name: name.into(),
            kind,
            count,
        });
    }
}

impl<'a> IntoIterator for &'a ScanCounts {
    type Item = &'a CategoryCount;
    type IntoIter = std::slice::Iter<'a, CategoryCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Count built-in categories and custom terms in `text`.
///
/// Every pattern is matched case-insensitively and counted without overlap.
/// Custom terms are literal substrings, each reported under its own text and
/// counted independently of any built-in category that also covers the same
/// span.
pub fn scan_baseline(text: &str, custom_terms: &[String]) -> ScanCounts {
    let mut counts = ScanCounts::default();

    for category in builtin_categories() {
        let n = category.count(text);
        tracing::debug!(category = category.name(), count = n, "built-in category");
        counts.push(category.name(), CategoryKind::BuiltIn, n);
    }

    for term in custom_terms {
        let n = count_literal(text, term);
        tracing::debug!(term = %term, count = n, "custom term");
        counts.push(term.as_str(), CategoryKind::Custom, n);
    }

    counts
}

/// Non-overlapping, case-insensitive occurrences of the literal `term` in
/// `text`, using the same Unicode case folding as the built-in categories.
fn count_literal(text: &str, term: &str) -> usize {
    if term.is_empty() {
        return 0;
    }
    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.find_iter(text).count(),
        Err(e) => {
            tracing::warn!(term = %term, error = %e, "custom term too large to match");
            0
        }
    }
}
