//! Built-in sensitive-information categories.
//!
//! The catalogue is plain static data: a category name, a short description
//! shown by `pdfscreen categories`, and one or more regular expressions.
//! Declaration order here is the order categories appear in every report,
//! so new entries go at the end.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Declaration of a built-in category.
#[derive(Debug)]
pub struct CategorySpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Sub-patterns, each evaluated case-insensitively over the full text.
    pub patterns: &'static [&'static str],
}

pub const BUILTIN_CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "Names",
        description: "Honorific followed by a word (Mr. Smith, Dr Jones) and \"name:\" form labels",
        patterns: &[
            r"\b(?:mr|mrs|ms|miss|dr|prof)\.?\s+[a-z][a-z'-]+",
            r"\b(?:full\s+)?name\s*:",
        ],
    },
    CategorySpec {
        name: "SSN-like",
        description: "US Social Security number shape: 123-45-6789",
        patterns: &[r"\b\d{3}-\d{2}-\d{4}\b"],
    },
    CategorySpec {
        name: "Email-like",
        description: "Email address shape: local@domain.tld",
        patterns: &[r"\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b"],
    },
    CategorySpec {
        name: "Phone-like",
        description: "Phone number shapes: (555) 123-4567, 555-123-4567, +1 555 123 4567",
        patterns: &[
            r"\(\d{3}\)\s*\d{3}[\s.-]\d{4}\b",
            r"\b\d{3}[.-]\d{3}[.-]\d{4}\b",
            r"\+\d{1,3}[\s.-]\d{2,4}[\s.-]\d{3,4}[\s.-]\d{3,4}\b",
        ],
    },
    CategorySpec {
        name: "Card-like",
        description: "Payment card shape: four groups of four digits",
        patterns: &[r"\b\d{4}[\s-]?\d{4}[\s-]?\d{4}[\s-]?\d{4}\b"],
    },
    CategorySpec {
        name: "Date-like",
        description: "Dates such as birth dates: 01/31/1990, 1990-01-31",
        patterns: &[r"\b\d{1,2}/\d{1,2}/(?:\d{4}|\d{2})\b", r"\b\d{4}-\d{2}-\d{2}\b"],
    },
    CategorySpec {
        name: "Address-like",
        description: "Street address shape: number, up to three words, street suffix",
        patterns: &[
            r"\b\d{1,5}\s+(?:[a-z]+\s+){1,3}(?:street|st|avenue|ave|road|rd|boulevard|blvd|lane|ln|drive|dr|court|ct|way)\b",
        ],
    },
];

/// A built-in category with its sub-patterns compiled.
#[derive(Debug)]
pub struct CompiledCategory {
    pub spec: &'static CategorySpec,
    pub regexes: Vec<Regex>,
}

impl CompiledCategory {
    pub fn name(&self) -> &'static str {
        self.spec.name
    }

    /// Sum of non-overlapping matches of every sub-pattern. A span matched
    /// by two sub-patterns counts once for each.
    pub fn count(&self, text: &str) -> usize {
        self.regexes.iter().map(|re| re.find_iter(text).count()).sum()
    }
}

static COMPILED: Lazy<Vec<CompiledCategory>> = Lazy::new(|| {
    BUILTIN_CATEGORIES
        .iter()
        .map(|spec| CompiledCategory {
            spec,
            regexes: spec
                .patterns
                .iter()
                .map(|p| RegexBuilder::new(p).case_insensitive(true).build().unwrap())
                .collect(),
        })
        .collect()
});

/// The compiled built-in catalogue, in declaration order.
pub fn builtin_categories() -> &'static [CompiledCategory] {
    &COMPILED
}
