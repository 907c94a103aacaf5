//! End-to-end behaviour of the text-layer check and the baseline scanner,
//! driven through the public API the CLI uses.

use std::path::PathBuf;

use pdfscreen_core::{
    BUILTIN_CATEGORIES, CategoryKind, ExtractionResult, ScanOutcome, collect_custom_terms,
    parse_terms, scan_baseline, scan_extraction,
};

fn extraction(items: usize, text: &str) -> ExtractionResult {
    ExtractionResult {
        file_path: PathBuf::from("/docs/input.pdf"),
        num_pages: 1,
        total_text_items: items,
        text: text.to_string(),
    }
}

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn empty_document_has_no_text_layer() {
    let outcome = scan_extraction(extraction(0, ""), &[]);
    assert!(matches!(outcome, ScanOutcome::NoTextLayer { .. }));
}

#[test]
fn zero_items_with_text_has_no_text_layer() {
    let outcome = scan_extraction(extraction(0, "Mr. Smith"), &owned(&["Smith"]));
    assert!(outcome.counts().is_none());
}

#[test]
fn email_and_ssn_detected() {
    let outcome = scan_extraction(
        extraction(2, "Contact: jane@example.com, SSN 123-45-6789"),
        &[],
    );
    let counts = outcome.counts().expect("text layer present");
    assert!(counts.get("Email-like").unwrap() >= 1);
    assert!(counts.get("SSN-like").unwrap() >= 1);
    assert_eq!(counts.len(), BUILTIN_CATEGORIES.len());
}

#[test]
fn custom_terms_reported_independently() {
    let outcome = scan_extraction(extraction(1, "Alice met Bob"), &owned(&["Alice", "Bob"]));
    let counts = outcome.counts().unwrap();
    assert_eq!(counts.get("Alice"), Some(1));
    assert_eq!(counts.get("Bob"), Some(1));
    for spec in BUILTIN_CATEGORIES {
        assert!(counts.get(spec.name).is_some());
    }
}

#[test]
fn one_entry_per_term_in_supplied_order() {
    let inline = owned(&["Zulu", "alpha"]);
    let file_terms = parse_terms("mike\n\nalpha\n");
    let terms = collect_custom_terms(&inline, file_terms);

    let counts = scan_baseline("alpha ALPHA zulu", &terms);
    let custom: Vec<_> = counts
        .iter()
        .filter(|e| e.kind == CategoryKind::Custom)
        .map(|e| (e.name.as_str(), e.count))
        .collect();
    assert_eq!(
        custom,
        vec![("Zulu", 1), ("alpha", 2), ("mike", 0), ("alpha", 2)]
    );
}

#[test]
fn scanning_is_idempotent() {
    let text = "Dr. Who, 555-123-4567, who@tardis.org, 4111 1111 1111 1111";
    let terms = owned(&["tardis", "Who"]);
    assert_eq!(scan_baseline(text, &terms), scan_baseline(text, &terms));
}

#[test]
fn matching_ignores_case() {
    let terms = owned(&["John Doe"]);
    let upper = scan_baseline("JOHN DOE", &terms);
    let lower = scan_baseline("john doe", &terms);
    assert_eq!(upper.get("John Doe"), Some(1));
    assert_eq!(upper, lower);
}

#[test]
fn counts_serialize_as_ordered_array() {
    let counts = scan_baseline("Alice", &owned(&["Alice"]));
    let json = serde_json::to_value(&counts).unwrap();
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), BUILTIN_CATEGORIES.len() + 1);
    assert_eq!(arr[0]["name"], "Names");
    assert_eq!(arr.last().unwrap()["name"], "Alice");
    assert_eq!(arr.last().unwrap()["kind"], "custom");
    assert_eq!(arr.last().unwrap()["count"], 1);
}
