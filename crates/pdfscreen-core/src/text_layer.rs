use crate::ExtractionResult;

/// Whether an extraction carries usable, machine-readable text.
///
/// Both signals must agree: the backend has to report at least one text
/// item, and the concatenated text has to contain something other than
/// whitespace. Documents whose items extract to blank strings, and
/// non-empty text paired with a zero item count, are both treated as having
/// no text layer.
pub fn has_text_layer(result: &ExtractionResult) -> bool {
    result.total_text_items > 0 && !result.text.trim().is_empty()
}
