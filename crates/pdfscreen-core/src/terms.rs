use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TermsError {
    #[error("failed to read terms file {}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a newline-delimited terms list. `\n` and `\r\n` both end a line;
/// surrounding whitespace is stripped and blank lines are dropped.
pub fn parse_terms(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read and parse a terms file. A missing or unreadable file is an error,
/// never an empty list.
pub async fn load_terms_file(path: &Path) -> Result<Vec<String>, TermsError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| TermsError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
    let terms = parse_terms(&raw);
    tracing::debug!(path = %path.display(), terms = terms.len(), "loaded terms file");
    Ok(terms)
}

/// Combine inline terms with file terms: inline first, each group in its
/// original order. Inline terms get the same trimming as file lines.
pub fn collect_custom_terms(inline: &[String], file_terms: Vec<String>) -> Vec<String> {
    inline
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .chain(file_terms)
        .collect()
}
