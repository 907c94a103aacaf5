use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub terms: Option<TermsConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermsConfig {
    /// Terms file used when `--add-terms-file` is not given.
    pub terms_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub no_color: Option<bool>,
    /// Default report format: `text`, `json` or `markdown`.
    pub format: Option<String>,
}

impl ConfigFile {
    pub fn terms_file(&self) -> Option<PathBuf> {
        self.terms
            .as_ref()
            .and_then(|t| t.terms_file.as_deref())
            .map(PathBuf::from)
    }

    pub fn no_color(&self) -> bool {
        self.display
            .as_ref()
            .and_then(|d| d.no_color)
            .unwrap_or(false)
    }

    pub fn format(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.format.as_deref())
    }
}

/// Platform config directory path: `<config_dir>/pdfscreen/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pdfscreen").join("config.toml"))
}

/// Load config by cascading CWD `.pdfscreen.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(".pdfscreen.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed; parse failures are logged.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => {
            tracing::debug!(path = %path.display(), "loaded config file");
            Some(config)
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring malformed config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        terms: Some(TermsConfig {
            terms_file: overlay
                .terms
                .as_ref()
                .and_then(|t| t.terms_file.clone())
                .or_else(|| base.terms.as_ref().and_then(|t| t.terms_file.clone())),
        }),
        display: Some(DisplayConfig {
            no_color: overlay
                .display
                .as_ref()
                .and_then(|d| d.no_color)
                .or_else(|| base.display.as_ref().and_then(|d| d.no_color)),
            format: overlay
                .display
                .as_ref()
                .and_then(|d| d.format.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.format.clone())),
        }),
    }
}
