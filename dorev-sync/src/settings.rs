//! Translator settings
//!
//! Defaults match the hosted dictionary. [`Settings::from_env`] lets the CLI
//! and the web server override them with `DOREV_ENABLED`, `DOREV_DICT_URL`
//! and `DOREV_CACHE_DIR`.

use crate::error::{SyncError, SyncResult};
use reqwest::Url;
use std::path::PathBuf;

/// Dictionary used when no other URL is configured
pub const DEFAULT_DICT_ADDRESS: &str = "https://pub.files.delroms.ru/pre_rev_dict.json";

/// Cache file name for URLs without a usable last path segment
const FALLBACK_CACHE_FILE: &str = "dictionary.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether outgoing messages are rewritten at all
    pub enabled: bool,
    /// Direct link to a flat JSON dictionary
    pub dictionary_url: String,
    /// Directory holding downloaded dictionaries
    pub cache_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            enabled: true,
            dictionary_url: DEFAULT_DICT_ADDRESS.to_string(),
            cache_dir: std::env::temp_dir().join("dorev"),
        }
    }
}

impl Settings {
    pub fn from_env() -> SyncResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup. Blank values count
    /// as unset.
    pub fn from_lookup<F>(lookup: F) -> SyncResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(raw) = get("DOREV_ENABLED") {
            settings.enabled = parse_bool(&raw).ok_or_else(|| {
                SyncError::Config(format!("DOREV_ENABLED must be a boolean, got '{}'", raw))
            })?;
        }
        if let Some(url) = get("DOREV_DICT_URL") {
            settings.dictionary_url = url.trim().to_string();
        }
        if let Some(dir) = get("DOREV_CACHE_DIR") {
            settings.cache_dir = PathBuf::from(dir);
        }

        Ok(settings)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_dictionary_url(mut self, url: &str) -> Self {
        self.dictionary_url = url.to_string();
        self
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = dir.into();
        self
    }

    /// Cache location for the dictionary downloaded from `url`
    pub fn cache_path(&self, url: &str) -> PathBuf {
        self.cache_dir.join(cache_file_name(url))
    }
}

fn cache_file_name(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|parsed| {
            parsed
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .map(str::to_string)
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| FALLBACK_CACHE_FILE.to_string())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Check that `url` is a direct link to a JSON file.
///
/// The URL must end in `.json` and have both a scheme and a host.
pub fn validate_dictionary_url(url: &str) -> SyncResult<Url> {
    if !url.ends_with(".json") {
        return Err(SyncError::InvalidUrl(format!("{} is not a json file", url)));
    }

    let parsed = Url::parse(url).map_err(|e| SyncError::InvalidUrl(format!("{}: {}", url, e)))?;

    if parsed.scheme().is_empty() || parsed.host_str().is_none_or(str::is_empty) {
        return Err(SyncError::InvalidUrl(format!("{} has no host", url)));
    }

    Ok(parsed)
}
