//! Dictionary lifecycle: memory, then disk cache, then download.
//!
//! The store owns the only copy of the loaded dictionary and hands out shared
//! references to it, so translations never see a half-replaced dictionary.

use crate::error::{SyncError, SyncResult};
use crate::settings::{DEFAULT_DICT_ADDRESS, Settings, validate_dictionary_url};
use crate::source::DictionarySource;
use dorev::Dictionary;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};

pub struct DictionaryStore {
    settings: Settings,
    source: Box<dyn DictionarySource>,
    dictionary: Option<Dictionary>,
}

impl DictionaryStore {
    pub fn new(settings: Settings, source: Box<dyn DictionarySource>) -> Self {
        Self {
            settings,
            source,
            dictionary: None,
        }
    }

    /// Start with an already loaded dictionary. Empty dictionaries are
    /// ignored so the next [`ensure_loaded`](Self::ensure_loaded) still
    /// goes looking for a real one.
    pub fn with_dictionary(mut self, dictionary: Dictionary) -> Self {
        if !dictionary.is_empty() {
            self.dictionary = Some(dictionary);
        }
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.settings.enabled = enabled;
    }

    /// The dictionary currently held in memory, if any
    pub fn dictionary(&self) -> Option<&Dictionary> {
        self.dictionary.as_ref()
    }

    pub fn source_name(&self) -> &str {
        self.source.source_name()
    }

    /// Make sure a dictionary is in memory and return it.
    ///
    /// A cached copy is preferred over a download. A cache file that cannot be
    /// read, does not parse, or is empty is ignored.
    pub async fn ensure_loaded(&mut self) -> SyncResult<&Dictionary> {
        if self.dictionary.is_none() {
            let url = self.settings.dictionary_url.clone();
            let loaded = match self.read_cache(&url).await {
                Some(cached) => cached,
                None => self.fetch_dictionary(&url).await?,
            };
            self.dictionary = Some(loaded);
        }

        self.loaded()
    }

    /// Download the dictionary for the configured URL, replacing whatever is
    /// in memory.
    pub async fn download(&mut self) -> SyncResult<&Dictionary> {
        let url = self.settings.dictionary_url.clone();
        let loaded = self.fetch_dictionary(&url).await?;
        self.dictionary = Some(loaded);
        self.loaded()
    }

    /// Drop the cached and in-memory copies and download again.
    pub async fn refresh(&mut self) -> SyncResult<&Dictionary> {
        let url = self.settings.dictionary_url.clone();
        remove_file_if_exists(&self.settings.cache_path(&url)).await?;
        self.dictionary = None;
        info!(%url, "refreshing dictionary");
        self.download().await
    }

    /// Switch to a new dictionary URL.
    ///
    /// The URL is validated and probed first. If either step fails the
    /// setting is reset to [`DEFAULT_DICT_ADDRESS`] and the error returned.
    /// On success the default dictionary's cache file is removed and the new
    /// dictionary downloaded.
    pub async fn change_url(&mut self, new_url: &str) -> SyncResult<&Dictionary> {
        let new_url = new_url.trim();

        if let Err(e) = self.check_url(new_url).await {
            warn!(url = %new_url, error = %e, "rejected dictionary URL, falling back to default");
            if self.settings.dictionary_url != DEFAULT_DICT_ADDRESS {
                self.settings.dictionary_url = DEFAULT_DICT_ADDRESS.to_string();
                self.dictionary = None;
            }
            return Err(e);
        }

        remove_file_if_exists(&self.settings.cache_path(DEFAULT_DICT_ADDRESS)).await?;

        self.settings.dictionary_url = new_url.to_string();
        self.dictionary = None;
        info!(url = %new_url, "dictionary URL changed");
        self.download().await
    }

    async fn check_url(&self, url: &str) -> SyncResult<()> {
        validate_dictionary_url(url)?;
        self.source.probe(url).await
    }

    fn loaded(&self) -> SyncResult<&Dictionary> {
        self.dictionary
            .as_ref()
            .ok_or_else(|| SyncError::EmptyDictionary(self.settings.dictionary_url.clone()))
    }

    async fn read_cache(&self, url: &str) -> Option<Dictionary> {
        let path = self.settings.cache_path(url);
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot read cached dictionary");
                return None;
            }
        };

        match Dictionary::from_json_str(&content) {
            Ok(dictionary) if !dictionary.is_empty() => {
                info!(path = %path.display(), words = dictionary.len(), "loaded cached dictionary");
                Some(dictionary)
            }
            Ok(_) => {
                warn!(path = %path.display(), "cached dictionary is empty, ignoring");
                None
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cached dictionary is corrupt, ignoring");
                None
            }
        }
    }

    async fn fetch_dictionary(&self, url: &str) -> SyncResult<Dictionary> {
        let body = self.source.fetch(url).await?;
        let dictionary = Dictionary::from_json_str(&body)?;
        if dictionary.is_empty() {
            return Err(SyncError::EmptyDictionary(url.to_string()));
        }

        info!(
            %url,
            source = self.source.source_name(),
            words = dictionary.len(),
            "downloaded dictionary"
        );

        let path = self.settings.cache_path(url);
        if let Err(e) = write_cache(&path, &body).await {
            warn!(path = %path.display(), error = %e, "cannot cache dictionary");
        }

        Ok(dictionary)
    }
}

async fn write_cache(path: &Path, body: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, body).await
}

async fn remove_file_if_exists(path: &Path) -> SyncResult<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(SyncError::Cache(format!(
            "Failed to delete '{}': {}",
            path.display(),
            e
        ))),
    }
}
