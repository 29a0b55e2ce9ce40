//! Mock dictionary source for testing
//!
//! Serves fixed bodies without network access and counts fetches, so tests
//! can tell a cache hit from a download.
//!
//! ```ignore
//! let source = MockSource::new(MockMode::Fixed(r#"{"мир": "мiръ"}"#.to_string()));
//! let body = source.fetch("https://example.com/d.json").await?;
//! ```

use crate::error::{SyncError, SyncResult};
use crate::source::DictionarySource;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone)]
pub enum MockMode {
    /// Same body for every URL
    Fixed(String),
    /// Body per URL; unknown URLs answer 404
    Mappings(HashMap<String, String>),
    /// Every request fails with a network error
    Error(String),
}

/// The fetch counter is shared between clones, so a test can keep one clone
/// after handing the other to a store.
#[derive(Debug, Clone)]
pub struct MockSource {
    mode: MockMode,
    fetches: Arc<AtomicUsize>,
}

impl MockSource {
    pub fn new(mode: MockMode) -> Self {
        Self {
            mode,
            fetches: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of `fetch` calls so far (probes are not counted)
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn respond(&self, url: &str) -> SyncResult<String> {
        match &self.mode {
            MockMode::Fixed(body) => Ok(body.clone()),
            MockMode::Mappings(map) => map.get(url).cloned().ok_or(SyncError::HttpStatus {
                url: url.to_string(),
                status: 404,
            }),
            MockMode::Error(msg) => Err(SyncError::Network(msg.clone())),
        }
    }
}

#[async_trait]
impl DictionarySource for MockSource {
    async fn fetch(&self, url: &str) -> SyncResult<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.respond(url)
    }

    async fn probe(&self, url: &str) -> SyncResult<()> {
        self.respond(url).map(|_| ())
    }

    fn source_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed() {
        let mock = MockSource::new(MockMode::Fixed("{}".to_string()));
        assert_eq!(mock.fetch("a").await.unwrap(), "{}");
        assert_eq!(mock.fetch("b").await.unwrap(), "{}");
        assert_eq!(mock.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_mappings() {
        let mut map = HashMap::new();
        map.insert("https://x/a.json".to_string(), "{}".to_string());
        let mock = MockSource::new(MockMode::Mappings(map));

        assert!(mock.fetch("https://x/a.json").await.is_ok());
        assert!(matches!(
            mock.fetch("https://x/b.json").await,
            Err(SyncError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn test_probe_is_not_counted() {
        let mock = MockSource::new(MockMode::Error("offline".to_string()));
        assert!(mock.probe("a").await.is_err());
        assert_eq!(mock.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_clones_share_counter() {
        let mock = MockSource::new(MockMode::Fixed("{}".to_string()));
        let other = mock.clone();
        other.fetch("a").await.unwrap();
        assert_eq!(mock.fetch_count(), 1);
    }
}
