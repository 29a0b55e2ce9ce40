//! Where dictionaries come from
//!
//! The store only needs the raw JSON body for a URL, so retrieval sits behind
//! the [`DictionarySource`] trait. [`HttpSource`] downloads over HTTP(S);
//! tests use [`crate::mock::MockSource`].

use crate::error::{SyncError, SyncResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

#[async_trait]
pub trait DictionarySource: Send + Sync {
    /// Fetch the raw dictionary body from `url`.
    ///
    /// Anything but `200 OK` is an error.
    async fn fetch(&self, url: &str) -> SyncResult<String>;

    /// Check that `url` is reachable before switching to it.
    async fn probe(&self, url: &str) -> SyncResult<()> {
        self.fetch(url).await.map(|_| ())
    }

    /// Name used in logs
    fn source_name(&self) -> &str;
}

/// Downloads dictionaries with a shared reqwest client.
#[derive(Clone)]
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> SyncResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .map_err(|e| SyncError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> SyncResult<reqwest::Response> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SyncError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl DictionarySource for HttpSource {
    async fn fetch(&self, url: &str) -> SyncResult<String> {
        let body = self.get(url).await?.text().await?;
        tracing::debug!(url, bytes = body.len(), "downloaded dictionary");
        Ok(body)
    }

    async fn probe(&self, url: &str) -> SyncResult<()> {
        self.get(url).await.map(|_| ())
    }

    fn source_name(&self) -> &str {
        "HTTP"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode as AxumStatus, routing::get};

    async fn serve() -> String {
        let app = Router::new()
            .route("/dict.json", get(|| async { r#"{"мир": "мiръ"}"# }))
            .route(
                "/broken.json",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let base = serve().await;
        let source = HttpSource::new().unwrap();
        let body = source.fetch(&format!("{}/dict.json", base)).await.unwrap();
        assert_eq!(body, r#"{"мир": "мiръ"}"#);
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let base = serve().await;
        let source = HttpSource::new().unwrap();
        let url = format!("{}/missing.json", base);
        let err = source.fetch(&url).await.unwrap_err();
        assert_eq!(err, SyncError::HttpStatus { url, status: 404 });
    }

    #[tokio::test]
    async fn test_probe_server_error() {
        let base = serve().await;
        let source = HttpSource::new().unwrap();
        let err = source
            .probe(&format!("{}/broken.json", base))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::HttpStatus { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpSource::new().unwrap();
        let err = source
            .fetch(&format!("http://{}/dict.json", addr))
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::Network(_)));
    }
}
