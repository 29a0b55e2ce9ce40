use dorev::DorevError;

/// Error types for dictionary retrieval and the message hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// Invalid or missing configuration
    Config(String),
    /// Dictionary URL rejected before any request was made
    InvalidUrl(String),
    /// Request could not be sent or the body could not be read
    Network(String),
    /// Server answered with a non-OK status
    HttpStatus { url: String, status: u16 },
    /// Reading, writing or deleting the cached dictionary failed
    Cache(String),
    /// Dictionary parsed but has no entries
    EmptyDictionary(String),
    /// Error from the translation core
    Dictionary(DorevError),
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyncError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SyncError::InvalidUrl(msg) => write!(f, "Invalid dictionary URL: {}", msg),
            SyncError::Network(msg) => write!(f, "Network error: {}", msg),
            SyncError::HttpStatus { url, status } => {
                write!(f, "Dictionary request to {} failed with status {}", url, status)
            }
            SyncError::Cache(msg) => write!(f, "Cache error: {}", msg),
            SyncError::EmptyDictionary(url) => write!(f, "Dictionary from {} is empty", url),
            SyncError::Dictionary(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SyncError::Dictionary(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DorevError> for SyncError {
    fn from(err: DorevError) -> Self {
        SyncError::Dictionary(err)
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Network(err.to_string())
    }
}

impl From<std::io::Error> for SyncError {
    fn from(err: std::io::Error) -> Self {
        SyncError::Cache(err.to_string())
    }
}

/// Result type for retrieval and hook operations
pub type SyncResult<T> = Result<T, SyncError>;
