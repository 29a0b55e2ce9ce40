/// Errors raised by the translation core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DorevError {
    /// No dictionary, or an empty one, was supplied for a translation
    MissingDictionary,
    /// Dictionary JSON is malformed or not a flat object
    DictionaryFormat(String),
    /// Reading a dictionary file failed
    Io(String),
}

impl std::fmt::Display for DorevError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DorevError::MissingDictionary => write!(f, "Dictionary is not initialized"),
            DorevError::DictionaryFormat(msg) => write!(f, "Invalid dictionary: {}", msg),
            DorevError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl std::error::Error for DorevError {}

impl From<serde_json::Error> for DorevError {
    fn from(err: serde_json::Error) -> Self {
        DorevError::DictionaryFormat(err.to_string())
    }
}

/// Result type for core operations
pub type DorevResult<T> = Result<T, DorevError>;
