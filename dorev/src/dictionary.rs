use crate::error::{DorevError, DorevResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Lowercase modern spelling → pre-reform spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dictionary(HashMap<String, String>);

impl Dictionary {
    pub fn new() -> Self {
        Dictionary(HashMap::new())
    }

    pub fn with_word(mut self, modern: &str, old: &str) -> Self {
        self.0.insert(modern.to_owned(), old.to_owned());
        self
    }

    pub fn insert(&mut self, modern: String, old: String) {
        self.0.insert(modern, old);
    }

    pub fn get(&self, modern: &str) -> Option<&str> {
        self.0.get(modern).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse a dictionary from JSON
    ///
    /// The JSON must be a flat object:
    /// ```json
    /// {
    ///     "мир": "мiръ",
    ///     "лес": "лѣсъ"
    /// }
    /// ```
    /// Entries whose value is not a string are skipped.
    ///
    /// # Errors
    /// - Invalid JSON
    /// - Root is not an object
    pub fn from_json_str(content: &str) -> DorevResult<Self> {
        let json: Value = serde_json::from_str(content)?;

        let obj = json.as_object().ok_or_else(|| {
            DorevError::DictionaryFormat("root must be an object".to_string())
        })?;

        let mut dictionary = Dictionary::new();
        for (key, value) in obj {
            match value.as_str() {
                Some(old) => dictionary.insert(key.clone(), old.to_string()),
                None => tracing::warn!(word = %key, "dictionary value is not a string, skipping"),
            }
        }

        Ok(dictionary)
    }

    /// Load a dictionary from a JSON file, see [`Dictionary::from_json_str`].
    pub fn load_from_file(path: &Path) -> DorevResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            DorevError::Io(format!("Failed to read file '{}': {}", path.display(), e))
        })?;

        Self::from_json_str(&content).map_err(|e| match e {
            DorevError::DictionaryFormat(msg) => {
                DorevError::DictionaryFormat(format!("'{}': {}", path.display(), msg))
            }
            other => other,
        })
    }
}

impl From<HashMap<String, String>> for Dictionary {
    fn from(map: HashMap<String, String>) -> Self {
        Dictionary(map)
    }
}

impl FromIterator<(String, String)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Dictionary(iter.into_iter().collect())
    }
}
