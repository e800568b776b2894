//! Words assembled from fragments.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A maximal run of fragments between single-space fragments. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Create a word, returning `None` for empty text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    /// The word's text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the word.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for Word {
    type Error = &'static str;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Word::new(text).ok_or("a word cannot be empty")
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_rejected() {
        assert!(Word::new("").is_none());
        assert_eq!(Word::new("Hello").unwrap().as_str(), "Hello");
    }

    #[test]
    fn test_deserialize_rejects_empty_word() {
        assert!(serde_json::from_str::<Word>("\"\"").is_err());

        let word: Word = serde_json::from_str("\"Rust\"").unwrap();
        assert_eq!(word.as_str(), "Rust");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"Rust\"");
    }
}
