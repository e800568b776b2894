//! Keyword and marker vocabulary for the document structurer.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Vocabulary driving heading and bullet classification.
///
/// All matching is by substring: a word is a heading if it contains any
/// heading keyword anywhere inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureConfig {
    /// Substrings that make a word a standalone heading.
    pub heading_keywords: Vec<String>,

    /// Substrings that make a word a bullet marker.
    pub bullet_markers: Vec<String>,

    /// Substrings that end a bullet body without being headings.
    pub bullet_terminators: Vec<String>,

    /// Compare case-sensitively.
    pub case_sensitive: bool,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            heading_keywords: vec![
                "EDUCATION".to_string(),
                "EXPERIENCE".to_string(),
                "ACHIEVEMENTS".to_string(),
            ],
            bullet_markers: vec!["•".to_string(), "●".to_string()],
            bullet_terminators: vec!["PROFESSIONAL".to_string(), "Frontend".to_string()],
            case_sensitive: true,
        }
    }
}

impl StructureConfig {
    /// Create a config with the default vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config with no vocabulary at all.
    pub fn empty() -> Self {
        Self {
            heading_keywords: Vec::new(),
            bullet_markers: Vec::new(),
            bullet_terminators: Vec::new(),
            case_sensitive: true,
        }
    }

    /// Add a heading keyword.
    pub fn with_heading_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.heading_keywords.push(keyword.into());
        self
    }

    /// Add a bullet marker.
    pub fn with_bullet_marker(mut self, marker: impl Into<String>) -> Self {
        self.bullet_markers.push(marker.into());
        self
    }

    /// Add a word that terminates bullet bodies.
    pub fn with_bullet_terminator(mut self, keyword: impl Into<String>) -> Self {
        self.bullet_terminators.push(keyword.into());
        self
    }

    /// Match keywords and markers ignoring case.
    pub fn case_insensitive(mut self) -> Self {
        self.case_sensitive = false;
        self
    }

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject empty keywords or markers; an empty substring matches every word.
    pub fn validate(&self) -> Result<()> {
        let all = self
            .heading_keywords
            .iter()
            .chain(&self.bullet_markers)
            .chain(&self.bullet_terminators);
        for entry in all {
            if entry.is_empty() {
                return Err(Error::Config(
                    "keywords and markers must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Whether `word` contains a heading keyword.
    pub fn is_heading(&self, word: &str) -> bool {
        self.contains_any(word, &self.heading_keywords)
    }

    /// Whether `word` contains a bullet marker.
    pub fn is_bullet(&self, word: &str) -> bool {
        self.contains_any(word, &self.bullet_markers)
    }

    /// Whether `word` ends a bullet body: another bullet, a heading, or a
    /// terminator keyword.
    pub fn ends_bullet(&self, word: &str) -> bool {
        self.is_bullet(word)
            || self.is_heading(word)
            || self.contains_any(word, &self.bullet_terminators)
    }

    fn contains_any(&self, word: &str, needles: &[String]) -> bool {
        if self.case_sensitive {
            needles.iter().any(|n| word.contains(n.as_str()))
        } else {
            let word = word.to_lowercase();
            needles
                .iter()
                .any(|n| word.contains(n.to_lowercase().as_str()))
        }
    }
}
