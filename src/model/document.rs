//! Document-level result of one extraction run.

use super::{DocumentStructure, Line};
use crate::parser::Warning;
use serde::{Deserialize, Serialize};

/// A processed PDF document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata
    pub metadata: Metadata,

    /// Classified output lines
    pub structure: DocumentStructure,

    /// Counters collected during the run
    pub stats: ExtractionStats,

    /// Recoverable conditions met while interpreting content streams
    pub warnings: Vec<Warning>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document around an existing structure.
    pub fn with_structure(structure: DocumentStructure) -> Self {
        let stats = ExtractionStats::from_structure(&structure);
        Self {
            structure,
            stats,
            ..Self::default()
        }
    }

    /// Number of pages in the source document.
    pub fn page_count(&self) -> u32 {
        self.metadata.page_count
    }

    /// Iterate over the output lines.
    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.structure.iter()
    }

    /// Check if no text was reconstructed.
    pub fn is_empty(&self) -> bool {
        self.structure.is_empty()
    }

    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Plain text of the whole document, one line per structure line.
    pub fn plain_text(&self) -> String {
        self.structure
            .iter()
            .map(|line| match line {
                Line::Bullet { marker, .. } => {
                    let body = line.body();
                    if body.is_empty() {
                        marker.clone()
                    } else {
                        format!("{} {}", marker, body)
                    }
                }
                _ => line.body(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// PDF version from the file header or trailer
    pub pdf_version: Option<String>,

    /// Total pages in the document
    pub page_count: u32,

    /// Pages whose content streams were interpreted
    pub pages_processed: u32,
}

/// Counters collected during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Decoded fragments
    pub fragments: usize,
    /// Assembled words
    pub words: usize,
    /// Heading lines
    pub headings: usize,
    /// Bullet lines
    pub bullets: usize,
    /// Plain text lines
    pub text_lines: usize,
}

impl ExtractionStats {
    /// Count line kinds in a structure. Fragment and word counts stay zero.
    pub fn from_structure(structure: &DocumentStructure) -> Self {
        let mut stats = Self::default();
        for line in structure {
            match line {
                Line::Heading { .. } => stats.headings += 1,
                Line::Bullet { .. } => stats.bullets += 1,
                Line::Text { .. } => stats.text_lines += 1,
            }
        }
        stats
    }
}
