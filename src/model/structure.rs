//! Structured output lines.

use serde::{Deserialize, Serialize};

/// One classified output line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Line {
    /// A word containing a heading keyword, emitted on its own.
    Heading {
        /// Heading text
        text: String,
    },

    /// A bullet marker word followed by the words of its entry.
    Bullet {
        /// The word that carried the bullet marker
        marker: String,
        /// Body words, possibly empty
        words: Vec<String>,
    },

    /// A run of consecutive plain words.
    Text {
        /// Words in reading order
        words: Vec<String>,
    },
}

impl Line {
    /// Create a heading line.
    pub fn heading(text: impl Into<String>) -> Self {
        Line::Heading { text: text.into() }
    }

    /// Create a bullet line.
    pub fn bullet<S: Into<String>>(marker: impl Into<String>, words: Vec<S>) -> Self {
        Line::Bullet {
            marker: marker.into(),
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a plain text line.
    pub fn text<S: Into<String>>(words: Vec<S>) -> Self {
        Line::Text {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Line::Heading { .. })
    }

    /// Check if this is a bullet entry.
    pub fn is_bullet(&self) -> bool {
        matches!(self, Line::Bullet { .. })
    }

    /// The line's body without markers: heading text, bullet words, or
    /// plain words joined by single spaces.
    pub fn body(&self) -> String {
        match self {
            Line::Heading { text } => text.clone(),
            Line::Bullet { words, .. } | Line::Text { words } => words.join(" "),
        }
    }

    /// Number of words in the line, markers included.
    pub fn word_count(&self) -> usize {
        match self {
            Line::Heading { .. } => 1,
            Line::Bullet { words, .. } => words.len() + 1,
            Line::Text { words } => words.len(),
        }
    }
}

/// Ordered lines produced for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Lines in document order
    pub lines: Vec<Line>,
}

impl DocumentStructure {
    /// Create an empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    /// Check if no line was produced.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }

    /// Headings in order.
    pub fn headings(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().filter_map(|line| match line {
            Line::Heading { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Number of bullet entries.
    pub fn bullet_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_bullet()).count()
    }
}

impl FromIterator<Line> for DocumentStructure {
    fn from_iter<T: IntoIterator<Item = Line>>(iter: T) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DocumentStructure {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_body() {
        assert_eq!(Line::heading("EDUCATION").body(), "EDUCATION");
        assert_eq!(Line::bullet("•", vec!["Task", "one"]).body(), "Task one");
        assert_eq!(Line::text(vec!["Jane", "Doe"]).body(), "Jane Doe");
    }

    #[test]
    fn test_structure_queries() {
        let structure: DocumentStructure = vec![
            Line::text(vec!["Jane"]),
            Line::heading("EXPERIENCE"),
            Line::bullet("•", vec!["Task"]),
            Line::bullet("●", Vec::<String>::new()),
        ]
        .into_iter()
        .collect();

        assert_eq!(structure.len(), 4);
        assert_eq!(structure.headings().collect::<Vec<_>>(), vec!["EXPERIENCE"]);
        assert_eq!(structure.bullet_count(), 2);
    }

    #[test]
    fn test_line_serializes_with_type_tag() {
        let json = serde_json::to_string(&Line::heading("EDUCATION")).unwrap();
        assert_eq!(json, r#"{"type":"heading","text":"EDUCATION"}"#);
    }
}
