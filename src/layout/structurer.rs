//! Classification of the word sequence into headings, bullet entries and
//! plain text runs.
//!
//! A single left-to-right pass with a cursor:
//!
//! 1. A word containing a heading keyword becomes its own heading line.
//! 2. A word containing a bullet marker opens a bullet entry. Following
//!    words join its body until a word that is itself a marker, a heading,
//!    or a terminator keyword; that word is left for the outer pass.
//! 3. Anything else extends the current plain text run.
//!
//! Matching is by substring, so a keyword embedded in a longer word still
//! classifies it.

use super::config::StructureConfig;
use crate::model::{DocumentStructure, Line, Word};

/// Classifies words into [`Line`]s.
#[derive(Debug, Clone, Default)]
pub struct DocumentStructurer {
    config: StructureConfig,
}

impl DocumentStructurer {
    pub fn new(config: StructureConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StructureConfig {
        &self.config
    }

    /// Lazily classify `words`.
    pub fn lines<'a>(&'a self, words: &'a [Word]) -> Lines<'a> {
        Lines {
            config: &self.config,
            words,
            cursor: 0,
        }
    }

    /// Classify `words` into a complete structure.
    pub fn structure(&self, words: &[Word]) -> DocumentStructure {
        self.lines(words).collect()
    }
}

/// Iterator over classified lines. See [`DocumentStructurer::lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    config: &'a StructureConfig,
    words: &'a [Word],
    cursor: usize,
}

impl<'a> Lines<'a> {
    fn word(&self, index: usize) -> Option<&'a str> {
        self.words.get(index).map(Word::as_str)
    }

    fn bullet(&mut self, marker: &'a str) -> Line {
        let mut body = Vec::new();
        while let Some(word) = self.word(self.cursor) {
            if self.config.ends_bullet(word) {
                break;
            }
            body.push(word.to_string());
            self.cursor += 1;
        }
        Line::Bullet {
            marker: marker.to_string(),
            words: body,
        }
    }

    fn text_run(&mut self) -> Line {
        let mut run = Vec::new();
        while let Some(word) = self.word(self.cursor) {
            if self.config.is_heading(word) || self.config.is_bullet(word) {
                break;
            }
            run.push(word.to_string());
            self.cursor += 1;
        }
        Line::Text { words: run }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let word = self.word(self.cursor)?;

        if self.config.is_heading(word) {
            self.cursor += 1;
            return Some(Line::heading(word));
        }

        if self.config.is_bullet(word) {
            self.cursor += 1;
            return Some(self.bullet(word));
        }

        Some(self.text_run())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().filter_map(|t| Word::new(*t)).collect()
    }

    fn structure(texts: &[&str]) -> Vec<Line> {
        DocumentStructurer::default()
            .structure(&words(texts))
            .lines
    }

    #[test]
    fn test_bullets_stop_at_next_marker_and_heading() {
        let lines = structure(&["•", "Task", "one", "•", "Task", "two", "EXPERIENCE", "Acme"]);
        assert_eq!(
            lines,
            vec![
                Line::bullet("•", vec!["Task", "one"]),
                Line::bullet("•", vec!["Task", "two"]),
                Line::heading("EXPERIENCE"),
                Line::text(vec!["Acme"]),
            ]
        );
    }

    #[test]
    fn test_plain_run_closed_by_heading() {
        let lines = structure(&["Jane", "Doe", "EDUCATION", "MIT"]);
        assert_eq!(
            lines,
            vec![
                Line::text(vec!["Jane", "Doe"]),
                Line::heading("EDUCATION"),
                Line::text(vec!["MIT"]),
            ]
        );
    }

    #[test]
    fn test_bullet_at_end_has_no_body() {
        let lines = structure(&["Intro", "●"]);
        assert_eq!(
            lines,
            vec![
                Line::text(vec!["Intro"]),
                Line::bullet("●", Vec::<String>::new()),
            ]
        );
    }

    #[test]
    fn test_bullet_body_runs_to_end() {
        let lines = structure(&["•", "Shipped", "v2"]);
        assert_eq!(lines, vec![Line::bullet("•", vec!["Shipped", "v2"])]);
    }

    #[test]
    fn test_terminator_ends_bullet_but_is_plain_text() {
        let lines = structure(&["•", "Led", "team", "PROFESSIONAL", "SUMMARY"]);
        assert_eq!(
            lines,
            vec![
                Line::bullet("•", vec!["Led", "team"]),
                Line::text(vec!["PROFESSIONAL", "SUMMARY"]),
            ]
        );
    }

    #[test]
    fn test_substring_match_classifies_longer_word() {
        let lines = structure(&["WORKEXPERIENCE:", "•Built", "things"]);
        assert_eq!(
            lines,
            vec![
                Line::heading("WORKEXPERIENCE:"),
                Line::bullet("•Built", vec!["things"]),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(structure(&[]).is_empty());
    }

    #[test]
    fn test_lines_is_lazy() {
        let words = words(&["EDUCATION", "x", "•", "y"]);
        let structurer = DocumentStructurer::default();
        let mut lines = structurer.lines(&words);
        assert_eq!(lines.next(), Some(Line::heading("EDUCATION")));
        assert_eq!(lines.next(), Some(Line::text(vec!["x"])));
        assert_eq!(lines.next(), Some(Line::bullet("•", vec!["y"])));
        assert_eq!(lines.next(), None);
    }
}
