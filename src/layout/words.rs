//! Word assembly from fragments.
//!
//! A fragment consisting of exactly one space is the only word boundary.
//! Documents that batch several words into one show operator, or express
//! spacing through `TJ` adjustments instead of space glyphs, come out with
//! merged words.

use crate::model::{Fragment, Word};

/// Accumulates fragment text until a single-space fragment closes a word.
#[derive(Debug, Clone, Default)]
pub struct WordAssembler {
    buffer: String,
}

impl WordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one fragment's text. Returns the word it completes, if any.
    pub fn push(&mut self, text: &str) -> Option<Word> {
        if Fragment::is_word_break_text(text) {
            self.take_word()
        } else {
            self.buffer.push_str(text);
            None
        }
    }

    /// Feed one fragment. Returns the word it completes, if any.
    pub fn push_fragment(&mut self, fragment: &Fragment) -> Option<Word> {
        if fragment.is_word_break() {
            self.take_word()
        } else {
            self.buffer.push_str(&fragment.text);
            None
        }
    }

    fn take_word(&mut self) -> Option<Word> {
        Word::new(std::mem::take(&mut self.buffer))
    }

    /// Flush the trailing word at end of input.
    pub fn finish(self) -> Option<Word> {
        Word::new(self.buffer)
    }

    /// Assemble all words from an ordered fragment sequence.
    pub fn assemble<'a, I>(texts: I) -> Vec<Word>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut assembler = Self::new();
        let mut words: Vec<Word> = texts
            .into_iter()
            .filter_map(|text| assembler.push(text))
            .collect();
        words.extend(assembler.finish());
        words
    }

    /// Assemble words from fragments.
    pub fn assemble_fragments(fragments: &[Fragment]) -> Vec<Word> {
        let mut assembler = Self::new();
        let mut words: Vec<Word> = fragments
            .iter()
            .filter_map(|fragment| assembler.push_fragment(fragment))
            .collect();
        words.extend(assembler.finish());
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<String> {
        WordAssembler::assemble(texts.iter().copied())
            .into_iter()
            .map(Word::into_string)
            .collect()
    }

    #[test]
    fn test_letters_into_words() {
        assert_eq!(
            words(&["H", "e", "l", "l", "o", " ", "W", "o", "r", "l", "d"]),
            vec!["Hello", "World"]
        );
    }

    #[test]
    fn test_consecutive_spaces_produce_no_empty_words() {
        assert_eq!(words(&[" ", "a", " ", " ", "b", " "]), vec!["a", "b"]);
    }

    #[test]
    fn test_multi_char_fragments_are_not_split() {
        assert_eq!(words(&["Hello World", " ", "x"]), vec!["Hello World", "x"]);
        assert_eq!(words(&["a", "  ", "b"]), vec!["a  b"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(words(&[]).is_empty());
        assert!(words(&[" "]).is_empty());
        assert!(words(&[""]).is_empty());
    }

    #[test]
    fn test_push_and_finish() {
        let mut assembler = WordAssembler::new();
        assert_eq!(assembler.push("a"), None);
        assert_eq!(assembler.push(" "), Word::new("a"));
        assert_eq!(assembler.push("b"), None);
        assert_eq!(assembler.finish(), Word::new("b"));
    }

    #[test]
    fn test_assemble_fragments_splits_on_word_breaks() {
        let fragments = [
            Fragment::new("Jane", 1),
            Fragment::new(" ", 1),
            Fragment::new("\u{00A0}", 1),
            Fragment::new("D", 2),
            Fragment::new("oe", 2),
            Fragment::new(" ", 2),
        ];
        let words: Vec<String> = WordAssembler::assemble_fragments(&fragments)
            .into_iter()
            .map(Word::into_string)
            .collect();
        assert_eq!(words, vec!["Jane", "\u{00A0}Doe"]);
    }
}
