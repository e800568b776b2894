//! Decoded text fragments and the run-scoped fragment log.

use serde::{Deserialize, Serialize};

/// Text decoded from one text-showing operator application.
///
/// A `Tj`, `'` or `"` produces one fragment; a `TJ` produces one per
/// string element of its array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    /// Decoded Unicode text
    pub text: String,
    /// 1-indexed page the fragment was shown on
    pub page: u32,
}

impl Fragment {
    /// Create a new fragment.
    pub fn new(text: impl Into<String>, page: u32) -> Self {
        Self {
            text: text.into(),
            page,
        }
    }

    /// Whether this fragment is exactly one space, the word boundary signal.
    pub fn is_word_break(&self) -> bool {
        Self::is_word_break_text(&self.text)
    }

    /// Word boundary test on raw fragment text.
    pub fn is_word_break_text(text: &str) -> bool {
        text == " "
    }
}

/// Ordered fragments emitted over a whole document run.
///
/// Grows monotonically while pages are interpreted and is consumed once
/// when words are assembled.
#[derive(Debug, Clone, Default)]
pub struct FragmentLog {
    fragments: Vec<Fragment>,
}

impl FragmentLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment in emission order.
    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(fragment);
    }

    /// Number of fragments recorded so far.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether no fragment has been recorded.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Borrow the recorded fragments.
    pub fn as_slice(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Iterate over fragment texts in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.fragments.iter().map(|f| f.text.as_str())
    }

    /// Consume the log.
    pub fn into_vec(self) -> Vec<Fragment> {
        self.fragments
    }
}

impl Extend<Fragment> for FragmentLog {
    fn extend<T: IntoIterator<Item = Fragment>>(&mut self, iter: T) {
        self.fragments.extend(iter);
    }
}
