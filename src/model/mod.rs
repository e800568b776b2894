//! Data model for extracted content.
//!
//! Fragments flow into words, words into classified lines. The
//! [`Document`] bundles the final lines with run metadata, statistics,
//! and warnings.

mod document;
mod fragment;
mod structure;
mod word;

pub use document::{Document, ExtractionStats, Metadata};
pub use fragment::{Fragment, FragmentLog};
pub use structure::{DocumentStructure, Line};
pub use word::Word;
