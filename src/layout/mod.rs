//! Text reconstruction: fragments to words, words to classified lines.

mod config;
mod structurer;
mod words;

pub use config::StructureConfig;
pub use structurer::{DocumentStructurer, Lines};
pub use words::WordAssembler;
