//! PDF content-stream interpretation.

pub mod backend;
mod decoder;
mod diagnostics;
mod interpreter;
mod options;
mod pdf_parser;
mod stack;
mod state;

pub use backend::{ContentToken, FontHandle, LopdfBackend, PageId, PdfBackend, PdfValue};
pub use decoder::GlyphDecoder;
pub use diagnostics::{Diagnostics, Warning};
pub use interpreter::ContentInterpreter;
pub use options::{PageSelection, ParseOptions};
pub use pdf_parser::{PageRun, PdfParser};
pub use stack::OperandStack;
pub use state::{TextObject, TextState};
