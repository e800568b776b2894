//! # cvparse
//!
//! Text and structure extraction from PDF résumés.
//!
//! The crate interprets the text operators of each page's content stream,
//! decodes shown strings through the active font, regroups the resulting
//! fragments into words, and classifies the words into headings, bullet
//! items, and plain text lines.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cvparse::{parse_file, render};
//!
//! fn main() -> cvparse::Result<()> {
//!     let doc = parse_file("resume.pdf")?;
//!
//!     for line in doc.lines() {
//!         println!("{:?}", line);
//!     }
//!
//!     let markdown = render::to_markdown(&doc, &render::RenderOptions::default())?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Interpreter**: operand stack, `BT`/`ET` text state, font selection
//! - **Glyph decoder**: string bytes to Unicode through the active font
//! - **Word assembler**: single-space fragments separate words
//! - **Structurer**: keyword headings, bullet runs, plain text
//!
//! Any PDF reader can drive the pipeline by implementing
//! [`parser::PdfBackend`]; [`parser::LopdfBackend`] is the default.

pub mod detect;
pub mod error;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{is_pdf_bytes, sniff_bytes, sniff_path};
pub use error::{Error, Result};
pub use layout::{DocumentStructurer, StructureConfig, WordAssembler};
pub use model::{
    Document, DocumentStructure, ExtractionStats, Fragment, FragmentLog, Line, Metadata, Word,
};
pub use parser::{PageSelection, ParseOptions, PdfBackend, PdfParser, Warning};
pub use render::{JsonFormat, OutputFormat, OutputSink, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse a PDF file and return a structured document.
///
/// # Example
///
/// ```no_run
/// use cvparse::parse_file;
///
/// let doc = parse_file("resume.pdf").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = PdfParser::open(path)?;
    parser.parse()
}

/// Parse a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use cvparse::{parse_file_with_options, PageSelection, ParseOptions};
///
/// let options = ParseOptions::new()
///     .with_pages(PageSelection::parse("1-2").unwrap())
///     .with_normalization(true);
/// let doc = parse_file_with_options("resume.pdf", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = PdfParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a PDF from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = PdfParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a PDF from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = PdfParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a PDF from a reader.
///
/// # Example
///
/// ```no_run
/// use cvparse::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.pdf").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = PdfParser::from_reader(reader)?;
    parser.parse()
}

/// Run the pipeline over a caller-supplied backend.
pub fn parse_with_backend<B: PdfBackend>(backend: B, options: ParseOptions) -> Result<Document> {
    PdfParser::with_backend(backend, options).parse()
}

/// Extract plain text from a PDF file, one line per structure line.
///
/// # Example
///
/// ```no_run
/// use cvparse::extract_text;
///
/// let text = extract_text("resume.pdf").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a PDF to Markdown.
///
/// # Example
///
/// ```no_run
/// use cvparse::to_markdown;
///
/// let markdown = to_markdown("resume.pdf").unwrap();
/// std::fs::write("resume.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}
