//! Rendering module for converting documents to various output formats.

mod json;
mod markdown;
mod options;
pub mod sink;
pub mod streaming;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{OutputFormat, RenderOptions};
pub use sink::{FileSink, NullSink, OutputSink, SliceSink, StreamSink, VecSink};
pub use streaming::{collect_content, RenderEvent, StreamingRenderer};
pub use text::{render_line, to_text};

use crate::error::Result;
use crate::model::Document;

/// Render a document in `format` and write it to `sink`.
///
/// Returns the number of bytes written. The sink is flushed before returning.
pub fn write_to_sink(
    doc: &Document,
    format: OutputFormat,
    options: &RenderOptions,
    sink: &mut dyn OutputSink,
) -> Result<usize> {
    let rendered = render(doc, format, options)?;
    sink.write(rendered.as_bytes())?;
    sink.flush()?;
    log::debug!("wrote {} bytes as {:?}", rendered.len(), format);
    Ok(rendered.len())
}

/// Render a document in the given format.
pub fn render(doc: &Document, format: OutputFormat, options: &RenderOptions) -> Result<String> {
    match format {
        OutputFormat::Text => to_text(doc, options),
        OutputFormat::Markdown => to_markdown(doc, options),
        OutputFormat::Json => to_json(doc, JsonFormat::Pretty),
        OutputFormat::JsonCompact => to_json(doc, JsonFormat::Compact),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DocumentStructure, Line};

    #[test]
    fn test_write_to_sink_reports_length() {
        let doc = Document::with_structure(DocumentStructure::from_iter(vec![
            Line::heading("EDUCATION"),
            Line::text(vec!["MIT"]),
        ]));
        let mut sink = VecSink::new();
        let written =
            write_to_sink(&doc, OutputFormat::Text, &RenderOptions::default(), &mut sink).unwrap();

        assert_eq!(written, sink.len());
        assert_eq!(sink.as_bytes(), b"EDUCATION\nMIT\n");
    }

    #[test]
    fn test_write_to_slice_sink_overflow() {
        let doc = Document::with_structure(DocumentStructure::from_iter(vec![Line::heading(
            "EXPERIENCE",
        )]));
        let mut buf = [0u8; 4];
        let mut sink = SliceSink::new(&mut buf);
        let result = write_to_sink(&doc, OutputFormat::Text, &RenderOptions::default(), &mut sink);
        assert!(result.is_err());
    }
}
