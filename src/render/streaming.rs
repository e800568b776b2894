//! Streaming renderer.
//!
//! Yields the document as a sequence of events, one per structure line,
//! so any sink can consume output incrementally.
//!
//! # Example
//!
//! ```no_run
//! use cvparse::{parse_file, render::{RenderEvent, StreamingRenderer}};
//!
//! fn main() -> cvparse::Result<()> {
//!     let doc = parse_file("resume.pdf")?;
//!     for event in StreamingRenderer::new(&doc, Default::default()) {
//!         if let RenderEvent::Line { rendered, .. } = event {
//!             println!("{}", rendered);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

use crate::model::{Document, Line};

use super::text::render_line;
use super::RenderOptions;

/// Events emitted during streaming rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// Rendering has started.
    DocumentStart {
        /// Pages in the source document
        page_count: u32,
        /// Lines that will follow
        line_count: usize,
    },

    /// One classified line.
    Line {
        /// 0-indexed position in the structure
        index: usize,
        /// The structured line
        line: Line,
        /// The line rendered as text
        rendered: String,
    },

    /// Rendering has completed.
    DocumentEnd,
}

impl RenderEvent {
    /// Check if this is a content-bearing event.
    pub fn has_content(&self) -> bool {
        matches!(self, RenderEvent::Line { .. })
    }

    /// Get the rendered text if this is a line event.
    pub fn content(&self) -> Option<&str> {
        match self {
            RenderEvent::Line { rendered, .. } => Some(rendered),
            _ => None,
        }
    }

    /// Check if this is a document boundary event.
    pub fn is_document_boundary(&self) -> bool {
        matches!(
            self,
            RenderEvent::DocumentStart { .. } | RenderEvent::DocumentEnd
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamState {
    Initial,
    InLines { next: usize },
    Done,
}

/// Streaming renderer that yields rendering events as an iterator.
pub struct StreamingRenderer<'a> {
    doc: &'a Document,
    options: RenderOptions,
    state: StreamState,
}

impl<'a> StreamingRenderer<'a> {
    /// Create a new streaming renderer.
    pub fn new(doc: &'a Document, options: RenderOptions) -> Self {
        Self {
            doc,
            options,
            state: StreamState::Initial,
        }
    }

    /// Check if rendering is complete.
    pub fn is_done(&self) -> bool {
        self.state == StreamState::Done
    }
}

impl<'a> Iterator for StreamingRenderer<'a> {
    type Item = RenderEvent;

    fn next(&mut self) -> Option<RenderEvent> {
        match self.state {
            StreamState::Initial => {
                self.state = StreamState::InLines { next: 0 };
                Some(RenderEvent::DocumentStart {
                    page_count: self.doc.page_count(),
                    line_count: self.doc.structure.len(),
                })
            }
            StreamState::InLines { next } => match self.doc.structure.lines.get(next) {
                Some(line) => {
                    self.state = StreamState::InLines { next: next + 1 };
                    Some(RenderEvent::Line {
                        index: next,
                        line: line.clone(),
                        rendered: render_line(line, &self.options),
                    })
                }
                None => {
                    self.state = StreamState::Done;
                    Some(RenderEvent::DocumentEnd)
                }
            },
            StreamState::Done => None,
        }
    }
}

/// Collect all rendered lines into a string, one per line.
pub fn collect_content(renderer: StreamingRenderer<'_>) -> String {
    let mut output = String::new();
    for event in renderer {
        if let Some(content) = event.content() {
            output.push_str(content);
            output.push('\n');
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DocumentStructure;

    #[test]
    fn test_event_sequence() {
        let doc = Document::with_structure(DocumentStructure::from_iter(vec![
            Line::heading("EDUCATION"),
            Line::text(vec!["MIT"]),
        ]));
        let events: Vec<_> = StreamingRenderer::new(&doc, RenderOptions::default()).collect();

        assert_eq!(events.len(), 4);
        assert!(matches!(
            events[0],
            RenderEvent::DocumentStart { line_count: 2, .. }
        ));
        assert_eq!(events[1].content(), Some("EDUCATION"));
        assert_eq!(events[2].content(), Some("MIT"));
        assert_eq!(events[3], RenderEvent::DocumentEnd);
    }

    #[test]
    fn test_renderer_is_fused() {
        let doc = Document::new();
        let mut renderer = StreamingRenderer::new(&doc, RenderOptions::default());
        assert!(renderer.next().is_some());
        assert_eq!(renderer.next(), Some(RenderEvent::DocumentEnd));
        assert!(renderer.is_done());
        assert_eq!(renderer.next(), None);
    }
}
