//! Plain text rendering.

use crate::error::Result;
use crate::model::{Document, Line};

use super::RenderOptions;

/// Convert a document to plain text, one output line per structure line.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let mut output = String::new();
    for line in doc.lines() {
        output.push_str(&render_line(line, options));
        output.push('\n');
        if line.is_heading() && options.blank_line_after_heading {
            output.push('\n');
        }
    }
    Ok(output)
}

/// Render a single line as text, without a trailing newline.
pub fn render_line(line: &Line, options: &RenderOptions) -> String {
    match line {
        Line::Heading { text } => text.clone(),
        Line::Bullet { marker, words } => {
            let marker = match options.list_marker {
                Some(c) => c.to_string(),
                None => marker.clone(),
            };
            if words.is_empty() {
                marker
            } else {
                format!("{} {}", marker, words.join(" "))
            }
        }
        Line::Text { words } => words.join(" "),
    }
}
