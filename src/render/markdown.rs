//! Markdown rendering.

use crate::error::Result;
use crate::model::{Document, Line};

use super::RenderOptions;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    Ok(renderer.render(doc))
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut output = String::new();
        let mut in_list = false;

        for line in doc.lines() {
            if in_list && !line.is_bullet() {
                output.push('\n');
            }
            in_list = line.is_bullet();
            output.push_str(&self.render_line(line));
        }

        let trimmed = output.trim_end();
        if trimmed.is_empty() {
            String::new()
        } else {
            format!("{}\n", trimmed)
        }
    }

    /// Render a single line including its trailing newline(s).
    pub fn render_line(&self, line: &Line) -> String {
        match line {
            Line::Heading { text } => {
                let prefix = "#".repeat(self.options.heading_level as usize);
                format!("{} {}\n\n", prefix, self.escape(text))
            }
            Line::Bullet { words, .. } => {
                let marker = self.options.list_marker.unwrap_or('-');
                if words.is_empty() {
                    format!("{}\n", marker)
                } else {
                    format!("{} {}\n", marker, self.escape(&words.join(" ")))
                }
            }
            Line::Text { words } => format!("{}\n\n", self.escape(&words.join(" "))),
        }
    }

    fn escape(&self, text: &str) -> String {
        if self.options.escape_special_chars {
            escape_markdown(text)
        } else {
            text.to_string()
        }
    }
}

fn escape_markdown(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '|' | '#' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result
}
