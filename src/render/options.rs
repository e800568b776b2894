//! Rendering options and configuration.

/// Options for rendering a document structure.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Replace detected bullet glyphs with this character
    pub list_marker: Option<char>,

    /// Markdown heading level (1-6)
    pub heading_level: u8,

    /// Escape special Markdown characters
    pub escape_special_chars: bool,

    /// Insert an empty line after each heading in text output
    pub blank_line_after_heading: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = Some(marker);
        self
    }

    /// Set the Markdown heading level.
    pub fn with_heading_level(mut self, level: u8) -> Self {
        self.heading_level = level.clamp(1, 6);
        self
    }

    /// Enable or disable Markdown escaping.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Enable or disable the blank line after headings.
    pub fn with_heading_spacing(mut self, blank_line: bool) -> Self {
        self.blank_line_after_heading = blank_line;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: None,
            heading_level: 2,
            escape_special_chars: true,
            blank_line_after_heading: false,
        }
    }
}

/// Output format for [`write_to_sink`](super::write_to_sink) and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One line per structure line
    #[default]
    Text,
    /// Markdown headings and lists
    Markdown,
    /// Pretty-printed JSON
    Json,
    /// Compact JSON
    JsonCompact,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_list_marker('*')
            .with_heading_level(9)
            .with_escaping(false)
            .with_heading_spacing(true);

        assert_eq!(options.list_marker, Some('*'));
        assert_eq!(options.heading_level, 6);
        assert!(!options.escape_special_chars);
        assert!(options.blank_line_after_heading);
    }

    #[test]
    fn test_heading_level_lower_clamp() {
        assert_eq!(RenderOptions::new().with_heading_level(0).heading_level, 1);
    }
}
