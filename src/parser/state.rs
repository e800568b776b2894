//! Text-object state tracking.

use super::backend::FontHandle;

/// Whether the interpreter is inside a `BT` … `ET` text object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextObject {
    #[default]
    OutsideText,
    InsideText,
}

/// Text state for one page: text-object membership and the selected font.
///
/// Only `BT`, `ET` and `Tf` mutate it.
#[derive(Debug, Clone, Default)]
pub struct TextState {
    object: TextObject,
    active_font: Option<FontHandle>,
}

impl TextState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn object(&self) -> TextObject {
        self.object
    }

    pub fn inside_text(&self) -> bool {
        self.object == TextObject::InsideText
    }

    pub fn active_font(&self) -> Option<&FontHandle> {
        self.active_font.as_ref()
    }

    /// `BT`: enter a text object.
    pub fn begin(&mut self) {
        self.object = TextObject::InsideText;
    }

    /// `ET`: leave the text object. Returns `false`, leaving the state
    /// untouched, when no text object is open.
    pub fn end(&mut self) -> bool {
        match self.object {
            TextObject::OutsideText => false,
            TextObject::InsideText => {
                self.object = TextObject::OutsideText;
                true
            }
        }
    }

    /// Select the font, or clear it with `None`.
    pub fn set_font(&mut self, font: Option<FontHandle>) {
        self.active_font = font;
    }
}
