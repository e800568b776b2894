//! Glyph decoding: raw string operands to Unicode fragments.

use unicode_normalization::UnicodeNormalization;

use super::backend::{FontHandle, PdfBackend};
use crate::error::{Error, Result};
use crate::model::Fragment;

/// Turns string operands into [`Fragment`]s through the active font's
/// encoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphDecoder {
    normalize: bool,
}

impl GlyphDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply Unicode NFC to each decoded fragment.
    pub fn with_normalization(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Decode one string operand shown by `operator` on `page`.
    ///
    /// Without an active font no encoding can be established, so this fails
    /// with [`Error::NoActiveFont`] instead of guessing.
    pub fn decode<B: PdfBackend + ?Sized>(
        &self,
        backend: &B,
        font: Option<&FontHandle>,
        bytes: &[u8],
        operator: &str,
        page: u32,
    ) -> Result<Fragment> {
        let font = font.ok_or_else(|| Error::NoActiveFont {
            operator: operator.to_string(),
            page,
        })?;

        let text = backend.decode_text(font, bytes);
        let text = if self.normalize {
            text.nfc().collect()
        } else {
            text
        };

        Ok(Fragment::new(text, page))
    }
}
