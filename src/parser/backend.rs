//! PDF backend abstraction layer.
//!
//! The interpreter sees a document only through [`PdfBackend`]: page
//! enumeration, a per-page token stream, font lookup in the page's
//! resources, and font-aware text decoding. [`LopdfBackend`] is the
//! concrete implementation over `lopdf`.

use std::collections::BTreeMap;
use std::fmt;

use lopdf::{Document as LopdfDocument, Object};

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// A typed operand value from a content stream.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    /// Booleans, null, dictionaries and anything else text extraction ignores.
    Other,
}

impl PdfValue {
    /// Build a string operand.
    pub fn string(bytes: impl Into<Vec<u8>>) -> Self {
        PdfValue::Str(bytes.into())
    }

    /// Build a name operand.
    pub fn name(bytes: impl Into<Vec<u8>>) -> Self {
        PdfValue::Name(bytes.into())
    }

    /// Short type label used in operand type errors.
    pub fn kind(&self) -> &'static str {
        match self {
            PdfValue::Integer(_) => "integer",
            PdfValue::Real(_) => "real",
            PdfValue::Name(_) => "name",
            PdfValue::Str(_) => "string",
            PdfValue::Array(_) => "array",
            PdfValue::Other => "other",
        }
    }
}

/// One event of a page's content stream, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentToken {
    /// An operand, pushed on the operand stack.
    Operand(PdfValue),
    /// An operator name such as `BT` or `Tj`.
    Keyword(String),
    /// An event the token source could not classify.
    Unrecognized(String),
}

impl ContentToken {
    /// Build a keyword token.
    pub fn keyword(op: impl Into<String>) -> Self {
        ContentToken::Keyword(op.into())
    }
}

impl From<PdfValue> for ContentToken {
    fn from(value: PdfValue) -> Self {
        ContentToken::Operand(value)
    }
}

/// A font resolved from a page's `/Font` resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontHandle {
    /// Page the resource was resolved on.
    pub page: PageId,
    /// Font resource name (key in the page's font dictionary).
    pub name: Vec<u8>,
    /// Base font name (e.g., "Helvetica-Bold").
    pub base_font: String,
}

impl fmt::Display for FontHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})",
            String::from_utf8_lossy(&self.name),
            self.base_font
        )
    }
}

/// Abstract interface for PDF document access.
pub trait PdfBackend {
    /// Return all pages as (page_number → PageId), in document order.
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Return the ordered token stream of a page's content.
    fn page_tokens(&self, page: PageId) -> Result<Vec<ContentToken>>;

    /// Look up a font by resource name in the page's resources.
    fn resolve_font(&self, page: PageId, name: &[u8]) -> Option<FontHandle>;

    /// Decode raw string bytes to Unicode using the font's encoding.
    fn decode_text(&self, font: &FontHandle, bytes: &[u8]) -> String;

    /// PDF version, when known.
    fn version(&self) -> Option<String> {
        None
    }
}

/// Simple text decoding fallback when no encoding is available.
pub fn decode_text_simple(bytes: &[u8]) -> String {
    if let Some(body) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let utf16: Vec<u16> = body
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16_lossy(&utf16);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        // Latin-1
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Flatten decoded operations into the operand-then-keyword token order
/// they had in the stream.
pub fn flatten_operations<I>(operations: I) -> Vec<ContentToken>
where
    I: IntoIterator<Item = (String, Vec<PdfValue>)>,
{
    let mut tokens = Vec::new();
    for (operator, operands) in operations {
        tokens.extend(operands.into_iter().map(ContentToken::Operand));
        tokens.push(ContentToken::Keyword(operator));
    }
    tokens
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        Self::from_document(doc)
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data)?;
        Self::from_document(doc)
    }

    /// Load from a reader.
    pub fn load_reader<R: std::io::Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::load_bytes(&data)
    }

    /// Wrap an already loaded document.
    pub fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            return Err(Error::Encrypted);
        }
        Ok(Self { doc })
    }

    /// Direct access to the underlying `lopdf::Document`.
    pub fn raw_doc(&self) -> &LopdfDocument {
        &self.doc
    }

    /// Raw (decompressed) content stream bytes of a page. Multiple
    /// `/Contents` streams are concatenated with a separating space.
    pub fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;

        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            // A page without content shows nothing.
            Err(_) => return Ok(Vec::new()),
        };

        match contents {
            Object::Reference(r) => match self.doc.get_object(*r)? {
                Object::Stream(s) => Ok(s
                    .decompressed_content()
                    .unwrap_or_else(|_| s.content.clone())),
                Object::Array(arr) => self.concat_streams(arr),
                _ => Err(Error::PdfParse("Invalid content stream".to_string())),
            },
            Object::Array(arr) => self.concat_streams(arr),
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    fn concat_streams(&self, refs: &[Object]) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        for obj in refs {
            if let Object::Reference(r) = obj {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    match s.decompressed_content() {
                        Ok(data) => content.extend_from_slice(&data),
                        Err(_) => content.extend_from_slice(&s.content),
                    }
                    content.push(b' ');
                }
            }
        }
        Ok(content)
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_tokens(&self, page: PageId) -> Result<Vec<ContentToken>> {
        let data = self.page_content(page)?;
        let content =
            lopdf::content::Content::decode(&data).map_err(|e| Error::PdfParse(e.to_string()))?;

        Ok(flatten_operations(content.operations.into_iter().map(
            |op| {
                let operands = op.operands.iter().map(convert_object).collect();
                (op.operator, operands)
            },
        )))
    }

    fn resolve_font(&self, page: PageId, name: &[u8]) -> Option<FontHandle> {
        let fonts = self.doc.get_page_fonts(page).ok()?;
        let font_dict = fonts.get(name)?;
        let base_font = font_dict
            .get(b"BaseFont")
            .ok()
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string())
            .unwrap_or_else(|| "Unknown".to_string());

        Some(FontHandle {
            page,
            name: name.to_vec(),
            base_font,
        })
    }

    fn decode_text(&self, font: &FontHandle, bytes: &[u8]) -> String {
        if let Ok(fonts) = self.doc.get_page_fonts(font.page) {
            if let Some(font_dict) = fonts.get(&font.name) {
                if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                    if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                        return text;
                    }
                }
            }
        }
        log::debug!("No usable encoding for font {}, decoding raw bytes", font);
        decode_text_simple(bytes)
    }

    fn version(&self) -> Option<String> {
        Some(self.doc.version.to_string())
    }
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_text_simple_utf8() {
        assert_eq!(decode_text_simple(b"Hello"), "Hello");
    }

    #[test]
    fn test_decode_text_simple_latin1() {
        // 0xE9 = 'é' in Latin-1
        let bytes = vec![0x48, 0x65, 0x6C, 0x6C, 0xE9];
        assert_eq!(decode_text_simple(&bytes), "Hellé");
    }

    #[test]
    fn test_decode_text_simple_utf16be() {
        let bytes = vec![0xFE, 0xFF, 0x00, 0x48, 0x00, 0x69];
        assert_eq!(decode_text_simple(&bytes), "Hi");
    }

    #[test]
    fn test_flatten_operations_order() {
        let tokens = flatten_operations(vec![
            (
                "Tf".to_string(),
                vec![PdfValue::name("F1"), PdfValue::Integer(12)],
            ),
            ("Tj".to_string(), vec![PdfValue::string("Hi")]),
        ]);

        assert_eq!(
            tokens,
            vec![
                ContentToken::Operand(PdfValue::name("F1")),
                ContentToken::Operand(PdfValue::Integer(12)),
                ContentToken::keyword("Tf"),
                ContentToken::Operand(PdfValue::string("Hi")),
                ContentToken::keyword("Tj"),
            ]
        );
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(PdfValue::Integer(42).kind(), "integer");
        assert_eq!(PdfValue::Real(1.5).kind(), "real");
        assert_eq!(PdfValue::string("x").kind(), "string");
        assert_eq!(PdfValue::Array(vec![]).kind(), "array");
    }
}
