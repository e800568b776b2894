//! Content-stream interpreter.
//!
//! Handles the operators text extraction cares about:
//!
//! - `BT`/`ET`: enter/leave a text object
//! - `l`/`m`: clear the operand stack (positions are irrelevant here)
//! - `Tf`: select font (inside text only)
//! - `Tj`, `'`: show one string (inside text only)
//! - `"`: show one string, discard word and character spacing
//! - `TJ`: show the string elements of an array, skipping adjustments
//!
//! Any other operator leaves the stack untouched, so operands accumulate
//! until a text operator consumes them or `l`/`m` clears them.

use super::backend::{ContentToken, PageId, PdfBackend, PdfValue};
use super::decoder::GlyphDecoder;
use super::diagnostics::{Diagnostics, Warning};
use super::stack::OperandStack;
use super::state::TextState;
use crate::error::{Error, Result};
use crate::model::FragmentLog;

/// Interprets one page's token stream into fragments.
///
/// Stack and text state live for one page. Fragments and warnings go to
/// run-scoped collectors passed in by the caller.
pub struct ContentInterpreter<'a, B: PdfBackend + ?Sized> {
    backend: &'a B,
    decoder: GlyphDecoder,
    page_id: PageId,
    page_number: u32,
    stack: OperandStack,
    state: TextState,
}

impl<'a, B: PdfBackend + ?Sized> ContentInterpreter<'a, B> {
    /// Create an interpreter for page `page_number` (1-indexed).
    pub fn new(backend: &'a B, page_number: u32, page_id: PageId) -> Self {
        Self {
            backend,
            decoder: GlyphDecoder::new(),
            page_id,
            page_number,
            stack: OperandStack::new(),
            state: TextState::new(),
        }
    }

    /// Use a configured decoder.
    pub fn with_decoder(mut self, decoder: GlyphDecoder) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn state(&self) -> &TextState {
        &self.state
    }

    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    /// Interpret every token in order. Stops at the first fatal error.
    pub fn run<I>(
        &mut self,
        tokens: I,
        fragments: &mut FragmentLog,
        diagnostics: &mut Diagnostics,
    ) -> Result<()>
    where
        I: IntoIterator<Item = ContentToken>,
    {
        for token in tokens {
            self.step(token, fragments, diagnostics)?;
        }
        Ok(())
    }

    /// Interpret a single token.
    pub fn step(
        &mut self,
        token: ContentToken,
        fragments: &mut FragmentLog,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        match token {
            ContentToken::Operand(value) => {
                self.stack.push(value);
                Ok(())
            }
            ContentToken::Keyword(op) => self.execute(&op, fragments, diagnostics),
            ContentToken::Unrecognized(description) => Err(Error::UnexpectedToken {
                description,
                page: self.page_number,
            }),
        }
    }

    fn execute(
        &mut self,
        op: &str,
        fragments: &mut FragmentLog,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        log::trace!("page {}: {} ({} operands)", self.page_number, op, self.stack.len());

        match op {
            "l" | "m" => {
                self.stack.clear();
                return Ok(());
            }
            "BT" => {
                self.state.begin();
                return Ok(());
            }
            "ET" => {
                if !self.state.end() {
                    diagnostics.warn(Warning::EndWithoutBegin {
                        page: self.page_number,
                    });
                }
                return Ok(());
            }
            _ => {}
        }

        if !self.state.inside_text() {
            return Ok(());
        }

        match op {
            "Tf" => self.select_font(diagnostics),
            "Tj" | "'" => self.show_string(op, fragments, diagnostics),
            "\"" => self.show_string_with_spacing(fragments, diagnostics),
            "TJ" => self.show_array(fragments, diagnostics),
            _ => Ok(()),
        }
    }

    /// `Tf`: `/name size Tf`.
    fn select_font(&mut self, diagnostics: &mut Diagnostics) -> Result<()> {
        if !self.require("Tf", 2, diagnostics) {
            self.state.set_font(None);
            return Ok(());
        }

        // size
        self.stack.pop();
        let name = match self.stack.pop() {
            Some(PdfValue::Name(name)) => name,
            other => return Err(self.operand_type("Tf", "a name", other.as_ref())),
        };

        let font = self
            .backend
            .resolve_font(self.page_id, &name)
            .ok_or_else(|| Error::FontNotFound {
                name: String::from_utf8_lossy(&name).into_owned(),
                page: self.page_number,
            })?;

        log::trace!("page {}: selected font {}", self.page_number, font);
        self.state.set_font(Some(font));
        Ok(())
    }

    /// `Tj` and `'`: `(string) Tj`.
    fn show_string(
        &mut self,
        op: &str,
        fragments: &mut FragmentLog,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        if !self.require(op, 1, diagnostics) {
            return Ok(());
        }

        let bytes = self.pop_string(op)?;
        self.emit(op, &bytes, fragments)
    }

    /// `"`: `aw ac (string) "`. Spacing operands are discarded.
    fn show_string_with_spacing(
        &mut self,
        fragments: &mut FragmentLog,
        diagnostics: &mut Diagnostics,
    ) -> Result<()> {
        if !self.require("\"", 3, diagnostics) {
            self.stack.clear();
            return Ok(());
        }

        let bytes = self.pop_string("\"")?;
        self.emit("\"", &bytes, fragments)?;
        self.stack.discard(2);
        Ok(())
    }

    /// `TJ`: `[(A) -120 (B)] TJ`.
    ///
    /// Only the array is consumed, but three operands must be present.
    fn show_array(&mut self, fragments: &mut FragmentLog, diagnostics: &mut Diagnostics) -> Result<()> {
        if !self.require("TJ", 3, diagnostics) {
            return Ok(());
        }

        let items = match self.stack.pop() {
            Some(PdfValue::Array(items)) => items,
            other => return Err(self.operand_type("TJ", "an array", other.as_ref())),
        };

        for item in &items {
            if let PdfValue::Str(bytes) = item {
                self.emit("TJ", bytes, fragments)?;
            }
        }
        Ok(())
    }

    /// Warn and return `false` when fewer than `n` operands are stacked.
    fn require(&self, op: &str, n: usize, diagnostics: &mut Diagnostics) -> bool {
        if self.stack.has(n) {
            return true;
        }
        diagnostics.warn(Warning::MissingOperands {
            operator: op.to_string(),
            expected: n,
            found: self.stack.len(),
            page: self.page_number,
        });
        false
    }

    fn pop_string(&mut self, op: &str) -> Result<Vec<u8>> {
        match self.stack.pop() {
            Some(PdfValue::Str(bytes)) => Ok(bytes),
            other => Err(self.operand_type(op, "a string", other.as_ref())),
        }
    }

    fn emit(&self, op: &str, bytes: &[u8], fragments: &mut FragmentLog) -> Result<()> {
        let fragment = self.decoder.decode(
            self.backend,
            self.state.active_font(),
            bytes,
            op,
            self.page_number,
        )?;
        fragments.push(fragment);
        Ok(())
    }

    fn operand_type(&self, op: &str, expected: &'static str, found: Option<&PdfValue>) -> Error {
        Error::OperandType {
            operator: op.to_string(),
            expected,
            found: found.map_or("nothing", PdfValue::kind),
            page: self.page_number,
        }
    }
}
