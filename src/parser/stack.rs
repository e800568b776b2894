//! Operand stack.

use super::backend::PdfValue;

/// LIFO operand storage between operators.
///
/// Pushes are never validated; operators check [`len`](Self::len) before
/// popping and never pop more than is present.
#[derive(Debug, Clone, Default)]
pub struct OperandStack {
    items: Vec<PdfValue>,
}

impl OperandStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: PdfValue) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<PdfValue> {
        self.items.pop()
    }

    pub fn top(&self) -> Option<&PdfValue> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Whether at least `n` operands are available.
    pub fn has(&self, n: usize) -> bool {
        self.items.len() >= n
    }

    /// Drop up to `n` operands from the top.
    pub fn discard(&mut self, n: usize) {
        let keep = self.items.len().saturating_sub(n);
        self.items.truncate(keep);
    }
}
