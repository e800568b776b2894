//! Recoverable interpreter conditions.
//!
//! Warnings never travel through the error channel. They are logged at
//! `warn` level when raised and collected for the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A recoverable condition met while interpreting a content stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// An operator found fewer operands than it needs and was skipped.
    MissingOperands {
        operator: String,
        expected: usize,
        found: usize,
        page: u32,
    },

    /// `ET` appeared outside a text object.
    EndWithoutBegin { page: u32 },
}

impl Warning {
    /// 1-indexed page the warning was raised on.
    pub fn page(&self) -> u32 {
        match self {
            Warning::MissingOperands { page, .. } | Warning::EndWithoutBegin { page } => *page,
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::MissingOperands {
                operator,
                expected,
                found,
                page,
            } => write!(
                f,
                "page {}: '{}' expects {} operand(s), found {}; ignoring",
                page, operator, expected, found
            ),
            Warning::EndWithoutBegin { page } => write!(f, "page {}: found ET without BT", page),
        }
    }
}

/// Collects warnings for one document run.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Log and record a warning.
    pub fn warn(&mut self, warning: Warning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_display() {
        let w = Warning::MissingOperands {
            operator: "Tf".to_string(),
            expected: 2,
            found: 1,
            page: 3,
        };
        assert_eq!(
            w.to_string(),
            "page 3: 'Tf' expects 2 operand(s), found 1; ignoring"
        );
        assert_eq!(
            Warning::EndWithoutBegin { page: 1 }.to_string(),
            "page 1: found ET without BT"
        );
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diags = Diagnostics::new();
        diags.warn(Warning::EndWithoutBegin { page: 1 });
        diags.warn(Warning::EndWithoutBegin { page: 2 });
        assert_eq!(diags.len(), 2);
        assert_eq!(diags.warnings()[1].page(), 2);
    }
}
