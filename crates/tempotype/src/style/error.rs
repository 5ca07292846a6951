//! Style value parsing errors.

use thiserror::Error;

/// Error returned when a CSS-like style value cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} value '{value}'")]
pub struct ParseValueError {
    /// Which property was being parsed (e.g. `"color"`).
    pub kind: &'static str,
    /// The offending input.
    pub value: String,
}

impl ParseValueError {
    pub(crate) fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
