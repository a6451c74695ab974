//! Error types for chat markup parsing.
//!
//! Only structural problems in an expression are errors. Unterminated
//! brackets and unknown MiniJSON functions are recovered from while parsing
//! and never show up here.

use thiserror::Error;

/// A malformed markup expression.
///
/// Raised when an expression clearly tried to be markup but violates the
/// grammar it resolved to. The caller decides whether to drop the whole
/// message or show it unformatted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A JSON object expression without a `message-parts` array.
    #[error("JSON expression has no \"message-parts\" array")]
    MissingMessageParts,

    /// An entry of `message-parts` that is not a JSON object.
    #[error("message part {index} is not a JSON object")]
    PartNotAnObject { index: usize },

    /// An entry of `message-parts` without `base-text`.
    #[error("message part {index} has no \"base-text\"")]
    MissingBaseText { index: usize },

    /// A MiniJSON expression with fewer than three comma separated fields.
    #[error("MiniJSON expression needs at least 3 fields, found {found}")]
    TooFewFields { found: usize },
}

impl MarkupError {
    /// Every variant is a malformed-expression error.
    ///
    /// Kept as a method so callers can branch on the error kind without
    /// matching each variant.
    pub fn is_malformed_expression(&self) -> bool {
        matches!(
            self,
            MarkupError::MissingMessageParts
                | MarkupError::PartNotAnObject { .. }
                | MarkupError::MissingBaseText { .. }
                | MarkupError::TooFewFields { .. }
        )
    }
}

/// Convenience alias for markup results.
pub type Result<T> = std::result::Result<T, MarkupError>;
