//! Content Error Types
//!
//! Centralized error handling for decoding and tree construction.

/// Errors raised while decoding a wire payload into content or channel types.
///
/// Unknown discriminators are deliberately absent from this list: they are
/// resolved through each catalog's fallback variant instead.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Missing field `{field}` on `{variant}`")]
    MissingField {
        variant: &'static str,
        field: &'static str,
    },

    #[error("Malformed `{variant}` payload: {source}")]
    Malformed {
        variant: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected a JSON object for `{variant}`")]
    NotAnObject { variant: &'static str },

    #[error("Nesting exceeds the maximum depth of {limit}")]
    TooDeep { limit: usize },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DecodeError {
    /// Wrap a serde error raised while decoding a named variant.
    pub fn malformed(variant: &'static str, source: serde_json::Error) -> Self {
        DecodeError::Malformed { variant, source }
    }

    /// Build a missing-field error for a named variant.
    pub fn missing(variant: &'static str, field: &'static str) -> Self {
        DecodeError::MissingField { variant, field }
    }
}

/// Errors raised by container mutation.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Index {index} is out of range for {len} children")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Range {start}..{end} is invalid for {len} children")]
    InvalidRange { start: usize, end: usize, len: usize },
}
