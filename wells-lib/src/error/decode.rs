//! Response decoding errors

use crate::model::Format;

/// Maximum number of body characters kept for diagnostics.
pub const SNIPPET_LEN: usize = 200;

/// A response body that could not be decoded in the requested format.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{format} decode error: {message} (body: {snippet:?})")]
pub struct DecodeError {
    /// The format the body was decoded as.
    pub format: Format,
    /// The parser's message.
    pub message: String,
    /// The first [`SNIPPET_LEN`] characters of the raw body.
    pub snippet: String,
}

impl DecodeError {
    /// Creates a decode error, truncating `body` to a short snippet.
    pub fn new(format: Format, message: impl Into<String>, body: &str) -> Self {
        Self {
            format,
            message: message.into(),
            snippet: body.chars().take(SNIPPET_LEN).collect(),
        }
    }
}
