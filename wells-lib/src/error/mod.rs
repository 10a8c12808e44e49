//! Error types

mod api;
mod decode;
mod validation;

use std::path::PathBuf;

use crate::model::Format;

pub use api::*;
pub use decode::*;
pub use validation::*;

/// Top-level error for every fallible client operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport-level failure: network, timeout, HTTP status, upstream error body.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The response body could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Caller input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A payload could not be rendered in the requested format.
    #[error("Failed to encode {format}: {message}")]
    Encode {
        /// The output format.
        format: Format,
        /// The encoder's message.
        message: String,
    },

    /// Writing an output file failed.
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Creates a new I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a new encode error.
    pub fn encode(format: Format, message: impl ToString) -> Self {
        Self::Encode {
            format,
            message: message.to_string(),
        }
    }

    /// Returns `true` if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    /// Returns `true` if this is a decode failure.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Returns `true` if this is a validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
