//! Validation error types

/// Caller input rejected before any request is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The state key is not one of the recognized states.
    #[error("Invalid state name '{given}'. Available states: {}", valid.join(", "))]
    UnknownState {
        /// The key that was given.
        given: String,
        /// Every recognized key.
        valid: Vec<&'static str>,
    },

    /// The output format is not one of `json`, `csv`, `xml`.
    #[error("Unknown format '{0}'. Expected one of: json, csv, xml")]
    UnknownFormat(String),

    /// A page size of zero was requested.
    #[error("Limit must be greater than zero")]
    InvalidLimit,
}
