//! Single-request query parameters.

use super::Filter;
use crate::model::Format;

/// Default page size for a single request.
pub const DEFAULT_LIMIT: usize = 10;

/// Parameters for one request against the API.
///
/// # Example
///
/// ```
/// use wells_lib::api::query::{StatusFilter, WellsQuery};
/// use wells_lib::model::Format;
///
/// let query = WellsQuery::new()
///     .with_format(Format::Csv)
///     .with_limit(3)
///     .with_filters(&StatusFilter::new("Active"));
///
/// assert_eq!(query.filters, vec![("status".to_string(), "Active".to_string())]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellsQuery {
    /// Response format.
    ///
    /// Default: `json`
    pub format: Format,

    /// Number of records to skip.
    ///
    /// Default: 0
    pub offset: usize,

    /// Maximum number of records to return.
    ///
    /// Default: 10
    pub limit: usize,

    /// `(key, value)` pairs sent as `filters[key]=value`.
    pub filters: Vec<(String, String)>,
}

impl Default for WellsQuery {
    fn default() -> Self {
        Self {
            format: Format::Json,
            offset: 0,
            limit: DEFAULT_LIMIT,
            filters: Vec::new(),
        }
    }
}

impl WellsQuery {
    /// Creates a new query with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the response format.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Sets the offset.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Adds one `filters[key]=value` parameter.
    pub fn with_filter(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.filters.push((key.into(), value.to_string()));
        self
    }

    /// Adds the query parameters of a filter.
    pub fn with_filters(mut self, filter: &dyn Filter) -> Self {
        self.filters.extend(filter.params());
        self
    }
}
