//! Page type for paginated query results.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DecodeError;
use crate::model::Format;
use crate::model::Record;

/// Where the records sit inside a JSON response.
///
/// Single requests find them at the top level (`records`), while the
/// multi-page contract nests them under `result.records`. Callers pick one
/// explicitly; the decoder never guesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordPath {
    /// `{"records": [...], "total": N}`
    #[default]
    TopLevel,
    /// `{"result": {"records": [...], "total": N}}`
    Nested,
}

impl RecordPath {
    /// Returns the object holding `records` and `total`, if present.
    fn container<'a>(&self, doc: &'a serde_json::Value) -> Option<&'a serde_json::Value> {
        match self {
            RecordPath::TopLevel => Some(doc),
            RecordPath::Nested => doc.get("result"),
        }
    }

    /// The dotted path, for messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordPath::TopLevel => "records",
            RecordPath::Nested => "result.records",
        }
    }
}

impl fmt::Display for RecordPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordPath {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "records" => Ok(RecordPath::TopLevel),
            "result.records" => Ok(RecordPath::Nested),
            other => Err(format!(
                "unknown record path '{}', expected 'records' or 'result.records'",
                other
            )),
        }
    }
}

/// A page of query results with pagination information.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.pages(100);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     println!("offset {}: {} records", page.offset(), page.len());
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    records: Vec<Record>,
    /// Offset the page was requested at.
    offset: usize,
    /// Page size that was requested.
    limit: usize,
    /// Total record count, if the API reported one.
    total_count: Option<usize>,
}

impl Page {
    /// Creates a new page.
    pub fn new(records: Vec<Record>, offset: usize, limit: usize) -> Self {
        Self {
            records,
            offset,
            limit,
            total_count: None,
        }
    }

    /// Sets the total record count.
    pub fn with_total_count(mut self, count: usize) -> Self {
        self.total_count = Some(count);
        self
    }

    /// Selects the records at `path` out of a decoded JSON document.
    ///
    /// A missing path is an empty page. A path that holds something other
    /// than an array of objects is a decode error.
    pub fn from_json(
        doc: &serde_json::Value,
        path: RecordPath,
        offset: usize,
        limit: usize,
    ) -> Result<Page, DecodeError> {
        let Some(container) = path.container(doc) else {
            return Ok(Page::new(Vec::new(), offset, limit));
        };

        let records = match container.get("records") {
            None | Some(serde_json::Value::Null) => Vec::new(),
            Some(value) => Vec::<Record>::deserialize(value).map_err(|e| {
                DecodeError::new(
                    Format::Json,
                    format!("invalid `{}`: {}", path, e),
                    &value.to_string(),
                )
            })?,
        };

        let mut page = Page::new(records, offset, limit);
        if let Some(total) = container.get("total").and_then(parse_count) {
            page = page.with_total_count(total);
        }
        Ok(page)
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the offset this page was requested at.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the page size that was requested.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the total record count, if the API reported one.
    pub fn total_count(&self) -> Option<usize> {
        self.total_count
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if fewer records came back than were asked for.
    pub fn is_short(&self) -> bool {
        self.records.len() < self.limit
    }
}

/// Reads a count that may arrive as a number or as numeric text.
fn parse_count(value: &serde_json::Value) -> Option<usize> {
    match value {
        serde_json::Value::Number(n) => n.as_u64().and_then(|n| usize::try_from(n).ok()),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
