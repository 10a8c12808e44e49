//! Decoded response payloads

use std::fmt;

use crate::api::XmlElement;
use crate::model::Record;

/// What a fetch returns, after decoding.
///
/// JSON responses are kept as a document until a caller selects the records
/// out of it; CSV is opaque text; XML is an element tree. Filters and the
/// pagination driver produce `Records`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Records selected out of JSON responses.
    Records(Vec<Record>),
    /// A whole JSON document, metadata included.
    Json(serde_json::Value),
    /// Raw CSV text.
    Csv(String),
    /// A parsed XML document.
    Xml(XmlElement),
}

impl Payload {
    /// Returns the records if this payload holds them.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            Payload::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Consumes the payload and returns the records, if any.
    pub fn into_records(self) -> Option<Vec<Record>> {
        match self {
            Payload::Records(records) => Some(records),
            _ => None,
        }
    }

    /// Returns the variant name, for log lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Records(_) => "records",
            Payload::Json(_) => "json",
            Payload::Csv(_) => "csv",
            Payload::Xml(_) => "xml",
        }
    }
}

impl fmt::Display for Payload {
    /// Best-effort string form, used when a payload is written in a format
    /// it cannot be converted to.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Records(records) => match serde_json::to_string(records) {
                Ok(json) => f.write_str(&json),
                Err(_) => write!(f, "{:?}", records),
            },
            Payload::Json(doc) => write!(f, "{}", doc),
            Payload::Csv(text) => f.write_str(text),
            Payload::Xml(root) => write!(f, "{}", root),
        }
    }
}

impl From<Vec<Record>> for Payload {
    fn from(records: Vec<Record>) -> Self {
        Payload::Records(records)
    }
}
