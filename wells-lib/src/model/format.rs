//! Response and output formats

use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A body format understood by the API and by the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Format {
    #[default]
    Json,
    Csv,
    Xml,
}

impl Format {
    /// Every supported format.
    pub const ALL: [Format; 3] = [Format::Json, Format::Csv, Format::Xml];

    /// The value sent as the `format` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Csv => "csv",
            Format::Xml => "xml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownFormat(s.to_string()))
    }
}
