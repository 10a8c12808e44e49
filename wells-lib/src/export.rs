//! Rendering and saving payloads as JSON, CSV or XML.
//!
//! | payload | json | csv | xml |
//! |---------|------|-----|-----|
//! | records | pretty array | header + rows if uniform | `<root><records><item>` |
//! | json document | pretty | string dump | string dump |
//! | csv text | JSON string | unchanged | string dump |
//! | xml tree | JSON string | string dump | unchanged |

use std::fs;
use std::path::Path;

use log::info;

use crate::api::XmlElement;
use crate::error::Error;
use crate::model::Format;
use crate::model::Record;
use crate::response::Payload;

/// Renders a payload as text in `format`.
///
/// JSON output is indented with two spaces and keeps non-ASCII characters
/// as-is.
pub fn render(payload: &Payload, format: Format) -> Result<String, Error> {
    match format {
        Format::Json => render_json(payload),
        Format::Csv => match payload {
            Payload::Records(records) if is_uniform(records) => render_csv(records),
            Payload::Csv(text) => Ok(text.clone()),
            other => Ok(other.to_string()),
        },
        Format::Xml => match payload {
            Payload::Xml(root) => Ok(root.to_string()),
            Payload::Records(records) => Ok(XmlElement::from_records(records).to_string()),
            other => Ok(other.to_string()),
        },
    }
}

/// Renders `payload` and writes it to `path`.
///
/// Failures come back as [`Error::Io`] or [`Error::Encode`]; nothing panics.
pub fn save(payload: &Payload, path: impl AsRef<Path>, format: Format) -> Result<(), Error> {
    let path = path.as_ref();
    let text = render(payload, format)?;
    fs::write(path, text).map_err(|e| Error::io(path, e))?;
    info!("Data saved to {}", path.display());
    Ok(())
}

fn render_json(payload: &Payload) -> Result<String, Error> {
    let rendered = match payload {
        Payload::Records(records) => serde_json::to_string_pretty(records),
        Payload::Json(doc) => serde_json::to_string_pretty(doc),
        Payload::Csv(text) => serde_json::to_string_pretty(text),
        Payload::Xml(root) => serde_json::to_string_pretty(&root.to_string()),
    };
    rendered.map_err(|e| Error::encode(Format::Json, e))
}

/// Non-empty, and every record has the first record's fields.
fn is_uniform(records: &[Record]) -> bool {
    match records.split_first() {
        Some((first, rest)) => rest.iter().all(|record| record.same_shape(first)),
        None => false,
    }
}

fn render_csv(records: &[Record]) -> Result<String, Error> {
    let header = records[0].keys();
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(header)
        .map_err(|e| Error::encode(Format::Csv, e))?;
    for record in records {
        let row = header
            .iter()
            .map(|key| record.get(key).map(ToString::to_string).unwrap_or_default());
        writer
            .write_record(row)
            .map_err(|e| Error::encode(Format::Csv, e))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| Error::encode(Format::Csv, e))?;
    String::from_utf8(bytes).map_err(|e| Error::encode(Format::Csv, e))
}
