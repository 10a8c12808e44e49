//! Response decoding

use crate::api::XmlElement;
use crate::error::ApiError;
use crate::error::DecodeError;
use crate::error::Error;
use crate::model::Format;
use crate::response::Payload;

/// Decodes a response body in the format it was requested in.
///
/// JSON is parsed into a document; a document that reports an error (an
/// `error` key, or `"status": "error"`) becomes [`ApiError::Upstream`]. CSV is
/// passed through untouched. XML is parsed into an [`XmlElement`] tree.
pub fn decode(format: Format, body: &str) -> Result<Payload, Error> {
    match format {
        Format::Json => decode_json(body).map(Payload::Json),
        Format::Csv => Ok(Payload::Csv(body.to_string())),
        Format::Xml => XmlElement::parse(body)
            .map(Payload::Xml)
            .map_err(|message| DecodeError::new(format, message, body).into()),
    }
}

/// Parses a JSON body, surfacing upstream error documents as [`ApiError::Upstream`].
pub fn decode_json(body: &str) -> Result<serde_json::Value, Error> {
    let doc: serde_json::Value =
        serde_json::from_str(body).map_err(|e| DecodeError::new(Format::Json, e.to_string(), body))?;
    if let Some(message) = upstream_error(&doc) {
        return Err(ApiError::Upstream(message).into());
    }
    Ok(doc)
}

fn upstream_error(doc: &serde_json::Value) -> Option<String> {
    if let Some(error) = doc.get("error") {
        return Some(match error {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        });
    }
    if doc.get("status").and_then(|s| s.as_str()) == Some("error") {
        let message = doc
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("unspecified error");
        return Some(message.to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_json() {
        let payload = decode(Format::Json, r#"{"records": [], "total": 0}"#).unwrap();
        assert_eq!(payload, Payload::Json(serde_json::json!({"records": [], "total": 0})));
    }

    #[test]
    fn test_malformed_json_carries_snippet() {
        let body = format!("<html>{}</html>", "x".repeat(500));
        let err = decode(Format::Json, &body).unwrap_err();

        let Error::Decode(decode) = err else {
            panic!("expected a decode error, got {err:?}");
        };
        assert_eq!(decode.format, Format::Json);
        assert!(decode.snippet.starts_with("<html>"));
        assert_eq!(decode.snippet.len(), crate::error::SNIPPET_LEN);
    }

    #[test]
    fn test_upstream_error_document() {
        let err = decode(Format::Json, r#"{"status": "error", "message": "Invalid key"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Upstream(ref m)) if m == "Invalid key"));

        let err = decode(Format::Json, r#"{"error": "quota exceeded"}"#).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Upstream(ref m)) if m == "quota exceeded"));
    }

    #[test]
    fn test_csv_passthrough() {
        let body = "status,gujarat\nActive,3\n";
        assert_eq!(decode(Format::Csv, body).unwrap(), Payload::Csv(body.to_string()));
    }

    #[test]
    fn test_xml() {
        let payload = decode(Format::Xml, "<root><total>1</total></root>").unwrap();
        let Payload::Xml(root) = payload else {
            panic!("expected xml");
        };
        assert_eq!(root.find("total").unwrap().text_content(), "1");

        assert!(decode(Format::Xml, "<root>").unwrap_err().is_decode());
    }
}
