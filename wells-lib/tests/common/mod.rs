//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::ops::Range;

use serde_json::Value;
use serde_json::json;
use wells_lib::WellsClient;
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";
pub const RESOURCE: &str = "/resource/wells";

/// A client pointed at the mock server.
pub fn client(server: &MockServer) -> WellsClient {
    WellsClient::builder()
        .api_key(API_KEY)
        .url(format!("{}{}", server.uri(), RESOURCE))
        .build()
        .unwrap()
}

/// Rows numbered by `serials`, with a few states and the offshore count
/// alternating between text and zero.
pub fn rows(serials: Range<usize>) -> Vec<Value> {
    serials
        .map(|i| {
            json!({
                "_sl__no_": i.to_string(),
                "status": format!("Row {}", i),
                "gujarat": (i % 3).to_string(),
                "offshore": if i % 2 == 0 { "0".to_string() } else { i.to_string() },
            })
        })
        .collect()
}

/// `{"result": {"records": [...]}}`, the multi-page shape.
pub fn nested(records: Vec<Value>) -> Value {
    json!({ "result": { "records": records } })
}

/// `{"records": [...], "total": N}`, the single-request shape.
pub fn top_level(records: Vec<Value>, total: usize) -> Value {
    json!({
        "title": "Status of Wells as on 01-04-2021",
        "total": total,
        "count": records.len(),
        "records": records,
    })
}

pub fn serials(records: &[wells_lib::model::Record]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.text("_sl__no_").unwrap().to_string())
        .collect()
}
