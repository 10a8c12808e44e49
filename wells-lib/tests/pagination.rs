//! Pagination driver against a mock API.

mod common;

use common::*;
use serde_json::json;
use wells_lib::api::query::RecordPath;
use wells_lib::error::ApiError;
use wells_lib::error::Error;
use wells_lib::error::ValidationError;
use wells_lib::model::Format;
use wells_lib::Payload;
use wells_lib::WellsClient;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

async fn mount_page(server: &MockServer, offset: usize, limit: usize, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(RESOURCE))
        .and(query_param("api-key", API_KEY))
        .and(query_param("format", "json"))
        .and(query_param("offset", offset.to_string()))
        .and(query_param("limit", limit.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

async fn forbid_offset(server: &MockServer, offset: usize) {
    Mock::given(method("GET"))
        .and(query_param("offset", offset.to_string()))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_all_stops_after_short_page() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 100, nested(rows(0..100))).await;
    mount_page(&server, 100, 100, nested(rows(100..200))).await;
    mount_page(&server, 200, 100, nested(rows(200..250))).await;
    forbid_offset(&server, 250).await;

    let dataset = client(&server).fetch_all(Format::Json, 100).await;

    assert!(dataset.is_complete());
    let expected: Vec<String> = (0..250).map(|i| i.to_string()).collect();
    assert_eq!(serials(dataset.records()), expected);
}

#[tokio::test]
async fn test_fetch_all_keeps_first_page_when_second_fails() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 100, nested(rows(0..100))).await;
    Mock::given(method("GET"))
        .and(query_param("offset", "100"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let dataset = client(&server).fetch_all(Format::Json, 100).await;

    assert_eq!(dataset.records().len(), 100);
    assert_eq!(serials(&dataset.records()[..2]), ["0", "1"]);
    match dataset.failure() {
        Some(Error::Api(ApiError::Http { status, message })) => {
            assert_eq!(*status, 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected an HTTP failure, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_all_stops_on_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 50, nested(rows(0..50))).await;
    mount_page(&server, 50, 50, nested(rows(50..100))).await;
    mount_page(&server, 100, 50, nested(Vec::new())).await;
    forbid_offset(&server, 150).await;

    let dataset = client(&server).fetch_all(Format::Json, 50).await;

    assert!(dataset.is_complete());
    assert_eq!(dataset.records().len(), 100);
}

#[tokio::test]
async fn test_fetch_all_stops_at_advertised_total() {
    let server = MockServer::start().await;
    let page = |records: Vec<serde_json::Value>| json!({"result": {"records": records, "total": "200"}});
    mount_page(&server, 0, 100, page(rows(0..100))).await;
    mount_page(&server, 100, 100, page(rows(100..200))).await;
    forbid_offset(&server, 200).await;

    let dataset = client(&server).fetch_all(Format::Json, 100).await;

    assert!(dataset.is_complete());
    assert_eq!(dataset.records().len(), 200);
}

#[tokio::test]
async fn test_advertised_total_outlasts_capped_pages() {
    let server = MockServer::start().await;
    let page = |records: Vec<serde_json::Value>| json!({"result": {"records": records, "total": 150}});
    mount_page(&server, 0, 100, page(rows(0..50))).await;
    mount_page(&server, 50, 100, page(rows(50..100))).await;
    mount_page(&server, 100, 100, page(rows(100..150))).await;
    forbid_offset(&server, 150).await;

    let dataset = client(&server).fetch_all(Format::Json, 100).await;

    assert!(dataset.is_complete());
    let expected: Vec<String> = (0..150).map(|i| i.to_string()).collect();
    assert_eq!(serials(dataset.records()), expected);
}

#[tokio::test]
async fn test_fetch_all_with_top_level_record_path() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 10, top_level(rows(0..4), 4)).await;

    let client = WellsClient::builder()
        .api_key(API_KEY)
        .url(format!("{}{}", server.uri(), RESOURCE))
        .paged_record_path(RecordPath::TopLevel)
        .build()
        .unwrap();
    let dataset = client.fetch_all(Format::Json, 10).await;

    assert_eq!(serials(dataset.records()), ["0", "1", "2", "3"]);
}

#[tokio::test]
async fn test_nested_path_ignores_top_level_records() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 10, top_level(rows(0..4), 4)).await;

    let dataset = client(&server).fetch_all(Format::Json, 10).await;

    assert!(dataset.is_complete());
    assert!(dataset.records().is_empty());
}

#[tokio::test]
async fn test_pages_yield_increasing_offsets() {
    let server = MockServer::start().await;
    mount_page(&server, 0, 2, nested(rows(0..2))).await;
    mount_page(&server, 2, 2, nested(rows(2..4))).await;
    mount_page(&server, 4, 2, nested(rows(4..5))).await;

    let client = client(&server);
    let mut pages = client.pages(2);
    let mut offsets = Vec::new();
    while let Some(page) = pages.next().await {
        offsets.push(page.unwrap().offset());
    }

    assert_eq!(offsets, [0, 2, 4]);
    assert_eq!(pages.fetched(), 5);
}

#[tokio::test]
async fn test_fetch_all_raw_formats_are_single_page() {
    let server = MockServer::start().await;
    let body = "_sl__no_,status,gujarat\n1,Total Flowing Wells,3547\n";
    Mock::given(method("GET"))
        .and(query_param("format", "csv"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let dataset = client(&server).fetch_all(Format::Csv, 100).await;

    assert!(dataset.is_complete());
    assert_eq!(dataset.payload(), &Payload::Csv(body.to_string()));
    assert!(dataset.records().is_empty());
}

#[tokio::test]
async fn test_fetch_all_rejects_zero_batch() {
    let server = MockServer::start().await;
    forbid_offset(&server, 0).await;

    let dataset = client(&server).fetch_all(Format::Json, 0).await;

    assert!(dataset.records().is_empty());
    assert!(matches!(
        dataset.failure(),
        Some(Error::Validation(ValidationError::InvalidLimit))
    ));
}
