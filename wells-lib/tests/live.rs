//! Integration tests against the real data.gov.in endpoint.
//!
//! These tests need network access and an API key, and are ignored by
//! default. To run them, create a `.env` file in the wells-lib directory with:
//!
//! ```env
//! WELLS_API_KEY=your-api-key
//! # Optional, defaults to the Status of Wells resource
//! WELLS_BASE_URL=https://api.data.gov.in/resource/0b344af7-b389-4e37-bf49-b4f1e59bbc49
//! ```
//!
//! Then run: `cargo test -p wells-lib --test live -- --ignored`

use std::env;

use wells_lib::WellsClient;
use wells_lib::model::Format;
use wells_lib::summary;

fn load_client() -> Option<WellsClient> {
    let _ = dotenvy::dotenv();

    let api_key = env::var("WELLS_API_KEY").ok()?;
    let mut builder = WellsClient::builder().api_key(api_key);
    if let Ok(url) = env::var("WELLS_BASE_URL") {
        builder = builder.url(url);
    }
    builder.build().ok()
}

#[tokio::test]
#[ignore = "requires network access and WELLS_API_KEY in .env"]
async fn test_first_page() {
    let client = load_client().expect("Missing WELLS_API_KEY. See module docs.");

    let page = client.get_page(0, 5).await.expect("Request failed");

    assert!(page.len() <= 5);
    assert!(!page.is_empty(), "the resource should not be empty");
    println!("Sample record: {:?}", page.records()[0]);
}

#[tokio::test]
#[ignore = "requires network access and WELLS_API_KEY in .env"]
async fn test_state_filter_and_totals() {
    let client = load_client().expect("Missing WELLS_API_KEY. See module docs.");

    let gujarat = client.filter_by_state("gujarat").await.expect("Request failed");
    assert!(gujarat.iter().all(|r| r.number("gujarat") > 0.0));

    if let Some(row) = summary::find_by_status(&gujarat, summary::TOTAL_FLOWING_WELLS) {
        for total in summary::state_totals(row) {
            println!("{:<28} {}", total.state.display_name(), total.wells);
        }
    }
}

#[tokio::test]
#[ignore = "requires network access and WELLS_API_KEY in .env"]
async fn test_csv_preview() {
    let client = load_client().expect("Missing WELLS_API_KEY. See module docs.");

    let dataset = client.fetch_all(Format::Csv, 3).await;

    assert!(dataset.is_complete(), "{:?}", dataset.failure());
    println!("{}", dataset.payload());
}
