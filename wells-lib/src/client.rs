//! Main WellsClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;

use crate::api::decode;
use crate::api::decode_json;
use crate::api::query::Page;
use crate::api::query::RecordPath;
use crate::api::query::WellsQuery;
use crate::error::ApiError;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Format;
use crate::response::Payload;

/// The Status of Wells resource on the Open Government Data platform.
pub const DEFAULT_BASE_URL: &str =
    "https://api.data.gov.in/resource/0b344af7-b389-4e37-bf49-b4f1e59bbc49";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The client for the Status of Wells API.
///
/// Cheap to clone (uses `Arc` internally). Configuration is fixed once
/// built; the only state is the reused HTTP connection pool.
///
/// # Example
///
/// ```ignore
/// use wells_lib::WellsClient;
///
/// let client = WellsClient::builder()
///     .api_key("my-key")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let gujarat = client.filter_by_state("gujarat").await?;
/// ```
#[derive(Clone)]
pub struct WellsClient {
    inner: Arc<WellsClientInner>,
}

struct WellsClientInner {
    base_url: Url,
    api_key: String,
    http_client: Client,
    timeout: Duration,
    paged_record_path: RecordPath,
}

/// A response body that passed the status check but has not been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The format that was requested.
    pub format: Format,
    /// HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: String,
}

impl RawResponse {
    /// Decodes the body in the requested format.
    pub fn decode(&self) -> Result<Payload, Error> {
        decode(self.format, &self.body)
    }
}

impl WellsClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> WellsClientBuilder<Missing> {
        WellsClientBuilder::new()
    }

    /// Returns the endpoint URL.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Returns the record path used for multi-page retrieval.
    pub fn paged_record_path(&self) -> RecordPath {
        self.inner.paged_record_path
    }

    /// Fetches one page of raw data.
    ///
    /// Sends `api-key`, `format`, `offset` and `limit`, plus one
    /// `filters[<key>]=<value>` entry per filter pair. Non-success statuses,
    /// timeouts and network failures are returned as [`ApiError`]s; nothing
    /// is retried.
    pub async fn fetch_page(
        &self,
        format: Format,
        offset: usize,
        limit: usize,
        filters: &[(String, String)],
    ) -> Result<RawResponse, Error> {
        if limit == 0 {
            return Err(ValidationError::InvalidLimit.into());
        }

        let mut params: Vec<(String, String)> = vec![
            ("api-key".to_string(), self.inner.api_key.clone()),
            ("format".to_string(), format.as_str().to_string()),
            ("offset".to_string(), offset.to_string()),
            ("limit".to_string(), limit.to_string()),
        ];
        params.extend(
            filters
                .iter()
                .map(|(key, value)| (format!("filters[{}]", key), value.clone())),
        );

        debug!(
            "GET {} format={} offset={} limit={} filters={:?}",
            self.inner.base_url.path(),
            format,
            offset,
            limit,
            filters
        );

        let timeout = self.inner.timeout;
        let response = self
            .inner
            .http_client
            .get(self.inner.base_url.clone())
            .query(&params)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), body).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(e, timeout))?;
        debug!("HTTP {} ({} bytes)", status.as_u16(), body.len());

        Ok(RawResponse {
            format,
            status: status.as_u16(),
            body,
        })
    }

    /// Runs a single request and decodes the response.
    pub async fn get(&self, query: &WellsQuery) -> Result<Payload, Error> {
        self.fetch_page(query.format, query.offset, query.limit, &query.filters)
            .await?
            .decode()
    }

    /// Fetches one JSON page with records at the top level (`records`).
    pub async fn get_page(&self, offset: usize, limit: usize) -> Result<Page, Error> {
        self.get_page_at(offset, limit, RecordPath::TopLevel, &[]).await
    }

    /// Fetches one JSON page and selects the records at `path`.
    pub async fn get_page_at(
        &self,
        offset: usize,
        limit: usize,
        path: RecordPath,
        filters: &[(String, String)],
    ) -> Result<Page, Error> {
        let raw = self.fetch_page(Format::Json, offset, limit, filters).await?;
        let doc = decode_json(&raw.body)?;
        Ok(Page::from_json(&doc, path, offset, limit)?)
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`WellsClient`].
///
/// The API key is required and has no default; the builder only offers
/// `build()` once it is set.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use wells_lib::WellsClient;
///
/// let client = WellsClient::builder()
///     .api_key("my-key")
///     .url("http://localhost:8080/resource/wells")
///     .timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.base_url().path(), "/resource/wells");
/// ```
pub struct WellsClientBuilder<Key> {
    api_key: Key,
    url: String,
    timeout: Duration,
    connect_timeout: Option<Duration>,
    paged_record_path: RecordPath,
    http_client: Option<Client>,
}

impl WellsClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_key: Missing,
            url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: None,
            paged_record_path: RecordPath::Nested,
            http_client: None,
        }
    }

    /// Sets the API key sent with every request.
    pub fn api_key(self, key: impl Into<String>) -> WellsClientBuilder<Set<String>> {
        WellsClientBuilder {
            api_key: Set(key.into()),
            url: self.url,
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            paged_record_path: self.paged_record_path,
            http_client: self.http_client,
        }
    }
}

impl Default for WellsClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> WellsClientBuilder<K> {
    /// Sets the endpoint URL.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`].
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the per-request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets where multi-page retrieval looks for records.
    ///
    /// Defaults to [`RecordPath::Nested`] (`result.records`).
    pub fn paged_record_path(mut self, path: RecordPath) -> Self {
        self.paged_record_path = path;
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl WellsClientBuilder<Set<String>> {
    /// Builds the [`WellsClient`].
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be created.
    pub fn build(self) -> Result<WellsClient, Error> {
        let base_url =
            Url::parse(&self.url).map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::Network)?
            }
        };

        Ok(WellsClient {
            inner: Arc::new(WellsClientInner {
                base_url,
                api_key: self.api_key.0,
                http_client,
                timeout: self.timeout,
                paged_record_path: self.paged_record_path,
            }),
        })
    }
}
