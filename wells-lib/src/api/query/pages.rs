//! Async iterator over offset/limit pages, and the `fetch_all` driver.

use log::debug;
use log::warn;

use super::Page;
use super::RecordPath;
use super::WellsQuery;
use crate::WellsClient;
use crate::error::Error;
use crate::error::ValidationError;
use crate::model::Format;
use crate::model::Record;
use crate::response::Payload;

/// Default number of records requested per page by `fetch_all`.
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Async iterator that yields consecutive pages of JSON records.
///
/// Each request starts at the number of records fetched so far, so offsets
/// are strictly increasing and never overlap. Iteration ends after:
///
/// 1. a failed request (the error is yielded once);
/// 2. an empty page (not yielded);
/// 3. a page that brings the count up to the advertised `total`;
/// 4. a page shorter than the batch size, when no `total` was advertised.
///
/// The short-page rule is a heuristic. An upstream that caps its page size
/// below `batch_size` returns short pages long before the end, so an
/// advertised total always takes precedence over it.
///
/// # Example
///
/// ```ignore
/// let mut pages = client.pages(100);
///
/// while let Some(page) = pages.next().await {
///     let page = page?;
///     for record in page.records() {
///         println!("{:?}", record.get("status"));
///     }
/// }
/// ```
pub struct Pages<'a> {
    /// Reference to the client for making requests.
    client: &'a WellsClient,
    /// Records requested per page.
    batch_size: usize,
    /// Where records sit in each response.
    path: RecordPath,
    /// Records fetched so far; also the next offset.
    fetched: usize,
    /// Whether we've exhausted all pages.
    done: bool,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(client: &'a WellsClient, batch_size: usize, path: RecordPath) -> Self {
        Self {
            client,
            batch_size,
            path,
            fetched: 0,
            done: false,
        }
    }

    /// Returns the number of records yielded so far.
    pub fn fetched(&self) -> usize {
        self.fetched
    }

    /// Fetches the next page of results.
    ///
    /// Returns `None` when all pages have been consumed.
    pub async fn next(&mut self) -> Option<Result<Page, Error>> {
        if self.done {
            return None;
        }

        if self.batch_size == 0 {
            self.done = true;
            return Some(Err(ValidationError::InvalidLimit.into()));
        }

        let offset = self.fetched;
        let page = match self
            .client
            .get_page_at(offset, self.batch_size, self.path, &[])
            .await
        {
            Ok(page) => page,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        if page.is_empty() {
            debug!("empty page at offset {}, done", offset);
            self.done = true;
            return None;
        }

        self.fetched += page.len();

        match page.total_count() {
            Some(total) if self.fetched >= total => {
                debug!("reached advertised total {} at offset {}, done", total, offset);
                self.done = true;
            }
            Some(_) => {}
            None if page.is_short() => {
                debug!("short page ({} < {}) at offset {}, done", page.len(), self.batch_size, offset);
                self.done = true;
            }
            None => {}
        }

        Some(Ok(page))
    }
}

/// Everything one `fetch_all` call collected.
///
/// A failure part-way through does not discard earlier pages: the records
/// fetched so far stay in the payload and the error is kept alongside.
#[derive(Debug)]
pub struct Dataset {
    payload: Payload,
    failure: Option<Error>,
}

impl Dataset {
    /// A dataset fetched without errors.
    pub fn complete(payload: Payload) -> Self {
        Self {
            payload,
            failure: None,
        }
    }

    /// A dataset cut short by `failure`.
    pub fn partial(payload: Payload, failure: Error) -> Self {
        Self {
            payload,
            failure: Some(failure),
        }
    }

    /// Returns the collected payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Returns the collected records; empty for raw CSV/XML payloads.
    pub fn records(&self) -> &[Record] {
        self.payload.records().unwrap_or_default()
    }

    /// Returns the error that stopped retrieval, if any.
    pub fn failure(&self) -> Option<&Error> {
        self.failure.as_ref()
    }

    /// Returns `true` if retrieval ran to the end of the data.
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }

    /// Splits into the payload and the failure.
    pub fn into_parts(self) -> (Payload, Option<Error>) {
        (self.payload, self.failure)
    }
}

impl WellsClient {
    /// Returns an iterator over JSON pages of `batch_size` records, reading
    /// records at the client's paged record path.
    pub fn pages(&self, batch_size: usize) -> Pages<'_> {
        Pages::new(self, batch_size, self.paged_record_path())
    }

    /// Fetches every record, page by page.
    ///
    /// JSON is paginated and decoded into records. CSV and XML are not: a
    /// single page of `batch_size` records is fetched and returned raw.
    ///
    /// Never fails outright; check [`Dataset::failure`].
    pub async fn fetch_all(&self, format: Format, batch_size: usize) -> Dataset {
        if format != Format::Json {
            let query = WellsQuery::new().with_format(format).with_limit(batch_size);
            return match self.get(&query).await {
                Ok(payload) => Dataset::complete(payload),
                Err(e) => {
                    warn!("Error fetching {} data: {}", format, e);
                    Dataset::partial(Payload::Records(Vec::new()), e)
                }
            };
        }

        let mut pages = self.pages(batch_size);
        let mut records: Vec<Record> = Vec::new();

        while let Some(page) = pages.next().await {
            match page {
                Ok(page) => records.extend(page.into_records()),
                Err(e) => {
                    warn!("Error at offset {}: {}", records.len(), e);
                    return Dataset::partial(Payload::Records(records), e);
                }
            }
        }

        debug!("fetched {} records", records.len());
        Dataset::complete(Payload::Records(records))
    }
}
