//! Filtered retrieval
//!
//! Client-side filters fetch one bulk JSON page and narrow it locally;
//! server-side filters send their parameters and return what the API gives.
//!
//! # Example
//!
//! ```ignore
//! let gujarat = client.filter_by_state("gujarat").await?;
//! let onshore = client.filter_by_offshore(false).await?;
//! let flowing = client.filter_by_status("Total Flowing Wells", Format::Csv).await?;
//! ```

use log::debug;

use crate::WellsClient;
use crate::api::query::Filter;
use crate::api::query::FilterStrategy;
use crate::api::query::OffshoreFilter;
use crate::api::query::RecordPath;
use crate::api::query::StateFilter;
use crate::api::query::StatusFilter;
use crate::api::query::WellsQuery;
use crate::error::Error;
use crate::model::Format;
use crate::model::Record;
use crate::model::State;
use crate::response::Payload;

/// Number of records fetched for a filtered request.
pub const FILTER_FETCH_LIMIT: usize = 1000;

impl WellsClient {
    /// Applies any filter.
    ///
    /// Client-side filters always fetch JSON, since CSV and XML payloads
    /// cannot be narrowed locally, and yield `Payload::Records`. Server-side
    /// filters honour `format`: JSON yields records read from `records`,
    /// CSV and XML yield the raw payload.
    pub async fn apply_filter(&self, filter: &dyn Filter, format: Format) -> Result<Payload, Error> {
        match filter.strategy() {
            FilterStrategy::ClientSide => self.filter_records(filter).await.map(Payload::Records),
            FilterStrategy::ServerSide if format == Format::Json => {
                let page = self
                    .get_page_at(0, FILTER_FETCH_LIMIT, RecordPath::TopLevel, &filter.params())
                    .await?;
                Ok(Payload::Records(page.into_records()))
            }
            FilterStrategy::ServerSide => {
                let query = WellsQuery::new()
                    .with_format(format)
                    .with_limit(FILTER_FETCH_LIMIT)
                    .with_filters(filter);
                self.get(&query).await
            }
        }
    }

    /// Fetches up to [`FILTER_FETCH_LIMIT`] records and keeps those `filter` matches.
    pub async fn filter_records(&self, filter: &dyn Filter) -> Result<Vec<Record>, Error> {
        let page = self
            .get_page_at(0, FILTER_FETCH_LIMIT, RecordPath::TopLevel, &filter.params())
            .await?;
        let kept = filter.apply(page.records());
        debug!("filter kept {} of {} records", kept.len(), page.len());
        Ok(kept)
    }

    /// Records where the state's well count is above zero.
    ///
    /// `state` is matched case-insensitively against [`State::keys`]; an
    /// unknown name fails before any request is sent.
    pub async fn filter_by_state(&self, state: &str) -> Result<Vec<Record>, Error> {
        let state: State = state.parse()?;
        self.filter_records(&StateFilter::new(state)).await
    }

    /// Offshore records (`offshore > 0`) or onshore ones (`offshore == 0`).
    pub async fn filter_by_offshore(&self, offshore: bool) -> Result<Vec<Record>, Error> {
        self.filter_records(&OffshoreFilter::new(offshore)).await
    }

    /// Records the API reports for `status`, in the requested format.
    ///
    /// Asks for up to [`FILTER_FETCH_LIMIT`] records from offset 0, the same
    /// bulk scope as the client-side filters, not the single-request default
    /// of 10.
    pub async fn filter_by_status(&self, status: &str, format: Format) -> Result<Payload, Error> {
        self.apply_filter(&StatusFilter::new(status), format).await
    }
}
