//! Per-state well totals.
//!
//! The dataset has one row per well status, with a column per state. Map and
//! dashboard renderers pick one row (usually "Total Flowing Wells") and plot
//! each state's count; this module does that selection.

use log::debug;

use crate::WellsClient;
use crate::api::FILTER_FETCH_LIMIT;
use crate::error::Error;
use crate::model::Record;
use crate::model::State;

/// Status marker of the row holding flowing-well totals.
pub const TOTAL_FLOWING_WELLS: &str = "Total Flowing Wells";

/// One state's well count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateTotal {
    pub state: State,
    pub wells: f64,
}

/// Returns the first record whose `status` contains `marker`.
pub fn find_by_status<'a>(records: &'a [Record], marker: &str) -> Option<&'a Record> {
    records
        .iter()
        .find(|record| record.text("status").is_some_and(|status| status.contains(marker)))
}

/// Every state's count in `record`, largest first. Ties keep column order.
pub fn state_totals(record: &Record) -> Vec<StateTotal> {
    let mut totals: Vec<StateTotal> = State::ALL
        .into_iter()
        .map(|state| StateTotal {
            state,
            wells: record.number(state.field()),
        })
        .collect();
    totals.sort_by(|a, b| b.wells.total_cmp(&a.wells));
    totals
}

impl WellsClient {
    /// Per-state totals from the "Total Flowing Wells" row.
    ///
    /// Fetches one page of up to [`FILTER_FETCH_LIMIT`] records, read from the
    /// top-level `records` like any single request. Returns `None` when no
    /// row carries the marker.
    pub async fn flowing_well_totals(&self) -> Result<Option<Vec<StateTotal>>, Error> {
        let page = self.get_page(0, FILTER_FETCH_LIMIT).await?;
        let Some(row) = find_by_status(page.records(), TOTAL_FLOWING_WELLS) else {
            debug!("no {:?} row in {} records", TOTAL_FLOWING_WELLS, page.len());
            return Ok(None);
        };
        Ok(Some(state_totals(row)))
    }
}
