//! Record filters.
//!
//! Two strategies share the [`Filter`] trait:
//!
//! - client-side filters ([`StateFilter`], [`OffshoreFilter`]) run over a
//!   bulk fetch using coerced numeric comparisons;
//! - server-side filters ([`StatusFilter`], [`ParamFilter`]) are sent as
//!   `filters[<key>]=<value>` query parameters and trust the API's answer.

use crate::model::Record;
use crate::model::State;

/// Where a filter is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStrategy {
    /// Evaluated locally over fetched records.
    ClientSide,
    /// Forwarded to the API as query parameters.
    ServerSide,
}

/// A condition narrowing a set of records.
///
/// # Example
///
/// ```
/// use wells_lib::api::query::{Filter, FilterStrategy, StateFilter};
/// use wells_lib::model::{Record, State};
///
/// let records = vec![
///     Record::new().set("gujarat", "3547"),
///     Record::new().set("gujarat", "0"),
/// ];
///
/// let filter = StateFilter::new(State::Gujarat);
/// assert_eq!(filter.strategy(), FilterStrategy::ClientSide);
/// assert_eq!(filter.apply(&records), vec![records[0].clone()]);
/// ```
pub trait Filter: Send + Sync {
    /// Returns where this filter is evaluated.
    fn strategy(&self) -> FilterStrategy;

    /// Query parameters to send, as `(key, value)` pairs; each becomes
    /// `filters[key]=value`.
    fn params(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Returns `true` if the record passes. Server-side filters accept
    /// everything the API returned.
    fn matches(&self, _record: &Record) -> bool {
        true
    }

    /// Returns the matching records, in their original order.
    fn apply(&self, records: &[Record]) -> Vec<Record> {
        records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Client-side filters
// =============================================================================

/// Keeps records where the state's well count is above zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateFilter {
    state: State,
}

impl StateFilter {
    pub fn new(state: State) -> Self {
        Self { state }
    }

    pub fn state(&self) -> State {
        self.state
    }
}

impl Filter for StateFilter {
    fn strategy(&self) -> FilterStrategy {
        FilterStrategy::ClientSide
    }

    fn matches(&self, record: &Record) -> bool {
        record.number(self.state.field()) > 0.0
    }
}

/// Keeps offshore records (`offshore > 0`) or onshore ones (`offshore == 0`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffshoreFilter {
    offshore: bool,
}

impl OffshoreFilter {
    /// Field holding the offshore well count.
    pub const FIELD: &'static str = "offshore";

    pub fn new(offshore: bool) -> Self {
        Self { offshore }
    }

    pub fn offshore() -> Self {
        Self::new(true)
    }

    pub fn onshore() -> Self {
        Self::new(false)
    }
}

impl Filter for OffshoreFilter {
    fn strategy(&self) -> FilterStrategy {
        FilterStrategy::ClientSide
    }

    fn matches(&self, record: &Record) -> bool {
        let count = record.number(Self::FIELD);
        if self.offshore {
            count > 0.0
        } else {
            count == 0.0
        }
    }
}

// =============================================================================
// Server-side filters
// =============================================================================

/// Asks the API for records with a given status. No local post-filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFilter {
    status: String,
}

impl StatusFilter {
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

impl Filter for StatusFilter {
    fn strategy(&self) -> FilterStrategy {
        FilterStrategy::ServerSide
    }

    fn params(&self) -> Vec<(String, String)> {
        vec![("status".to_string(), self.status.clone())]
    }
}

/// Arbitrary `filters[<key>]=<value>` parameters.
///
/// ```
/// use wells_lib::api::query::{Filter, ParamFilter};
///
/// let filter = ParamFilter::new().param("gujarat", 1).param("offshore", 1);
/// assert_eq!(filter.params().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamFilter {
    params: Vec<(String, String)>,
}

impl ParamFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter (builder pattern).
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }
}

impl Filter for ParamFilter {
    fn strategy(&self) -> FilterStrategy {
        FilterStrategy::ServerSide
    }

    fn params(&self) -> Vec<(String, String)> {
        self.params.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new().set("_sl__no_", "1").set("gujarat", "3547").set("offshore", "12"),
            Record::new().set("_sl__no_", "2").set("gujarat", "0").set("offshore", "0"),
            Record::new().set("_sl__no_", "3").set("gujarat", "n/a"),
            Record::new().set("_sl__no_", "4").set("gujarat", 8).set("offshore", "abc"),
        ]
    }

    fn serials(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .map(|r| r.text("_sl__no_").unwrap())
            .collect()
    }

    #[test]
    fn test_state_filter() {
        let kept = StateFilter::new(State::Gujarat).apply(&sample());
        assert_eq!(serials(&kept), ["1", "4"]);
    }

    #[test]
    fn test_state_filter_uses_mapped_field() {
        let records = vec![
            Record::new().set("assam___arunachal_pradesh", "20"),
            Record::new().set("assam", "20"),
        ];
        let kept = StateFilter::new(State::Assam).apply(&records);
        assert_eq!(kept, vec![records[0].clone()]);
    }

    #[test]
    fn test_offshore_and_onshore_partition() {
        let records = sample();
        let offshore = OffshoreFilter::offshore().apply(&records);
        let onshore = OffshoreFilter::onshore().apply(&records);

        assert_eq!(serials(&offshore), ["1"]);
        // Missing and unparseable counts coerce to zero.
        assert_eq!(serials(&onshore), ["2", "3", "4"]);
    }

    #[test]
    fn test_offshore_filter_is_idempotent() {
        let records = sample();
        let before = records.clone();
        let filter = OffshoreFilter::offshore();

        let first = filter.apply(&records);
        let second = filter.apply(&records);

        assert_eq!(first, second);
        assert_eq!(records, before);
    }

    #[test]
    fn test_status_filter_is_server_side() {
        let filter = StatusFilter::new("Total Flowing Wells");

        assert_eq!(filter.strategy(), FilterStrategy::ServerSide);
        assert_eq!(
            filter.params(),
            vec![("status".to_string(), "Total Flowing Wells".to_string())]
        );
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_param_filter() {
        let filter = ParamFilter::new().param("gujarat", 1).param("offshore", "1");
        assert_eq!(
            filter.params(),
            vec![
                ("gujarat".to_string(), "1".to_string()),
                ("offshore".to_string(), "1".to_string())
            ]
        );
    }
}
