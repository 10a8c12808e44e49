//! Queries, filters and pagination.
//!
//! - [`WellsQuery`] - parameters for a single request
//! - [`Filter`] - client-side and server-side record filters
//! - [`Page`] - one page of records with its offset and limit
//! - [`Pages`] - async iterator over consecutive pages
//! - [`Dataset`] - everything `fetch_all` collected, plus any failure

mod builder;
mod filter;
mod page;
mod pages;

pub use builder::*;
pub use filter::*;
pub use page::*;
pub use pages::*;
