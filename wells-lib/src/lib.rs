//! Status of Wells API client library
//!
//! An async client for the Open Government Data "Status of Wells" resource:
//! paginated retrieval, state/offshore/status filtering, and JSON/CSV/XML
//! export of the resulting records.

pub mod api;
pub mod error;
pub mod export;
pub mod model;
pub mod response;
pub mod summary;

mod client;

pub use client::*;
pub use response::Payload;
