//! Web API operations

mod decode;
mod filtering;
pub mod query;
mod xml;

pub use decode::*;
pub use filtering::*;
pub use xml::*;
