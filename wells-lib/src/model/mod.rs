//! Record model

mod format;
mod record;
mod record_serde;
mod state;
mod value;

pub use format::*;
pub use record::*;
pub use state::*;
pub use value::*;
