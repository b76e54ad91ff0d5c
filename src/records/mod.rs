//! # Record Store
//!
//! In-memory, insertion-ordered collection of analysis records keyed by
//! their original string value.
//!
//! - Append-only apart from value-keyed deletion
//! - `value` is unique while present
//! - Lookups and filters are linear scans

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult};
pub use record::Record;
pub use store::RecordStore;
