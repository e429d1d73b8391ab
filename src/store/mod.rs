//! # Record Store
//!
//! Process-local owner of every student record and of the id counter.
//!
//! - Ids are unique, monotonic and never reused after deletion
//! - Updates replace all non-id fields and never touch the id
//! - Reads hand out copies; nothing outside the store can mutate a record
//! - `NotFound` is the only store-level failure

mod errors;
mod record;
mod store;

pub use errors::{StoreError, StoreResult, ValidationError, ValidationResult};
pub use record::{Record, RecordFields, RecordInput};
pub use store::RecordStore;
