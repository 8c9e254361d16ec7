pub mod memory;

use crate::record::{NewRecord, Record, RecordId, RecordUpdate};
use std::{fmt::Debug, result::Result as StdResult};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("RecordDoesntExist({0})")]
pub struct RecordDoesntExist(pub RecordId);
pub type UpdateResult<T> = StdResult<T, RecordDoesntExist>;

/// Shared handle to a collection of insured persons.
///
/// Clones refer to the same records. Every method is atomic with respect to
/// the other methods, so `update` cannot interleave with a concurrent `delete`.
pub trait RecordsRepository: Debug + Clone + Sync + Send + 'static {
    /// Stores a new record under the next id and returns that id.
    fn add_record(&self, record: NewRecord) -> RecordId;
    /// Snapshot of all records in ascending id order.
    fn get_records(&self) -> Vec<Record>;
    fn get(&self, record_id: RecordId) -> Option<Record>;
    /// Records whose name or surname contains `query`, ascending id order.
    fn find(&self, query: &str) -> Vec<Record>;
    /// Replaces name, surname and phone. Returns the updated record.
    fn update(&self, record_id: RecordId, update: RecordUpdate) -> UpdateResult<Record>;
    /// Returns whether a record was removed.
    fn delete(&self, record_id: RecordId) -> bool;
}
