pub mod cache;

// Re-exports
pub use cache::InMemoryDataStore;

use bytes::Bytes;

use crate::error::Error;
use crate::raft::detach::{attach_state_machine_data, needs_state_machine_data};
use crate::raft_proto::LogEntryProto;

/// Source of truth for payload bytes that have been stripped from log
/// entries, keyed by the entry identity.
pub trait StateMachineDataStore {
    fn read(&self, term: u64, index: u64) -> Option<Bytes>;
    fn write(&self, term: u64, index: u64, data: Bytes);
    fn remove(&self, term: u64, index: u64);
}

/// Materialize `entry`: entries that still carry their payload pass through
/// unchanged; detached entries get their bytes read back from `store` and
/// substituted in.
pub fn resolve_state_machine_data<S>(store: &S, entry: LogEntryProto) -> Result<LogEntryProto, Error>
where
    S: StateMachineDataStore + ?Sized,
{
    if !needs_state_machine_data(&entry) {
        return Ok(entry);
    }

    let data = store
        .read(entry.term, entry.index)
        .ok_or(Error::StateMachineDataNotFound {
            term: entry.term,
            index: entry.index,
        })?;

    Ok(attach_state_machine_data(entry, data))
}
