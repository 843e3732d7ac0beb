use bytes::Bytes;
use prost::Message;

use crate::raft_proto::{log_entry_proto::Body, LogEntryProto, StateMachineEntryProto};

/// True when the payload must be fetched from the state machine before the
/// entry can be applied or forwarded: the body is a state-machine entry
/// whose data was stripped and not yet substituted back.
pub fn needs_state_machine_data(entry: &LogEntryProto) -> bool {
    match &entry.body {
        Some(Body::StateMachineEntry(sm)) => sm.state_machine_data_attached && sm.data.is_empty(),
        _ => false,
    }
}

/// Logical serialized size of `entry`, independent of whether its payload is
/// currently resident.
///
/// Once an entry has been through [`detach_state_machine_data`] the cached
/// size is the answer; re-encoding a stripped entry would report the shrunk
/// representation and throw off every size-based accounting decision made
/// downstream.
pub fn serialized_size(entry: &LogEntryProto) -> u64 {
    match &entry.body {
        Some(Body::StateMachineEntry(sm)) if sm.state_machine_data_attached => {
            sm.serialized_protobuf_size
        }
        _ => entry.encoded_len() as u64,
    }
}

/// Strip the inline payload from a state-machine entry.
///
/// The returned entry keeps the same term/index/client coordinates, carries
/// an empty payload with the attached flag set, and caches the size the
/// fully inlined entry had so [`serialized_size`] keeps reporting it.
/// Entries with no payload to strip (configuration entries, bodies already
/// empty) come back unchanged, which also makes this idempotent.
pub fn detach_state_machine_data(entry: LogEntryProto) -> LogEntryProto {
    match &entry.body {
        Some(Body::StateMachineEntry(sm)) if !sm.data.is_empty() => {}
        _ => return entry,
    }

    // Snapshot the size while the payload is still inlined.
    let serialized_protobuf_size = entry.encoded_len() as u64;

    LogEntryProto {
        body: Some(Body::StateMachineEntry(StateMachineEntryProto {
            data: Bytes::new(),
            state_machine_data_attached: true,
            serialized_protobuf_size,
        })),
        ..entry
    }
}

/// Substitute payload bytes into a state-machine entry, leaving the attached
/// flag and the cached size untouched.
///
/// This is the caller-side half of the fetch path: after reading the bytes
/// back from the state machine, putting them into the detached entry clears
/// [`needs_state_machine_data`] without disturbing [`serialized_size`].
/// Entries with a non-state-machine body come back unchanged.
pub fn attach_state_machine_data(mut entry: LogEntryProto, data: Bytes) -> LogEntryProto {
    if let Some(Body::StateMachineEntry(sm)) = &mut entry.body {
        sm.data = data;
    }
    entry
}
