// /src/lib.rs
//
// Log-entry payload handling for a replicated log: entries travel with
// their application payload inline or detached, and the detached form keeps
// reporting the size the inlined entry had so accounting stays stable.

pub mod error;
pub mod raft;
pub mod raft_proto;
pub mod statemachine;

pub use error::Error;
pub use raft::{
    attach_state_machine_data, decode_log_entry, detach_state_machine_data,
    is_configuration_entry, is_state_machine_entry, needs_state_machine_data, serialized_size,
};
pub use statemachine::{resolve_state_machine_data, InMemoryDataStore, StateMachineDataStore};
