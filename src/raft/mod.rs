pub mod commit;
pub mod detach;
pub mod entry;
pub mod peer;
pub mod rpc;

pub use detach::{
    attach_state_machine_data, detach_state_machine_data, needs_state_machine_data,
    serialized_size,
};
pub use entry::{decode_log_entry, is_configuration_entry, is_state_machine_entry};
pub use peer::{RaftGroup, RaftGroupId, RaftPeer, RaftPeerId};
