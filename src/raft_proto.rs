// Generated from protos/raftlog.proto, checked in so builds do not need
// protoc. Keep field numbers in sync with the .proto when editing.

/// One record in the replicated log. Exactly one body variant is set.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LogEntryProto {
    #[prost(uint64, tag = "1")]
    pub term: u64,
    #[prost(uint64, tag = "2")]
    pub index: u64,
    #[prost(bytes = "bytes", tag = "3")]
    pub client_id: ::prost::bytes::Bytes,
    #[prost(uint64, tag = "4")]
    pub call_id: u64,
    #[prost(oneof = "log_entry_proto::Body", tags = "5, 6")]
    pub body: ::core::option::Option<log_entry_proto::Body>,
}
/// Nested message and enum types in `LogEntryProto`.
pub mod log_entry_proto {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Body {
        #[prost(message, tag = "5")]
        StateMachineEntry(super::StateMachineEntryProto),
        #[prost(message, tag = "6")]
        ConfigurationEntry(super::ConfigurationEntryProto),
    }
}
/// The body variant carrying application payload. When the payload has been
/// stripped for out-of-band retrieval, state_machine_data_attached is set,
/// data is empty, and serialized_protobuf_size holds the size the fully
/// inlined entry had.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StateMachineEntryProto {
    #[prost(bytes = "bytes", tag = "1")]
    pub data: ::prost::bytes::Bytes,
    #[prost(bool, tag = "2")]
    pub state_machine_data_attached: bool,
    #[prost(uint64, tag = "3")]
    pub serialized_protobuf_size: u64,
}
/// Membership-change payload.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfigurationEntryProto {
    #[prost(message, repeated, tag = "1")]
    pub peers: ::prost::alloc::vec::Vec<RaftPeerProto>,
    #[prost(message, repeated, tag = "2")]
    pub old_peers: ::prost::alloc::vec::Vec<RaftPeerProto>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RaftPeerProto {
    #[prost(bytes = "bytes", tag = "1")]
    pub id: ::prost::bytes::Bytes,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RaftGroupIdProto {
    #[prost(bytes = "bytes", tag = "1")]
    pub id: ::prost::bytes::Bytes,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RaftGroupProto {
    #[prost(message, optional, tag = "1")]
    pub group_id: ::core::option::Option<RaftGroupIdProto>,
    #[prost(message, repeated, tag = "2")]
    pub peers: ::prost::alloc::vec::Vec<RaftPeerProto>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CommitInfoProto {
    #[prost(message, optional, tag = "1")]
    pub server: ::core::option::Option<RaftPeerProto>,
    #[prost(uint64, tag = "2")]
    pub commit_index: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RaftRpcRequestProto {
    #[prost(bytes = "bytes", tag = "1")]
    pub requestor_id: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "2")]
    pub reply_id: ::prost::bytes::Bytes,
    #[prost(uint64, tag = "3")]
    pub call_id: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RaftRpcReplyProto {
    #[prost(bytes = "bytes", tag = "1")]
    pub requestor_id: ::prost::bytes::Bytes,
    #[prost(bytes = "bytes", tag = "2")]
    pub reply_id: ::prost::bytes::Bytes,
    #[prost(uint64, tag = "3")]
    pub call_id: u64,
    #[prost(bool, tag = "4")]
    pub success: bool,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RequestVoteReplyProto {
    #[prost(message, optional, tag = "1")]
    pub server_reply: ::core::option::Option<RaftRpcReplyProto>,
    #[prost(uint64, tag = "2")]
    pub term: u64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AppendEntriesReplyProto {
    #[prost(message, optional, tag = "1")]
    pub server_reply: ::core::option::Option<RaftRpcReplyProto>,
    #[prost(uint64, tag = "2")]
    pub term: u64,
    #[prost(uint64, tag = "3")]
    pub next_index: u64,
    #[prost(enumeration = "AppendResult", tag = "4")]
    pub result: i32,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AppendResult {
    Success = 0,
    NotLeader = 1,
    Inconsistency = 2,
}
impl AppendResult {
    /// String value of the enum field names used in the ProtoBuf definition.
    ///
    /// The values are not transformed in any way and thus are considered stable
    /// (if the ProtoBuf definition does not change) and safe for programmatic use.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            AppendResult::Success => "SUCCESS",
            AppendResult::NotLeader => "NOT_LEADER",
            AppendResult::Inconsistency => "INCONSISTENCY",
        }
    }
    /// Creates an enum from field names used in the ProtoBuf definition.
    pub fn from_str_name(value: &str) -> ::core::option::Option<Self> {
        match value {
            "SUCCESS" => Some(Self::Success),
            "NOT_LEADER" => Some(Self::NotLeader),
            "INCONSISTENCY" => Some(Self::Inconsistency),
            _ => None,
        }
    }
}
