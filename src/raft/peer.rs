use std::fmt;

use bytes::Bytes;

use crate::raft_proto::{ConfigurationEntryProto, RaftGroupIdProto, RaftGroupProto, RaftPeerProto};

/// Opaque identity of a peer in the group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RaftPeerId(Bytes);

impl RaftPeerId {
    pub fn new(id: impl Into<Bytes>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }
}

impl fmt::Display for RaftPeerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A peer and the address it can be reached at, when known.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaftPeer {
    pub id: RaftPeerId,
    pub address: Option<String>,
}

impl RaftPeer {
    pub fn new(id: impl Into<Bytes>, address: Option<String>) -> Self {
        Self {
            id: RaftPeerId::new(id),
            address,
        }
    }

    pub fn to_proto(&self) -> RaftPeerProto {
        RaftPeerProto {
            id: self.id.as_bytes().clone(),
            // absent address travels as the proto default
            address: self.address.clone().unwrap_or_default(),
        }
    }

    pub fn from_proto(proto: RaftPeerProto) -> Self {
        let address = if proto.address.is_empty() {
            None
        } else {
            Some(proto.address)
        };
        Self {
            id: RaftPeerId::new(proto.id),
            address,
        }
    }
}

/// Opaque identity of a replication group.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RaftGroupId(Bytes);

impl RaftGroupId {
    pub fn new(id: impl Into<Bytes>) -> Self {
        Self(id.into())
    }

    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    pub fn to_proto(&self) -> RaftGroupIdProto {
        RaftGroupIdProto { id: self.0.clone() }
    }

    pub fn from_proto(proto: RaftGroupIdProto) -> Self {
        Self(proto.id)
    }
}

impl fmt::Display for RaftGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}

/// A replication group: its identity plus current membership.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RaftGroup {
    pub id: RaftGroupId,
    pub peers: Vec<RaftPeer>,
}

impl RaftGroup {
    pub fn new(id: RaftGroupId, peers: Vec<RaftPeer>) -> Self {
        Self { id, peers }
    }

    pub fn to_proto(&self) -> RaftGroupProto {
        RaftGroupProto {
            group_id: Some(self.id.to_proto()),
            peers: self.peers.iter().map(RaftPeer::to_proto).collect(),
        }
    }

    pub fn from_proto(proto: RaftGroupProto) -> Self {
        Self {
            id: proto.group_id.map(RaftGroupId::from_proto).unwrap_or_else(|| RaftGroupId::new(Bytes::new())),
            peers: proto.peers.into_iter().map(RaftPeer::from_proto).collect(),
        }
    }
}

/// Build the membership-change body for a configuration log entry.
pub fn to_configuration_entry_proto(peers: &[RaftPeer], old_peers: &[RaftPeer]) -> ConfigurationEntryProto {
    ConfigurationEntryProto {
        peers: peers.iter().map(RaftPeer::to_proto).collect(),
        old_peers: old_peers.iter().map(RaftPeer::to_proto).collect(),
    }
}
