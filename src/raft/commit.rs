use std::fmt;

use crate::raft::peer::RaftPeer;
use crate::raft_proto::CommitInfoProto;

/// Record how far `peer` has committed.
pub fn to_commit_info_proto(peer: &RaftPeer, commit_index: u64) -> CommitInfoProto {
    CommitInfoProto {
        server: Some(peer.to_proto()),
        commit_index,
    }
}

impl fmt::Display for CommitInfoProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(server) = &self.server {
            write!(f, "{}", String::from_utf8_lossy(&server.id))?;
        }
        write!(f, ":c{}", self.commit_index)
    }
}

/// Render a batch of commit infos the way they appear in reply summaries.
pub fn fmt_commit_infos(infos: &[CommitInfoProto]) -> String {
    let rendered: Vec<String> = infos.iter().map(CommitInfoProto::to_string).collect();
    format!("[{}]", rendered.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;

    #[test]
    fn test_commit_info_renders_peer_and_index() {
        let peer = RaftPeer::new(Bytes::from_static(b"n0"), None);
        let info = to_commit_info_proto(&peer, 17);
        assert_eq!(info.to_string(), "n0:c17");
    }

    #[test]
    fn test_commit_info_collection_rendering() {
        let infos = vec![
            to_commit_info_proto(&RaftPeer::new(Bytes::from_static(b"n0"), None), 4),
            to_commit_info_proto(&RaftPeer::new(Bytes::from_static(b"n1"), None), 9),
        ];
        assert_eq!(fmt_commit_infos(&infos), "[n0:c4, n1:c9]");
        assert_eq!(fmt_commit_infos(&[]), "[]");
    }
}
