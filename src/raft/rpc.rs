//! Human-readable summaries of RPC request/reply protos, for embedders'
//! own log lines.

use std::fmt;

use crate::raft_proto::{
    AppendEntriesReplyProto, RaftRpcReplyProto, RaftRpcRequestProto, RequestVoteReplyProto,
};

impl fmt::Display for RaftRpcRequestProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{}#{}",
            String::from_utf8_lossy(&self.requestor_id),
            String::from_utf8_lossy(&self.reply_id),
            self.call_id
        )
    }
}

impl fmt::Display for RaftRpcReplyProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<-{}#{}:{}",
            String::from_utf8_lossy(&self.requestor_id),
            String::from_utf8_lossy(&self.reply_id),
            self.call_id,
            if self.success { "OK" } else { "FAIL" }
        )
    }
}

impl fmt::Display for RequestVoteReplyProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reply) = &self.server_reply {
            write!(f, "{}", reply)?;
        }
        write!(f, "-t{}", self.term)
    }
}

impl fmt::Display for AppendEntriesReplyProto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reply) = &self.server_reply {
            write!(f, "{}", reply)?;
        }
        write!(
            f,
            "-t{}, nextIndex={}, result: {}",
            self.term,
            self.next_index,
            self.result().as_str_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use crate::raft_proto::{
        AppendEntriesReplyProto, AppendResult, RaftRpcReplyProto, RaftRpcRequestProto,
        RequestVoteReplyProto,
    };

    fn reply(success: bool) -> RaftRpcReplyProto {
        RaftRpcReplyProto {
            requestor_id: Bytes::from_static(b"n0"),
            reply_id: Bytes::from_static(b"n1"),
            call_id: 12,
            success,
        }
    }

    #[test]
    fn test_request_summary() {
        let req = RaftRpcRequestProto {
            requestor_id: Bytes::from_static(b"n0"),
            reply_id: Bytes::from_static(b"n1"),
            call_id: 12,
        };
        assert_eq!(req.to_string(), "n0->n1#12");
    }

    #[test]
    fn test_reply_summary() {
        assert_eq!(reply(true).to_string(), "n0<-n1#12:OK");
        assert_eq!(reply(false).to_string(), "n0<-n1#12:FAIL");
    }

    #[test]
    fn test_vote_reply_summary() {
        let vote = RequestVoteReplyProto {
            server_reply: Some(reply(true)),
            term: 3,
        };
        assert_eq!(vote.to_string(), "n0<-n1#12:OK-t3");
    }

    #[test]
    fn test_append_reply_summary() {
        let mut append = AppendEntriesReplyProto {
            server_reply: Some(reply(false)),
            term: 5,
            next_index: 80,
            result: 0,
        };
        append.set_result(AppendResult::Inconsistency);
        assert_eq!(
            append.to_string(),
            "n0<-n1#12:FAIL-t5, nextIndex=80, result: INCONSISTENCY"
        );
    }
}
