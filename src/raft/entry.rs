use bytes::Bytes;
use prost::Message;

use crate::error::Error;
use crate::raft_proto::{
    log_entry_proto::Body, ConfigurationEntryProto, LogEntryProto, StateMachineEntryProto,
};

/// Build a fresh state-machine body around `data`.
///
/// Fresh bodies always carry their payload inline: the attached flag is
/// clear and no size has been cached yet.
pub fn state_machine_entry(data: impl Into<Bytes>) -> StateMachineEntryProto {
    StateMachineEntryProto {
        data: data.into(),
        state_machine_data_attached: false,
        serialized_protobuf_size: 0,
    }
}

/// Assemble a log entry from a body and its log/client coordinates.
pub fn log_entry(
    body: Body,
    term: u64,
    index: u64,
    client_id: impl Into<Bytes>,
    call_id: u64,
) -> LogEntryProto {
    LogEntryProto {
        term,
        index,
        client_id: client_id.into(),
        call_id,
        body: Some(body),
    }
}

/// A log entry whose payload is the given application data.
pub fn state_machine_log_entry(
    data: impl Into<Bytes>,
    term: u64,
    index: u64,
    client_id: impl Into<Bytes>,
    call_id: u64,
) -> LogEntryProto {
    log_entry(
        Body::StateMachineEntry(state_machine_entry(data)),
        term,
        index,
        client_id,
        call_id,
    )
}

/// A log entry carrying a membership change.
pub fn configuration_log_entry(
    conf: ConfigurationEntryProto,
    term: u64,
    index: u64,
    client_id: impl Into<Bytes>,
    call_id: u64,
) -> LogEntryProto {
    log_entry(Body::ConfigurationEntry(conf), term, index, client_id, call_id)
}

pub fn is_state_machine_entry(entry: &LogEntryProto) -> bool {
    matches!(entry.body, Some(Body::StateMachineEntry(_)))
}

/// True iff the entry carries a membership change; callers route such
/// entries to configuration handling instead of the application state path.
pub fn is_configuration_entry(entry: &LogEntryProto) -> bool {
    matches!(entry.body, Some(Body::ConfigurationEntry(_)))
}

/// Decode a log entry from its wire form.
///
/// A well-formed entry carries exactly one body variant; bytes that decode
/// to an entry with no body set are rejected here rather than surfacing a
/// half-built record to the rest of the pipeline.
pub fn decode_log_entry(buf: &[u8]) -> Result<LogEntryProto, Error> {
    let entry = LogEntryProto::decode(buf)?;
    if entry.body.is_none() {
        return Err(Error::MissingBody { index: entry.index });
    }
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entries_start_detachable_but_not_detached() {
        let entry = state_machine_log_entry(Bytes::from_static(b"payload"), 1, 1, Bytes::from_static(b"c"), 1);
        match &entry.body {
            Some(Body::StateMachineEntry(sm)) => {
                assert_eq!(sm.data, Bytes::from_static(b"payload"));
                assert!(!sm.state_machine_data_attached);
                assert_eq!(sm.serialized_protobuf_size, 0);
            }
            other => panic!("Expected state machine body, got {:?}", other),
        }
        assert!(is_state_machine_entry(&entry));
        assert!(!is_configuration_entry(&entry));
    }

    #[test]
    fn test_configuration_entry_discriminant() {
        let entry = configuration_log_entry(ConfigurationEntryProto::default(), 2, 5, Bytes::from_static(b"c"), 3);
        assert!(is_configuration_entry(&entry));
        assert!(!is_state_machine_entry(&entry));
    }

    #[test]
    fn test_decode_round_trip() {
        let entry = state_machine_log_entry(Bytes::from_static(b"abc"), 4, 9, Bytes::from_static(b"client"), 11);
        let decoded = decode_log_entry(&entry.encode_to_vec()).unwrap();
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_decode_rejects_missing_body() {
        let headless = LogEntryProto {
            term: 1,
            index: 42,
            client_id: Bytes::from_static(b"c"),
            call_id: 1,
            body: None,
        };
        let err = decode_log_entry(&headless.encode_to_vec()).unwrap_err();
        match err {
            Error::MissingBody { index } => assert_eq!(index, 42),
            other => panic!("Expected MissingBody, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_garbage() {
        // 0xFF opens a field header whose payload never follows
        let err = decode_log_entry(&[0xFF, 0xFF, 0xFF]).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
