use thiserror::Error;

/// Errors surfaced at the wire and payload-resolution boundaries.
///
/// The entry transformations themselves are total; only decoding foreign
/// bytes and resolving detached payloads can fail.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer did not hold a well-formed log entry.
    #[error("failed to decode log entry: {0}")]
    Decode(#[from] prost::DecodeError),

    /// A decoded entry carried no body variant.
    #[error("log entry at index {index} has no body")]
    MissingBody { index: u64 },

    /// A detached entry's payload was not present in the data store.
    #[error("no state machine data for entry at term {term}, index {index}")]
    StateMachineDataNotFound { term: u64, index: u64 },
}

impl From<Error> for std::io::Error {
    fn from(e: Error) -> Self {
        let kind = match &e {
            Error::StateMachineDataNotFound { .. } => std::io::ErrorKind::NotFound,
            _ => std::io::ErrorKind::InvalidData,
        };
        std::io::Error::new(kind, e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_kinds() {
        let missing: std::io::Error = Error::StateMachineDataNotFound { term: 1, index: 2 }.into();
        assert_eq!(missing.kind(), std::io::ErrorKind::NotFound);

        let headless: std::io::Error = Error::MissingBody { index: 3 }.into();
        assert_eq!(headless.kind(), std::io::ErrorKind::InvalidData);
    }
}
