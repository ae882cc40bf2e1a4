use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The dataset could not be opened. Fatal: there is nothing to aggregate without data.
    #[error("Dataset Unavailable: {}: {source}", .path.display())]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parser Error: {0}")]
    ParserError(String),

    /// A single row could not be normalized. Callers drop the row and keep going.
    #[error("Malformed Record {id}: {reason}")]
    MalformedRecord { id: String, reason: String },

    /// A summary was requested over a group with no members.
    #[error("Empty Group: {0}")]
    EmptyGroup(String),

    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(id: &str, reason: impl Into<String>) -> Error {
        Error::MalformedRecord {
            id: if id.is_empty() {
                "<missing id>".to_string()
            } else {
                id.to_string()
            },
            reason: reason.into(),
        }
    }

    /// Whether the batch may continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::MalformedRecord { .. } | Error::EmptyGroup(_))
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Error {
        if !err.is_io_error() {
            return Error::ParserError(err.to_string());
        }

        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => Error::IoError(io_err),
            kind => Error::ParserError(format!("{:?}", kind)),
        }
    }
}
