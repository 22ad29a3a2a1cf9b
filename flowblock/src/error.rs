use tokio::sync::mpsc::error::SendError;

use crate::Label;

/// Errors produced by blocks and the runtime around them.
///
/// The first five variants are the per-event faults a block reports on its
/// error route; none of them stops the block.
#[derive(Debug, thiserror::Error, Label)]
pub enum Error {
    #[error("Invalid rule: {0}")]
    Configuration(String),

    #[error("Couldn't encode the message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Couldn't build the request: {0}")]
    RequestConstruction(#[source] reqwest::Error),

    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Couldn't read the response body: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("Couldn't build the HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Block has already been set up.")]
    AlreadySetUp,

    #[error("Block must be set up before it runs.")]
    NotSetUp,

    #[error("Couldn't send to the block: {0}")]
    SendError(String),

    #[error("Block dropped the query without replying.")]
    QueryDropped,

    #[error("Block task join error: {0}")]
    BlockJoinError(#[from] tokio::task::JoinError),
}

impl Error {
    /// Builds a [`Error::Configuration`] from anything printable.
    pub fn configuration(reason: impl std::fmt::Display) -> Self {
        Error::Configuration(reason.to_string())
    }
}

impl<T> From<SendError<T>> for Error {
    fn from(e: SendError<T>) -> Self {
        Error::SendError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_labels() {
        assert_eq!(Error::configuration("missing field").label(), "Configuration");
        assert_eq!(Error::AlreadySetUp.label(), "AlreadySetUp");
    }

    #[test]
    fn test_serde_error_converts_to_serialization() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = err.into();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[tokio::test]
    async fn test_closed_channel_converts_to_send_error() {
        let (tx, rx) = tokio::sync::mpsc::channel::<u8>(1);
        drop(rx);
        let err: Error = tx.send(1).await.unwrap_err().into();
        assert!(matches!(err, Error::SendError(_)));
    }
}
