use thiserror::Error;

/// Failure below HTTP: connection refused, DNS, TLS, broken body stream.
///
/// Displays the underlying message unchanged so callers can surface it as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    Network(#[from] TransportError),

    /// The body was not the JSON shape the operation expects
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_are_surfaced_verbatim() {
        let fetch = ClientError::Fetch("Failed to fetch products".to_string());
        assert_eq!(fetch.to_string(), "Failed to fetch products");

        let network: ClientError = TransportError::new("Network error").into();
        assert_eq!(network.to_string(), "Network error");
    }
}
