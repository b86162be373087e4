use std::fmt;

use tickbox_types::TodoId;

/// Result type for tickbox-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer.
///
/// The client layer treats every variant as an opaque request failure; the
/// variants exist for logging and for backend-level tests, not for control
/// flow above the store seam.
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection, TLS, body decode)
    Transport(reqwest::Error),

    /// Server answered with a non-success status
    Status(u16),

    /// Item does not exist (in-memory backend only)
    NotFound(TodoId),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::Status(status) => write!(f, "Server returned status {}", status),
            Error::NotFound(id) => write!(f, "No todo with id {}", id),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport(err) => Some(err),
            Error::Status(_) | Error::NotFound(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        // A body-decode failure still carries the response status, so check
        // the error kind first: a malformed 200 body is a transport problem,
        // not a server status.
        if err.is_decode() {
            return Error::Transport(err);
        }
        match err.status() {
            Some(status) => Error::Status(status.as_u16()),
            None => Error::Transport(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickbox_types::Todo;

    #[tokio::test]
    async fn decode_failure_maps_to_transport_not_status() {
        let response: reqwest::Response = http::Response::builder()
            .status(200)
            .body("not json")
            .unwrap()
            .into();

        let err = response.json::<Todo>().await.unwrap_err();
        assert!(err.is_decode());
        assert!(matches!(Error::from(err), Error::Transport(_)));
    }

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(Error::NotFound(7).to_string(), "No todo with id 7");
    }
}
