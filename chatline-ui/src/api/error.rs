//! Client Error Types
//!
//! Every call to the backend resolves to `Result<T, ClientError>`.

use thiserror::Error;

/// Failure of a request to the Chatline API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// The request never produced a response (offline, CORS, DNS...)
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body was not the JSON we expected
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The request body could not be serialized
    #[error("could not encode request: {0}")]
    Encode(String),
}

#[derive(serde::Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum ErrorDetail {
    Structured { message: String },
    Plain(String),
}

impl ClientError {
    /// Build a `Status` error from a non-2xx response body
    ///
    /// Understands both `{"error": {"message": ..}}` and `{"error": ".."}`;
    /// anything else is kept verbatim.
    pub fn from_error_body(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope {
                error: ErrorDetail::Structured { message },
            })
            | Ok(ErrorEnvelope {
                error: ErrorDetail::Plain(message),
            }) => message,
            Err(_) if body.trim().is_empty() => format!("HTTP {}", status),
            Err(_) => body.trim().to_string(),
        };

        ClientError::Status { status, message }
    }

    /// HTTP status, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}
