//! Error types for the API client.

use crate::validation::ValidationError;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A request payload failed its required-field or allow-list check.
    /// Nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A request payload could not be encoded as JSON.
    #[error("Unable to encode request body: {0}")]
    Serialization(#[source] serde_json::Error),
    /// The request never produced a response (DNS, connect, timeout).
    #[error("Request failed: {0}")]
    Transport(#[source] reqwest::Error),
    /// The HTTP transport could not be set up from the client configuration.
    #[error("Unable to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
    /// A request could not be assembled from its method, URL and headers.
    /// Nothing was sent.
    #[error("Unable to build request: {0}")]
    InvalidRequest(#[source] reqwest::Error),
    /// The API returned a non-success status. `message` is the envelope's
    /// `error` field, or the raw body when it is not an envelope.
    #[error("status: {status}, error: {message}")]
    Api { status: u16, message: String },
    /// The API returned a non-success status with an empty body.
    #[error("status: {status}, empty response")]
    EmptyResponse { status: u16 },
    /// The body did not match the envelope or the expected `data` shape.
    #[error("status: {status}, unable to decode response: {detail}")]
    Decode { status: u16, detail: String },
    /// A success status whose envelope carried no `data`.
    #[error("status: {status}, missing data from response")]
    MissingData { status: u16 },
    /// The configured base URL cannot be used as an API root.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
    /// The configured user agent cannot be sent as a header value.
    #[error("Invalid user agent: {0:?}")]
    InvalidUserAgent(String),
    /// The API key cannot be sent as a header value.
    #[error("Invalid API key: not a valid header value")]
    InvalidApiKey,
}

impl Error {
    /// HTTP status attached to the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. }
            | Error::EmptyResponse { status }
            | Error::Decode { status, .. }
            | Error::MissingData { status } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
