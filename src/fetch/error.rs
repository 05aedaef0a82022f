use thiserror::Error;

/// Errors that can occur while fetching remote data.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Request did not complete within the configured timeout.
    #[error("Request to '{url}' timed out")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to connect or send the request.
    #[error("Request to '{url}' failed: {source}")]
    Connection {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status.
    #[error("Request to '{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("Unexpected response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    pub(crate) fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                source,
            }
        } else {
            FetchError::Connection {
                url: url.to_string(),
                source,
            }
        }
    }
}
