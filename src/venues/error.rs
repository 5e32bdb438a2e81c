use thiserror::Error;

/// Errors returned by the venue provider client.
#[derive(Debug, Error)]
pub enum VenueError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider does not know the venue.
    #[error("venue not found: {slug}")]
    NotFound { slug: String },

    /// The provider answered with a non-success status other than 404.
    #[error("venue provider returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The payload parsed but violates the pricing rules' invariants.
    #[error("invalid venue payload: {0}")]
    InvalidPayload(String),

    #[error("invalid venue API base URL: {0}")]
    InvalidBaseUrl(String),
}
