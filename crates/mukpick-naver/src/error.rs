use thiserror::Error;

/// Errors returned by the Naver open-API client.
///
/// Only the `try_*` methods surface these; the public search methods collapse
/// them into empty results after logging.
#[derive(Debug, Error)]
pub enum NaverError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The client could not be constructed from the given inputs.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
