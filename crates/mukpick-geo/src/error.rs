use thiserror::Error;

/// Errors raised while acquiring a position or reverse-geocoding it.
///
/// None of these reach the user as hard failures: the resolver converts every
/// variant into the fixed fallback location and logs the cause.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The geocoder response could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The device sensor reported an error instead of a position.
    #[error("position error (code {code}): {message}")]
    Position { code: i32, message: String },

    /// Position acquisition exceeded the bounded wait.
    #[error("position acquisition timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The platform exposes no location capability at all. Fatal to the
    /// location flow only; the rest of the application keeps running.
    #[error("location capability unavailable: {0}")]
    Unavailable(String),
}
