//! HTTP client for the `BigDataCloud` reverse-geocoding endpoint.
//!
//! Translates a coordinate pair into country/province/city/district names in
//! the requested language. The endpoint is public and unauthenticated.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::Deserialize;

use crate::error::GeoError;

const DEFAULT_BASE_URL: &str = "https://api.bigdatacloud.net/";
const ENDPOINT_PATH: &str = "data/reverse-geocode-client";

/// Response shape of the reverse-geocode endpoint. Every field is defaulted:
/// the service omits names it cannot determine, and the resolver treats the
/// coordinates as optional echoes of the request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeResponse {
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub principal_subdivision: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub locality: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Client for the reverse-geocoding endpoint.
///
/// Use [`GeocodeClient::new`] for production or
/// [`GeocodeClient::with_base_url`] to point at a mock server in tests.
pub struct GeocodeClient {
    client: Client,
    endpoint: Url,
}

impl GeocodeClient {
    /// Creates a client pointed at the production geocoding service.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] if the underlying `reqwest::Client` cannot
    /// be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, GeoError> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::Http`] on client construction failure or
    /// [`GeoError::Unavailable`] if `base_url` is not a valid URL.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, GeoError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mukpick/0.1 (restaurant-recommendation)")
            .build()?;

        // Normalise: exactly one trailing slash so join() appends the
        // endpoint path instead of replacing the last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join(ENDPOINT_PATH))
            .map_err(|e| GeoError::Unavailable(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, endpoint })
    }

    /// Reverse-geocodes a coordinate pair into place names localized to
    /// `locality_language` (a two-letter language code such as `"ko"`).
    ///
    /// # Errors
    ///
    /// - [`GeoError::Http`] on network failure or non-2xx HTTP status.
    /// - [`GeoError::Deserialize`] if the response is not the expected shape.
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
        locality_language: &str,
    ) -> Result<GeocodeResponse, GeoError> {
        let url = self.build_url(latitude, longitude, locality_language);
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| GeoError::Deserialize {
                context: url.to_string(),
                source: e,
            })?;
        serde_json::from_value(value).map_err(|e| GeoError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }

    fn build_url(&self, latitude: f64, longitude: f64, locality_language: &str) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("latitude", &latitude.to_string());
            pairs.append_pair("longitude", &longitude.to_string());
            pairs.append_pair("localityLanguage", locality_language);
        }
        url
    }
}
