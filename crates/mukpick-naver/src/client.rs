//! HTTP client for the Naver local search and image search endpoints.
//!
//! Wraps `reqwest` with the two required authentication headers and typed
//! response deserialization. The public `search_nearby` and `search_image`
//! methods never fail: an API error and "genuinely no results" are collapsed
//! into the same empty outcome for callers, with the distinction kept in logs
//! (and reachable through the `try_*` methods).

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Url};

use mukpick_core::LocationInfo;

use crate::error::NaverError;
use crate::types::{ImageSearchResponse, Restaurant};

const DEFAULT_BASE_URL: &str = "https://openapi.naver.com/";
const LOCAL_SEARCH_PATH: &str = "v1/search/local.json";
const IMAGE_SEARCH_PATH: &str = "v1/search/image";

/// Fixed result page size for local search.
const LOCAL_DISPLAY: &str = "10";

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// Client for the Naver open API.
///
/// Use [`NaverClient::new`] for production or [`NaverClient::with_base_url`]
/// to point at a mock server in tests.
pub struct NaverClient {
    client: Client,
    base_url: Url,
}

impl NaverClient {
    /// Creates a client pointed at the production Naver open API.
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`NaverError::Config`] if the credentials
    /// contain characters that are not valid in headers.
    pub fn new(client_id: &str, client_secret: &str, timeout_secs: u64) -> Result<Self, NaverError> {
        Self::with_base_url(client_id, client_secret, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`NaverError::Http`] on client construction failure or
    /// [`NaverError::Config`] if `base_url` or the credentials are malformed.
    pub fn with_base_url(
        client_id: &str,
        client_secret: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, NaverError> {
        let mut headers = HeaderMap::new();
        let mut id_value = HeaderValue::from_str(client_id)
            .map_err(|_| NaverError::Config("client id is not a valid header value".to_string()))?;
        let mut secret_value = HeaderValue::from_str(client_secret).map_err(|_| {
            NaverError::Config("client secret is not a valid header value".to_string())
        })?;
        id_value.set_sensitive(true);
        secret_value.set_sensitive(true);
        headers.insert(CLIENT_ID_HEADER, id_value);
        headers.insert(CLIENT_SECRET_HEADER, secret_value);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("mukpick/0.1 (restaurant-recommendation)")
            .default_headers(headers)
            .build()?;

        // Normalise: exactly one trailing slash so join() appends paths.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| NaverError::Config(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Searches for venues near `location` for the given category and
    /// refinement keyword. Never fails.
    ///
    /// An empty `district` returns an empty list without any network call;
    /// transport/HTTP/parse failures and a missing `items` field all return
    /// an empty list with the cause logged.
    pub async fn search_nearby(
        &self,
        location: &LocationInfo,
        category: &str,
        keyword: &str,
    ) -> Vec<Restaurant> {
        if location.district.is_empty() {
            tracing::warn!("no district in the resolved location; skipping search");
            return Vec::new();
        }

        let query = compose_query(&location.district, category, keyword);
        match self.try_search_local(&query).await {
            Ok(items) => {
                if items.is_empty() {
                    tracing::info!(%query, "local search returned zero matches");
                }
                items
            }
            Err(e) => {
                tracing::error!(%query, error = %e, "local search failed; returning no candidates");
                Vec::new()
            }
        }
    }

    /// Issues a local search for an already-composed query and returns the
    /// raw candidate list.
    ///
    /// This keeps the API-error case distinguishable from zero matches for
    /// callers (and tests) that need it; [`NaverClient::search_nearby`]
    /// collapses both to an empty list.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure or non-2xx HTTP status.
    /// - [`NaverError::Deserialize`] if the body is not the expected shape.
    pub async fn try_search_local(&self, query: &str) -> Result<Vec<Restaurant>, NaverError> {
        let url = self.build_url(
            LOCAL_SEARCH_PATH,
            &[
                ("query", query),
                ("display", LOCAL_DISPLAY),
                ("start", "1"),
                ("sort", "random"),
            ],
        );
        let body = self.request_json(&url).await?;

        let Some(items) = body.get("items") else {
            tracing::warn!(%query, "local search response carried no items field");
            return Ok(Vec::new());
        };

        serde_json::from_value(items.clone()).map_err(|e| NaverError::Deserialize {
            context: format!("local search (query={query})"),
            source: e,
        })
    }

    /// Looks up a representative photo for a free-text query (typically
    /// "region + venue name"). Never fails: any error or an empty result set
    /// yields `None` with the cause logged.
    pub async fn search_image(&self, query: &str) -> Option<String> {
        match self.try_search_image(query).await {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::info!(%query, "no image found");
                None
            }
            Err(e) => {
                tracing::error!(%query, error = %e, "image search failed; omitting photo");
                None
            }
        }
    }

    /// Issues an image search requesting a single best match.
    ///
    /// # Errors
    ///
    /// - [`NaverError::Http`] on network failure or non-2xx HTTP status.
    /// - [`NaverError::Deserialize`] if the body is not the expected shape.
    pub async fn try_search_image(&self, query: &str) -> Result<Option<String>, NaverError> {
        let url = self.build_url(
            IMAGE_SEARCH_PATH,
            &[
                ("query", query),
                ("display", "1"),
                ("start", "1"),
                ("sort", "sim"),
            ],
        );
        let body = self.request_json(&url).await?;

        let response: ImageSearchResponse =
            serde_json::from_value(body).map_err(|e| NaverError::Deserialize {
                context: format!("image search (query={query})"),
                source: e,
            })?;

        Ok(response.items.first().and_then(|item| item.best_url()))
    }

    /// Builds the full request URL with properly percent-encoded parameters.
    fn build_url(&self, endpoint_path: &str, params: &[(&str, &str)]) -> Url {
        // The base URL is normalised with a trailing slash at construction,
        // so joining a relative path cannot fail.
        let mut url = self
            .base_url
            .join(endpoint_path)
            .unwrap_or_else(|_| self.base_url.clone());
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, NaverError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| NaverError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}

/// Composes the local-search query string: district, category, keyword.
#[must_use]
pub fn compose_query(district: &str, category: &str, keyword: &str) -> String {
    format!("{district} {category} {keyword}")
}
