//! HTTP client for the venue provider.
//!
//! Wraps `reqwest` with venue-specific URL building, status handling and
//! typed response deserialization. Each pricing call issues the static and
//! dynamic requests concurrently and fails if either one fails.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::pricing::models::VenuePricingSpec;

use super::error::VenueError;
use super::payload::{into_pricing_spec, DynamicVenueResponse, StaticVenueResponse};

pub const DEFAULT_BASE_URL: &str =
    "https://consumer-api.development.dev.woltapi.com/home-assignment-api/v1/venues/";

/// Upper bound on the TCP/TLS connect phase.
const MAX_CONNECT_TIMEOUT_SECS: u64 = 5;

/// Connect timeout for a given overall request timeout, never longer than it.
fn connect_timeout(timeout_secs: u64) -> Duration {
    Duration::from_secs(timeout_secs.min(MAX_CONNECT_TIMEOUT_SECS))
}

/// Client for the venue provider API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct VenueClient {
    client: Client,
    base_url: Url,
}

impl VenueClient {
    /// Creates a client for the given base URL (the production provider or a
    /// mock server in tests).
    ///
    /// # Errors
    ///
    /// Returns [`VenueError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VenueError::InvalidBaseUrl`] if
    /// `base_url` cannot carry path segments.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, VenueError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(connect_timeout(timeout_secs))
            .user_agent("dopc/0.1 (delivery-order-price)")
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| VenueError::InvalidBaseUrl(format!("'{base_url}': {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(VenueError::InvalidBaseUrl(format!(
                "'{base_url}' cannot be a base"
            )));
        }

        Ok(Self { client, base_url })
    }

    /// Fetches a venue's static and dynamic data and combines them into
    /// pricing rules.
    ///
    /// # Errors
    ///
    /// - [`VenueError::NotFound`] if the provider answers 404 to either request.
    /// - [`VenueError::Status`] on any other non-2xx status.
    /// - [`VenueError::Http`] on network failure.
    /// - [`VenueError::Deserialize`] / [`VenueError::InvalidPayload`] if a body
    ///   does not match the expected shape or rules.
    pub async fn fetch_pricing_spec(&self, slug: &str) -> Result<VenuePricingSpec, VenueError> {
        let static_url = self.venue_url(slug, "static")?;
        let dynamic_url = self.venue_url(slug, "dynamic")?;

        let (static_data, dynamic_data) = tokio::try_join!(
            self.get_json::<StaticVenueResponse>(&static_url, slug),
            self.get_json::<DynamicVenueResponse>(&dynamic_url, slug),
        )?;

        into_pricing_spec(static_data, dynamic_data)
    }

    /// `<base>/<slug>/<kind>` with the slug encoded as a single segment.
    fn venue_url(&self, slug: &str, kind: &str) -> Result<Url, VenueError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| VenueError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .push(slug)
            .push(kind);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &Url, slug: &str) -> Result<T, VenueError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(VenueError::NotFound {
                slug: slug.to_string(),
            });
        }
        if !status.is_success() {
            return Err(VenueError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| VenueError::Deserialize {
            context: url.to_string(),
            source: e,
        })
    }
}
