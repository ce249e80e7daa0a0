//! HTTP client for the restaurant REST API.
//!
//! One request per call: no retries, no caching. Every non-2xx status is
//! surfaced as a typed [`ClientError`] so pages can turn it into a message.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use restofind_core::{AppConfig, LocationResult, Restaurant};

use crate::error::ClientError;

/// Client for the restaurant API.
///
/// Use [`RestaurantClient::new`] with the loaded [`AppConfig`], or
/// [`RestaurantClient::with_base_url`] to point at a mock server in tests.
pub struct RestaurantClient {
    client: Client,
    base_url: Url,
}

impl RestaurantClient {
    /// Creates a client for the API configured in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if the
    /// configured base URL does not parse.
    pub fn new(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_base_url,
            config.request_timeout_secs,
            &config.user_agent,
        )
    }

    /// Creates a client with an explicit base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ClientError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute `http(s)` URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            base_url: base_url.to_string(),
            reason,
        };

        let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("expected an absolute http(s) URL".to_string()));
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Lists restaurants within `radius` km of (`lat`, `lng`).
    ///
    /// Coordinates are passed through exactly as given.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::NotFound`] / [`ClientError::Status`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   `{ "restaurant": { ... } }` entries.
    pub async fn search_by_location(
        &self,
        lat: &str,
        lng: &str,
        radius: &str,
    ) -> Result<Vec<LocationResult>, ClientError> {
        let url = self.endpoint(
            &["api", "location"],
            &[("lat", lat), ("lng", lng), ("radius", radius)],
        )?;
        self.get_json(url, format!("location(lat={lat}, lng={lng}, radius={radius})"))
            .await
    }

    /// Fetches a single restaurant by identifier.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::NotFound`] when the API has no such restaurant.
    /// - [`ClientError::Status`] on any other non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a restaurant object.
    pub async fn get_restaurant(&self, id: &str) -> Result<Restaurant, ClientError> {
        let url = self.endpoint(&["api", "restaurants", id], &[])?;
        self.get_json(url, format!("restaurant(id={id})")).await
    }

    /// Lists restaurants, optionally filtered by a free-text query.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure or timeout.
    /// - [`ClientError::NotFound`] / [`ClientError::Status`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a JSON array of
    ///   restaurant objects.
    pub async fn search_restaurants(
        &self,
        query: Option<&str>,
    ) -> Result<Vec<Restaurant>, ClientError> {
        let params: Vec<(&str, &str)> = query.map(|q| ("query", q)).into_iter().collect();
        let url = self.endpoint(&["api", "restaurants"], &params)?;
        self.get_json(url, format!("restaurants(query={query:?})"))
            .await
    }

    /// Appends path segments (each percent-encoded) and query pairs to the
    /// base URL, keeping any path prefix the base URL already has.
    fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                base_url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }

    /// Sends a GET request, maps non-2xx statuses to typed errors, and
    /// deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: String,
    ) -> Result<T, ClientError> {
        tracing::debug!(url = %url, "requesting");

        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialize { context, source: e })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
