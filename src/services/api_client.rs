// src/services/api_client.rs
// DOCUMENTATION: HBNB REST API client
// PURPOSE: Handle communication with the /api/v1 endpoints the listing page consumes

use crate::errors::PageError;
use crate::models::{Amenity, Place, SearchFilter, StatusResponse};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Operations the listing page needs from the HBNB API
/// DOCUMENTATION: Seam between the page controller and the network
/// HbnbApiClient is the production implementation; tests drive the page with in-memory fakes
pub trait ListingApi {
    /// GET /api/v1/status/
    fn status(&self) -> impl Future<Output = Result<StatusResponse, PageError>> + Send;

    /// POST /api/v1/places_search/
    fn places_search(
        &self,
        filter: &SearchFilter,
    ) -> impl Future<Output = Result<Vec<Place>, PageError>> + Send;

    /// GET /api/v1/amenities
    fn amenities(&self) -> impl Future<Output = Result<Vec<Amenity>, PageError>> + Send;
}

/// HBNB API client
/// DOCUMENTATION: Thin typed wrapper over reqwest, one method per endpoint
#[derive(Debug, Clone)]
pub struct HbnbApiClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL without the /api/v1 prefix (e.g. "http://0.0.0.0:5001")
    base_url: String,
}

impl HbnbApiClient {
    /// Create new API client
    /// DOCUMENTATION: `timeout` of None leaves requests unbounded
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, PageError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| PageError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    /// Check HTTP status and decode the JSON body
    async fn decode<T: DeserializeOwned>(response: Response, what: &str) -> Result<T, PageError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            log::error!("HBNB API {} error {}: {}", what, status, body);
            return Err(PageError::ExternalApiError(format!(
                "{} returned {}: {}",
                what, status, body
            )));
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("Failed to parse HBNB API {} response: {}", what, e);
            PageError::InvalidResponse(format!("{}: {}", what, e))
        })
    }

    fn unreachable(what: &str, e: reqwest::Error) -> PageError {
        log::error!("HBNB API {} request failed: {}", what, e);
        PageError::Unreachable(format!("{}: {}", what, e))
    }
}

impl ListingApi for HbnbApiClient {
    async fn status(&self) -> Result<StatusResponse, PageError> {
        let url = self.endpoint("status/");
        log::debug!("HBNB status poll: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unreachable("status", e))?;

        Self::decode(response, "status").await
    }

    async fn places_search(&self, filter: &SearchFilter) -> Result<Vec<Place>, PageError> {
        let url = self.endpoint("places_search/");
        log::debug!(
            "HBNB places search: {} amenities={:?}",
            url,
            filter.amenities
        );

        let response = self
            .client
            .post(&url)
            .json(filter)
            .send()
            .await
            .map_err(|e| Self::unreachable("places_search", e))?;

        let places: Vec<Place> = Self::decode(response, "places_search").await?;
        log::info!("HBNB places search returned {} places", places.len());
        Ok(places)
    }

    async fn amenities(&self) -> Result<Vec<Amenity>, PageError> {
        let url = self.endpoint("amenities");
        log::debug!("HBNB amenity catalog: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::unreachable("amenities", e))?;

        Self::decode(response, "amenities").await
    }
}
