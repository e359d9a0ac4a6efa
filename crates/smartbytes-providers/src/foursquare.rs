// ABOUTME: Foursquare Places client for nearby restaurant search and representative photos
// ABOUTME: Photos are fetched concurrently per place and never fail the search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::http_client::shared_client;
use crate::retry::{get_json_with_retry, RetryConfig};
use futures_util::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use smartbytes_core::constants::places::RESTAURANT_CATEGORY_ID;
use smartbytes_core::constants::service_names::FOURSQUARE;
use smartbytes_core::errors::{ProviderError, ProviderResult};
use smartbytes_core::models::{GeoPoint, Restaurant};
use tracing::{debug, warn};

/// Default Foursquare Places base URL
pub const DEFAULT_BASE_URL: &str = "https://api.foursquare.com/v3";

/// Foursquare client configuration
#[derive(Debug, Clone)]
pub struct FoursquareConfig {
    /// API key sent verbatim in the `Authorization` header
    pub api_key: Option<String>,
    /// Base URL (default: <https://api.foursquare.com/v3>)
    pub base_url: String,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl Default for FoursquareConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PlaceSearchResponse {
    #[serde(default)]
    results: Vec<Place>,
}

#[derive(Debug, Deserialize)]
struct Place {
    fsq_id: String,
    name: String,
    #[serde(default)]
    location: PlaceLocation,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    geocodes: Geocodes,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceLocation {
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    formatted_address: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Geocodes {
    #[serde(default)]
    main: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Coordinates {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct Photo {
    prefix: String,
    suffix: String,
}

impl From<Place> for Restaurant {
    fn from(place: Place) -> Self {
        let location = place
            .geocodes
            .main
            .map_or_else(GeoPoint::default, |c| GeoPoint {
                lat: c.latitude,
                lng: c.longitude,
            });
        Self {
            name: place.name,
            address: place
                .location
                .address
                .filter(|a| !a.is_empty())
                .or(place.location.formatted_address),
            rating: place.rating,
            place_id: place.fsq_id,
            location,
            photo: None,
            has_menu_data: false,
        }
    }
}

/// Foursquare Places client
pub struct FoursquareClient {
    config: FoursquareConfig,
    http_client: Client,
}

impl FoursquareClient {
    /// Create a client using the shared HTTP client
    #[must_use]
    pub fn new(config: FoursquareConfig) -> Self {
        Self {
            config,
            http_client: shared_client().clone(),
        }
    }

    fn api_key(&self) -> ProviderResult<&str> {
        self.config
            .api_key
            .as_deref()
            .ok_or_else(|| ProviderError::NotConfigured {
                provider: FOURSQUARE.to_owned(),
                detail: "FOURSQUARE_API_KEY is not set".to_owned(),
            })
    }

    /// Restaurants near a point, without photos
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the key is missing or the search fails
    pub async fn search_places(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        limit: u32,
    ) -> ProviderResult<Vec<Restaurant>> {
        let api_key = self.api_key()?;
        let url = format!("{}/places/search", self.config.base_url);
        let ll = format!("{lat},{lng}");
        let radius = radius_m.to_string();
        let limit = limit.to_string();

        let response: PlaceSearchResponse =
            get_json_with_retry(FOURSQUARE, &self.config.retry, || {
                self.http_client
                    .get(&url)
                    .header("Authorization", api_key)
                    .header("accept", "application/json")
                    .query(&[
                        ("ll", ll.as_str()),
                        ("radius", radius.as_str()),
                        ("categories", RESTAURANT_CATEGORY_ID),
                        ("limit", limit.as_str()),
                    ])
            })
            .await?;

        debug!(places = response.results.len(), "Places search complete");
        Ok(response.results.into_iter().map(Restaurant::from).collect())
    }

    /// Most popular outdoor photo URL for a place (`prefix + "original" + suffix`)
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the key is missing or the request fails
    pub async fn representative_photo(&self, place_id: &str) -> ProviderResult<Option<String>> {
        let api_key = self.api_key()?;
        let url = format!(
            "{}/places/{}/photos",
            self.config.base_url,
            urlencoding::encode(place_id)
        );

        let photos: Vec<Photo> = get_json_with_retry(FOURSQUARE, &self.config.retry, || {
            self.http_client
                .get(&url)
                .header("Authorization", api_key)
                .header("accept", "application/json")
                .query(&[
                    ("limit", "1"),
                    ("sort", "popular"),
                    ("classifications", "outdoor"),
                ])
        })
        .await?;

        Ok(photos
            .into_iter()
            .next()
            .map(|photo| format!("{}original{}", photo.prefix, photo.suffix)))
    }

    /// Restaurants near a point, each with a representative photo when available
    ///
    /// Photo lookups run concurrently; a failed lookup leaves `photo` empty.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] when the places search itself fails
    pub async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        limit: u32,
    ) -> ProviderResult<Vec<Restaurant>> {
        let restaurants = self.search_places(lat, lng, radius_m, limit).await?;

        let photos = join_all(restaurants.iter().map(|restaurant| async move {
            match self.representative_photo(&restaurant.place_id).await {
                Ok(photo) => photo,
                Err(e) => {
                    warn!(place_id = %restaurant.place_id, error = %e, "Failed to fetch restaurant photo");
                    None
                }
            }
        }))
        .await;

        Ok(restaurants
            .into_iter()
            .zip(photos)
            .map(|(restaurant, photo)| Restaurant {
                photo,
                ..restaurant
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_mapping_prefers_street_address() {
        let place: Place = serde_json::from_str(
            r#"{
                "fsq_id": "abc123",
                "name": "Chipotle",
                "location": {"address": "", "formatted_address": "1 Main St, Newark, DE"},
                "geocodes": {"main": {"latitude": 39.68, "longitude": -75.75}}
            }"#,
        )
        .unwrap();
        let restaurant = Restaurant::from(place);
        assert_eq!(restaurant.address.as_deref(), Some("1 Main St, Newark, DE"));
        assert_eq!(restaurant.place_id, "abc123");
        assert!(restaurant.rating.is_none());
        assert!((restaurant.location.lat - 39.68).abs() < f64::EPSILON);
    }
}
