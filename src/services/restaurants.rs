// ABOUTME: Restaurant discovery around a point, optionally limited to places with menu data
// ABOUTME: Probes the menu provider in bounded concurrent batches and stops early
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::resources::ServerResources;
use futures_util::future::join_all;
use smartbytes_core::constants::places::{DEFAULT_LIMIT, DEFAULT_RADIUS_METERS};
use smartbytes_core::models::Restaurant;
use smartbytes_core::{AppError, AppResult, ErrorCode};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Nearby restaurant search
pub struct RestaurantService {
    resources: Arc<ServerResources>,
}

fn validate_coordinates(lat: f64, lng: f64) -> AppResult<()> {
    if !(lat.is_finite() && (-90.0..=90.0).contains(&lat)) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Latitude must be between -90 and 90 (got {lat})"),
        ));
    }
    if !(lng.is_finite() && (-180.0..=180.0).contains(&lng)) {
        return Err(AppError::new(
            ErrorCode::ValueOutOfRange,
            format!("Longitude must be between -180 and 180 (got {lng})"),
        ));
    }
    Ok(())
}

impl RestaurantService {
    /// Create a service over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Restaurants within `radius_m` (default 16093 m) of a point, at most `limit` (default 25)
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for invalid coordinates and
    /// `EXTERNAL_SERVICE_ERROR` when the places provider fails
    pub async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_m: Option<u32>,
        limit: Option<u32>,
    ) -> AppResult<Vec<Restaurant>> {
        validate_coordinates(lat, lng)?;
        let radius_m = radius_m.unwrap_or(DEFAULT_RADIUS_METERS);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);

        let restaurants = self
            .resources
            .places
            .search_nearby(lat, lng, radius_m, limit)
            .await
            .map_err(|e| {
                warn!(lat, lng, error = %e, "Places provider request failed");
                AppError::new(
                    ErrorCode::ExternalServiceError,
                    "Failed to load nearby restaurants",
                )
                .with_source(e)
            })?;

        debug!(lat, lng, radius_m, found = restaurants.len(), "Nearby search complete");
        Ok(restaurants)
    }

    /// Nearby restaurants that have at least one menu item
    ///
    /// Candidates are probed in batches of `MENU_PROBE_BATCH_SIZE` concurrent
    /// requests until `MENU_PROBE_MAX_RESTAURANTS` are found. A failed probe
    /// drops only that restaurant.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::search_nearby`]
    pub async fn search_nearby_with_menu_data(
        &self,
        lat: f64,
        lng: f64,
        radius_m: Option<u32>,
        limit: Option<u32>,
    ) -> AppResult<Vec<Restaurant>> {
        let candidates = self.search_nearby(lat, lng, radius_m, limit).await?;
        let probe = self.resources.config.menu_probe;
        let menu_source = &self.resources.menu_source;

        let mut with_menus = Vec::new();
        for batch in candidates.chunks(probe.batch_size.max(1)) {
            let probed = join_all(batch.iter().map(|restaurant| async move {
                match menu_source.search_menu(&restaurant.name).await {
                    Ok(items) if !items.is_empty() => Some(Restaurant {
                        has_menu_data: true,
                        ..restaurant.clone()
                    }),
                    Ok(_) => None,
                    Err(e) => {
                        warn!(restaurant = %restaurant.name, error = %e, "Menu probe failed");
                        None
                    }
                }
            }))
            .await;

            with_menus.extend(probed.into_iter().flatten());
            if with_menus.len() >= probe.max_restaurants {
                break;
            }
        }
        with_menus.truncate(probe.max_restaurants);

        info!(
            candidates = candidates.len(),
            with_menu_data = with_menus.len(),
            "Menu probing complete"
        );
        Ok(with_menus)
    }
}
