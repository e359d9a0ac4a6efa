// ABOUTME: Restaurant discovery routes for nearby search with optional menu filtering
// ABOUTME: Delegates to RestaurantService and returns restaurants as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::query_error;
use crate::resources::ServerResources;
use crate::services::RestaurantService;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartbytes_core::models::Restaurant;
use smartbytes_core::AppError;
use std::sync::Arc;

/// Query parameters for nearby search
#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Search radius in meters
    #[serde(default)]
    pub radius: Option<u32>,
    /// Maximum places requested from the provider
    #[serde(default)]
    pub limit: Option<u32>,
    /// Only return restaurants with menu data
    #[serde(default)]
    pub with_menu: bool,
}

/// Nearby search response
#[derive(Debug, Serialize, Deserialize)]
pub struct NearbyResponse {
    /// Number of restaurants returned
    pub count: usize,
    /// Restaurants in provider order
    pub restaurants: Vec<Restaurant>,
}

/// Restaurant discovery routes
pub struct RestaurantRoutes;

impl RestaurantRoutes {
    /// Create restaurant routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/restaurants/nearby", get(Self::handle_nearby))
            .with_state(resources)
    }

    async fn handle_nearby(
        State(resources): State<Arc<ServerResources>>,
        query: Result<Query<NearbyQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let service = RestaurantService::new(resources);

        let restaurants = if params.with_menu {
            service
                .search_nearby_with_menu_data(params.lat, params.lng, params.radius, params.limit)
                .await?
        } else {
            service
                .search_nearby(params.lat, params.lng, params.radius, params.limit)
                .await?
        };

        let response = NearbyResponse {
            count: restaurants.len(),
            restaurants,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
