// ABOUTME: Ranked menu route with sort, nutrition filters, and optional personalization
// ABOUTME: Unknown sort options are rejected with the list of accepted values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::query_error;
use crate::resources::ServerResources;
use crate::services::MenuService;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartbytes_core::models::{MenuEntry, MenuFilters, SortOption};
use smartbytes_core::AppError;
use std::sync::Arc;

/// Query parameters for a ranked menu
#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    /// Sort option name, e.g. `protein_ratio_desc`
    #[serde(default)]
    pub sort: Option<String>,
    /// Calorie ceiling
    #[serde(default)]
    pub max_calories: Option<f64>,
    /// Protein floor in grams
    #[serde(default)]
    pub min_protein: Option<f64>,
    /// Drop non-vegetarian items
    #[serde(default)]
    pub vegetarian: bool,
    /// Personalize with the profile stored for this email
    #[serde(default)]
    pub email: Option<String>,
}

/// Ranked menu response
#[derive(Debug, Serialize, Deserialize)]
pub struct MenuResponse {
    /// Restaurant name as requested
    pub restaurant: String,
    /// Number of items returned
    pub count: usize,
    /// Items in ranked order
    pub items: Vec<MenuEntry>,
}

fn parse_sort(sort: Option<&str>) -> Result<Option<SortOption>, AppError> {
    let Some(sort) = sort.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    sort.parse().map(Some).map_err(|e: String| {
        let accepted: Vec<&str> = SortOption::ALL.into_iter().map(SortOption::as_str).collect();
        AppError::invalid_input(format!("{e} (expected one of: {})", accepted.join(", ")))
    })
}

/// Menu routes
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create menu routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/restaurants/:name/menu", get(Self::handle_menu))
            .with_state(resources)
    }

    async fn handle_menu(
        State(resources): State<Arc<ServerResources>>,
        Path(name): Path<String>,
        query: Result<Query<MenuQuery>, QueryRejection>,
    ) -> Result<Response, AppError> {
        let Query(params) = query.map_err(|e| query_error(&e))?;
        let sort = parse_sort(params.sort.as_deref())?;
        let filters = MenuFilters {
            max_calories: params.max_calories,
            min_protein: params.min_protein,
            vegetarian: params.vegetarian,
        };

        let items = MenuService::new(resources)
            .menu_for_user(&name, sort, &filters, params.email.as_deref())
            .await?;

        let response = MenuResponse {
            restaurant: name,
            count: items.len(),
            items,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
