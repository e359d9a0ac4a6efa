// ABOUTME: Protein estimation route wrapping the strategy-based estimator
// ABOUTME: Known macros improve the estimate; a value is always returned
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::json_error;
use crate::resources::ServerResources;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use smartbytes_core::models::{Confidence, KnownMacros};
use smartbytes_core::AppError;
use smartbytes_intelligence::EstimationQuery;
use std::sync::Arc;

/// Estimation request
#[derive(Debug, Deserialize)]
pub struct ProteinEstimateRequest {
    /// Food name
    pub food_name: String,
    /// Optional description used for category matching
    #[serde(default)]
    pub description: Option<String>,
    /// Energy (kcal), when known
    #[serde(default)]
    pub calories: Option<f64>,
    /// Total fat (g), when known
    #[serde(default)]
    pub total_fat: Option<f64>,
    /// Total carbohydrates (g), when known
    #[serde(default)]
    pub total_carbs: Option<f64>,
}

/// Estimation response
#[derive(Debug, Serialize, Deserialize)]
pub struct ProteinEstimateResponse {
    /// Food name as requested
    pub food_name: String,
    /// Estimated protein in grams
    pub estimated_protein: u32,
    /// Trust in the estimate
    pub confidence: Confidence,
}

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/nutrition/protein-estimate",
                post(Self::handle_protein_estimate),
            )
            .with_state(resources)
    }

    async fn handle_protein_estimate(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ProteinEstimateRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_error(&e))?;
        let food_name = request.food_name.trim();
        if food_name.is_empty() {
            return Err(AppError::invalid_input("food_name is required"));
        }

        let mut query = EstimationQuery::new(food_name);
        if let Some(description) = request.description.filter(|d| !d.trim().is_empty()) {
            query = query.with_description(description);
        }
        if request.calories.is_some() || request.total_fat.is_some() || request.total_carbs.is_some()
        {
            query = query.with_macros(KnownMacros {
                calories: request.calories,
                total_fat: request.total_fat,
                total_carbs: request.total_carbs,
            });
        }

        let estimate = resources.estimator.estimate(&query).await;
        let response = ProteinEstimateResponse {
            food_name: food_name.to_owned(),
            estimated_protein: estimate.estimated_protein,
            confidence: estimate.confidence,
        };
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
