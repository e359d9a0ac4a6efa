// ABOUTME: Simulated order route returning a confirmation and progress timeline
// ABOUTME: Stateless; needs no shared resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::json_error;
use crate::services::simulate_order;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use smartbytes_core::AppError;

/// Order request; both fields fall back to defaults
#[derive(Debug, Default, Deserialize)]
pub struct OrderRequest {
    /// Item being ordered
    #[serde(default)]
    pub item_name: Option<String>,
    /// Image shown while the order "cooks"
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Order routes
pub struct OrderRoutes;

impl OrderRoutes {
    /// Create order routes
    pub fn routes() -> Router {
        Router::new().route("/api/orders", post(Self::handle_order))
    }

    async fn handle_order(
        body: Result<Json<OrderRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_error(&e))?;
        let confirmation =
            simulate_order(request.item_name.as_deref(), request.image_url.as_deref());
        Ok((StatusCode::CREATED, Json(confirmation)).into_response())
    }
}
