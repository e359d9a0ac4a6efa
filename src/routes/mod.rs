// ABOUTME: Route module organization for the SmartBytes HTTP API
// ABOUTME: Merges domain routers and applies request tracing and CORS layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! HTTP routes
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to the service layer. Errors render as `{"error": {"code", "message"}}`.

/// Liveness and readiness
pub mod health;
/// Ranked restaurant menus
pub mod menu;
/// Protein estimation
pub mod nutrition;
/// Simulated orders
pub mod orders;
/// Profile read, onboarding save, and goal targets
pub mod profiles;
/// Nearby restaurant discovery
pub mod restaurants;

pub use health::HealthRoutes;
pub use menu::MenuRoutes;
pub use nutrition::NutritionRoutes;
pub use orders::OrderRoutes;
pub use profiles::ProfileRoutes;
pub use restaurants::RestaurantRoutes;

use crate::resources::ServerResources;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::Method;
use axum::Router;
use smartbytes_core::AppError;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Complete API router with middleware
pub fn router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RestaurantRoutes::routes(Arc::clone(&resources)))
        .merge(MenuRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(NutritionRoutes::routes(resources))
        .merge(OrderRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                .allow_headers(Any),
        )
}

/// Render query-string rejections in the API error format
pub(crate) fn query_error(rejection: &QueryRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}

/// Render body rejections in the API error format
pub(crate) fn json_error(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(rejection.body_text())
}
