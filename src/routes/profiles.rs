// ABOUTME: Profile routes for reading, saving onboarding data, and deriving goal targets
// ABOUTME: Saved profiles are validated so the goal calculator can always consume them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::json_error;
use crate::profiles::validate_profile;
use crate::resources::ServerResources;
use crate::services::GoalService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use smartbytes_core::models::{Sex, UserProfile};
use smartbytes_core::AppError;
use smartbytes_intelligence::FitnessGoal;
use std::sync::Arc;
use tracing::info;

/// Onboarding form body; the email comes from the path
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    /// Age in years
    pub age: u32,
    /// Height in inches
    pub height_in: f64,
    /// Weight in pounds
    pub weight_lb: f64,
    /// Biological sex
    pub sex: Sex,
    /// `build-muscle`, `lose-weight`, or `maintain`
    pub fitness_goal: String,
    /// Activity level 1 to 3
    pub activity_level: u8,
}

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create profile routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/profiles/:email",
                get(Self::handle_get_profile).put(Self::handle_save_profile),
            )
            .route("/api/profiles/:email/goals", get(Self::handle_goals))
            .with_state(resources)
    }

    async fn handle_get_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        let profile = resources
            .profiles
            .get_profile(&email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for {email}")))?;
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_save_profile(
        State(resources): State<Arc<ServerResources>>,
        Path(email): Path<String>,
        body: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_error(&e))?;
        FitnessGoal::from_stored(&request.fitness_goal)?;

        let profile = UserProfile {
            email: email.trim().to_owned(),
            age: request.age,
            height_in: request.height_in,
            weight_lb: request.weight_lb,
            sex: request.sex,
            fitness_goal: request.fitness_goal.trim().to_lowercase(),
            activity_level: request.activity_level,
        };
        validate_profile(&profile)?;

        resources.profiles.save_profile(&profile).await?;
        info!(email = %profile.email, backend = resources.profiles.backend_name(), "Profile saved");
        Ok((StatusCode::OK, Json(profile)).into_response())
    }

    async fn handle_goals(
        State(resources): State<Arc<ServerResources>>,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        let goals = GoalService::new(resources).goal_profile(&email).await?;
        Ok((StatusCode::OK, Json(goals)).into_response())
    }
}
