// ABOUTME: Goal service computing calorie and protein targets from a stored profile
// ABOUTME: Targets are derived on every request and never cached
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::resources::ServerResources;
use smartbytes_core::{AppError, AppResult};
use smartbytes_intelligence::GoalProfile;
use std::sync::Arc;

/// Goal targets for onboarded users
pub struct GoalService {
    resources: Arc<ServerResources>,
}

impl GoalService {
    /// Create a service over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Targets for the profile stored under `email`
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when no profile exists, `INVALID_INPUT`
    /// when the stored goal or activity level is invalid, and any store error
    pub async fn goal_profile(&self, email: &str) -> AppResult<GoalProfile> {
        let profile = self
            .resources
            .profiles
            .get_profile(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Profile for {email}")))?;
        Ok(GoalProfile::from_profile(&profile)?)
    }
}
