// ABOUTME: Profile store abstraction with in-memory and Firestore implementations
// ABOUTME: Profiles are keyed by email and written during onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! # Profile Storage
//!
//! The server only needs two operations: read a profile to personalize
//! ranking and goals, and save the onboarding form. Backends:
//!
//! - [`MemoryProfileStore`]: process-local, used when Firestore is not configured
//! - [`FirestoreProfileStore`]: `users/{email}` documents over the Firestore REST API

/// Firestore REST backend
pub mod firestore;

/// In-memory backend
pub mod memory;

use async_trait::async_trait;
use smartbytes_core::models::UserProfile;
use smartbytes_core::{AppError, AppResult};

pub use firestore::FirestoreProfileStore;
pub use memory::MemoryProfileStore;

/// Read and write user profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Profile for `email`, `None` when the user never onboarded
    ///
    /// # Errors
    ///
    /// Returns an error when the backend fails or the stored document is incomplete
    async fn get_profile(&self, email: &str) -> AppResult<Option<UserProfile>>;

    /// Create or replace the profile keyed by `profile.email`
    ///
    /// # Errors
    ///
    /// Returns an error when the backend rejects the write
    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()>;

    /// Backend name for logs
    fn backend_name(&self) -> &'static str;
}

/// Reject profiles that cannot drive the goal calculator
///
/// # Errors
///
/// Returns [`AppError::invalid_input`] for an empty email, non-positive
/// biometrics, or an activity level outside 1..=3
pub fn validate_profile(profile: &UserProfile) -> AppResult<()> {
    if profile.email.trim().is_empty() {
        return Err(AppError::invalid_input("Email is required"));
    }
    if !(profile.height_in.is_finite() && profile.height_in > 0.0) {
        return Err(AppError::invalid_input("Height must be a positive number of inches"));
    }
    if !(profile.weight_lb.is_finite() && profile.weight_lb > 0.0) {
        return Err(AppError::invalid_input("Weight must be a positive number of pounds"));
    }
    if !(1..=3).contains(&profile.activity_level) {
        return Err(AppError::invalid_input(format!(
            "Activity level must be 1, 2, or 3 (got {})",
            profile.activity_level
        )));
    }
    Ok(())
}
