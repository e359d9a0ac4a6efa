// ABOUTME: NutritionLookup trait for best-effort single-food nutrition queries
// ABOUTME: Implemented by provider clients and by test doubles in the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::models::NutritionMatch;
use async_trait::async_trait;

/// Best-effort nutrition lookup for a single food name
///
/// Implementations never return errors: failures are logged and reported as
/// `None`, so callers can fall back to estimation.
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Look up nutrition facts for `food_name`
    async fn lookup(&self, food_name: &str) -> Option<NutritionMatch>;
}
