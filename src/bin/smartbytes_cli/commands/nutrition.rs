// ABOUTME: Protein estimate command using the configured nutrition lookup
// ABOUTME: Falls back to food categories when no API key is configured
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::print_json;
use anyhow::Result;
use serde_json::json;
use smartbytes::ServerResources;
use smartbytes_core::models::KnownMacros;
use smartbytes_intelligence::EstimationQuery;
use std::sync::Arc;

/// Print the protein estimate for `food_name`
pub async fn estimate(
    resources: Arc<ServerResources>,
    food_name: &str,
    calories: Option<f64>,
    total_fat: Option<f64>,
    total_carbs: Option<f64>,
) -> Result<()> {
    let mut query = EstimationQuery::new(food_name);
    if calories.is_some() || total_fat.is_some() || total_carbs.is_some() {
        query = query.with_macros(KnownMacros {
            calories,
            total_fat,
            total_carbs,
        });
    }
    let estimate = resources.estimator.estimate(&query).await;
    print_json(&json!({
        "food_name": food_name,
        "estimated_protein": estimate.estimated_protein,
        "confidence": estimate.confidence,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbytes::config::ServerConfig;

    #[tokio::test]
    async fn test_estimate_with_macros_needs_no_provider() {
        let resources = Arc::new(ServerResources::from_config(ServerConfig::default()));
        let result = estimate(resources, "power bowl", Some(500.0), Some(20.0), Some(40.0)).await;
        assert!(result.is_ok());
    }
}
