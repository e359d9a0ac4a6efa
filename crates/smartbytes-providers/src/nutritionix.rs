// ABOUTME: Nutritionix branded food search used as the source of restaurant menus
// ABOUTME: Maps branded results to FoodItem with missing nutrient fields defaulted to zero
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::http_client::shared_client;
use crate::retry::{get_json_with_retry, RetryConfig};
use reqwest::Client;
use serde::Deserialize;
use smartbytes_core::constants::service_names::NUTRITIONIX;
use smartbytes_core::errors::{ProviderError, ProviderResult};
use smartbytes_core::models::{FoodItem, NutritionFacts};
use tracing::debug;

/// Default Nutritionix base URL
pub const DEFAULT_BASE_URL: &str = "https://trackapi.nutritionix.com/v2";

/// Nutritionix client configuration
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    /// Application id (`x-app-id`)
    pub app_id: Option<String>,
    /// Application key (`x-app-key`)
    pub api_key: Option<String>,
    /// Base URL (default: <https://trackapi.nutritionix.com/v2>)
    pub base_url: String,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl Default for NutritionixConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            retry: RetryConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct InstantSearchResponse {
    #[serde(default)]
    branded: Vec<BrandedFood>,
}

#[derive(Debug, Deserialize)]
struct BrandedFood {
    food_name: String,
    #[serde(default)]
    brand_name: Option<String>,
    #[serde(default)]
    serving_qty: Option<f64>,
    #[serde(default)]
    serving_unit: Option<String>,
    #[serde(default)]
    nf_calories: Option<f64>,
    #[serde(default)]
    nf_total_fat: Option<f64>,
    #[serde(default)]
    nf_saturated_fat: Option<f64>,
    #[serde(default)]
    nf_cholesterol: Option<f64>,
    #[serde(default)]
    nf_sodium: Option<f64>,
    #[serde(default)]
    nf_total_carbohydrate: Option<f64>,
    #[serde(default)]
    nf_dietary_fiber: Option<f64>,
    #[serde(default)]
    nf_sugars: Option<f64>,
    #[serde(default)]
    nf_protein: Option<f64>,
    #[serde(default)]
    nf_potassium: Option<f64>,
    #[serde(default)]
    nf_calcium_dv: Option<f64>,
    #[serde(default)]
    nf_iron_dv: Option<f64>,
}

impl From<BrandedFood> for FoodItem {
    fn from(food: BrandedFood) -> Self {
        Self {
            name: food.food_name,
            brand_name: food.brand_name.unwrap_or_default(),
            serving_size: food.serving_qty.unwrap_or_default(),
            serving_unit: food.serving_unit.unwrap_or_default(),
            nutrition: NutritionFacts {
                calories: food.nf_calories.unwrap_or_default(),
                total_fat: food.nf_total_fat.unwrap_or_default(),
                saturated_fat: food.nf_saturated_fat.unwrap_or_default(),
                cholesterol: food.nf_cholesterol.unwrap_or_default(),
                sodium: food.nf_sodium.unwrap_or_default(),
                total_carbs: food.nf_total_carbohydrate.unwrap_or_default(),
                dietary_fiber: food.nf_dietary_fiber.unwrap_or_default(),
                sugars: food.nf_sugars.unwrap_or_default(),
                protein: food.nf_protein.unwrap_or_default(),
                potassium: food.nf_potassium.unwrap_or_default(),
                calcium: food.nf_calcium_dv.unwrap_or_default(),
                iron: food.nf_iron_dv.unwrap_or_default(),
            }
            .clamped(),
        }
    }
}

/// Nutritionix branded search client
pub struct NutritionixClient {
    config: NutritionixConfig,
    http_client: Client,
}

impl NutritionixClient {
    /// Create a client using the shared HTTP client
    #[must_use]
    pub fn new(config: NutritionixConfig) -> Self {
        Self {
            config,
            http_client: shared_client().clone(),
        }
    }

    /// Branded items matching `query` (typically a restaurant name)
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] when credentials are missing,
    /// otherwise any transport, status, or decoding error after retries.
    pub async fn search_branded(&self, query: &str) -> ProviderResult<Vec<FoodItem>> {
        let (Some(app_id), Some(api_key)) = (
            self.config.app_id.as_deref(),
            self.config.api_key.as_deref(),
        ) else {
            return Err(ProviderError::NotConfigured {
                provider: NUTRITIONIX.to_owned(),
                detail: "NUTRITIONIX_APP_ID and NUTRITIONIX_API_KEY must be set".to_owned(),
            });
        };

        let url = format!("{}/search/instant", self.config.base_url);
        let response: InstantSearchResponse =
            get_json_with_retry(NUTRITIONIX, &self.config.retry, || {
                self.http_client
                    .get(&url)
                    .query(&[("query", query), ("branded", "true")])
                    .header("x-app-id", app_id)
                    .header("x-app-key", api_key)
            })
            .await?;

        debug!(query, items = response.branded.len(), "Branded search complete");
        Ok(response.branded.into_iter().map(FoodItem::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_nutrients_default_to_zero() {
        let food: BrandedFood = serde_json::from_str(
            r#"{"food_name": "Big Mac", "brand_name": "McDonald's", "nf_calories": 590, "nf_protein": null}"#,
        )
        .unwrap();
        let item = FoodItem::from(food);
        assert_eq!(item.brand_name, "McDonald's");
        assert!((item.nutrition.calories - 590.0).abs() < f64::EPSILON);
        assert!(item.nutrition.protein.abs() < f64::EPSILON);
        assert!(item.serving_unit.is_empty());
    }
}
