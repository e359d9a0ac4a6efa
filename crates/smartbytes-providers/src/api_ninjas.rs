// ABOUTME: API Ninjas nutrition client implementing best-effort single-food lookup
// ABOUTME: Tolerates premium-only string fields and never surfaces errors to callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! API Ninjas Nutrition Client
//!
//! `GET {base_url}/nutrition?query=<food>` with an `X-Api-Key` header returns an
//! array of matches. Free-tier keys receive some fields (notably `protein_g`)
//! as a text notice instead of a number, so fields are read leniently from
//! untyped JSON.

use crate::http_client::shared_client;
use crate::retry::{get_json_with_retry, RetryConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value};
use smartbytes_core::constants::service_names::API_NINJAS;
use smartbytes_core::errors::ProviderError;
use smartbytes_core::models::{NutritionFacts, NutritionMatch};
use smartbytes_core::NutritionLookup;
use tracing::{debug, error, warn};

/// Default API Ninjas base URL
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1";

/// API Ninjas client configuration
#[derive(Debug, Clone)]
pub struct ApiNinjasConfig {
    /// API key; lookups are skipped when absent
    pub api_key: Option<String>,
    /// Base URL (default: <https://api.api-ninjas.com/v1>)
    pub base_url: String,
    /// Retry policy for transient failures
    pub retry: RetryConfig,
}

impl Default for ApiNinjasConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_owned(),
            retry: RetryConfig::default(),
        }
    }
}

/// API Ninjas nutrition client
pub struct ApiNinjasClient {
    config: ApiNinjasConfig,
    http_client: Client,
}

fn number(record: &Map<String, Value>, key: &str) -> Option<f64> {
    match record.get(key)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn map_record(record: &Map<String, Value>) -> NutritionMatch {
    let field = |key: &str| number(record, key).unwrap_or_default();
    let protein = number(record, "protein_g");

    NutritionMatch {
        name: record
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_owned(),
        serving_size_g: field("serving_size_g"),
        nutrition: NutritionFacts {
            calories: field("calories"),
            total_fat: field("fat_total_g"),
            saturated_fat: field("fat_saturated_g"),
            cholesterol: field("cholesterol_mg"),
            sodium: field("sodium_mg"),
            total_carbs: field("carbohydrates_total_g"),
            dietary_fiber: field("fiber_g"),
            sugars: field("sugar_g"),
            protein: protein.unwrap_or_default(),
            potassium: field("potassium_mg"),
            calcium: 0.0,
            iron: 0.0,
        }
        .clamped(),
        protein_reported: protein.is_some(),
    }
}

impl ApiNinjasClient {
    /// Create a client using the shared HTTP client
    #[must_use]
    pub fn new(config: ApiNinjasConfig) -> Self {
        Self {
            config,
            http_client: shared_client().clone(),
        }
    }

    /// Query the provider, surfacing errors
    ///
    /// Returns `Ok(None)` when the provider has no match.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotConfigured`] without a key, otherwise any
    /// transport, status, or decoding error after retries.
    pub async fn fetch(&self, food_name: &str) -> Result<Option<NutritionMatch>, ProviderError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(ProviderError::NotConfigured {
                provider: API_NINJAS.to_owned(),
                detail: "API_NINJAS_KEY is not set".to_owned(),
            });
        };

        let url = format!("{}/nutrition", self.config.base_url);
        let records: Vec<Value> = get_json_with_retry(API_NINJAS, &self.config.retry, || {
            self.http_client
                .get(&url)
                .query(&[("query", food_name)])
                .header("X-Api-Key", api_key)
        })
        .await?;

        Ok(records.first().and_then(Value::as_object).map(map_record))
    }
}

#[async_trait]
impl NutritionLookup for ApiNinjasClient {
    async fn lookup(&self, food_name: &str) -> Option<NutritionMatch> {
        let query = food_name.trim();
        if query.is_empty() {
            warn!("Empty food name provided to nutrition lookup");
            return None;
        }

        match self.fetch(query).await {
            Ok(Some(found)) => {
                debug!(food = query, protein_reported = found.protein_reported, "Nutrition match found");
                Some(found)
            }
            Ok(None) => {
                debug!(food = query, "No nutrition data found");
                None
            }
            Err(e) => {
                match &e {
                    ProviderError::NotConfigured { .. } => {
                        error!(provider = API_NINJAS, "API key is not configured");
                    }
                    ProviderError::Api {
                        status_code: 400, ..
                    } => {
                        error!(provider = API_NINJAS, error = %e, "Bad request - check API key format and query parameters");
                    }
                    ProviderError::AuthenticationFailed { .. } => {
                        error!(provider = API_NINJAS, error = %e, "Authentication error - invalid API key");
                    }
                    _ => error!(provider = API_NINJAS, error = %e, "Nutrition lookup failed"),
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_premium_only_protein_is_not_reported() {
        let record = json!({
            "name": "chicken breast",
            "calories": "Only available for premium subscribers.",
            "serving_size_g": 100.0,
            "fat_total_g": 3.5,
            "protein_g": "Only available for premium subscribers.",
            "carbohydrates_total_g": 0.0
        });
        let found = map_record(record.as_object().unwrap());
        assert!(!found.protein_reported);
        assert!(found.nutrition.calories.abs() < f64::EPSILON);
        assert!((found.nutrition.total_fat - 3.5).abs() < f64::EPSILON);
        assert_eq!(found.name, "chicken breast");
    }
}
