// ABOUTME: Firestore REST profile store reading and writing users/{email} documents
// ABOUTME: Accepts numeric fields stored as strings, as written by the onboarding form
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Firestore profile backend
//!
//! Documents live at `users/{email}`. Each field is a typed value object such
//! as `{"stringValue": "70"}` or `{"integerValue": "25"}`; onboarding writes
//! biometrics as strings, so numeric fields accept any of the three
//! representations.

use super::ProfileStore;
use crate::config::FirestoreConfig;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::{json, Map, Value};
use smartbytes_core::constants::service_names::FIRESTORE;
use smartbytes_core::errors::ProviderError;
use smartbytes_core::models::{Sex, UserProfile};
use smartbytes_core::{AppError, AppResult, ErrorCode};
use smartbytes_providers::http_client::shared_client;
use std::str::FromStr;
use tracing::{debug, warn};

/// Firestore-backed profile store
pub struct FirestoreProfileStore {
    config: FirestoreConfig,
    http_client: Client,
}

impl FirestoreProfileStore {
    /// Create a store using the shared HTTP client
    #[must_use]
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            config,
            http_client: shared_client().clone(),
        }
    }

    fn document_url(&self, email: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/users/{}",
            self.config.base_url,
            urlencoding::encode(&self.config.project_id),
            urlencoding::encode(email.trim())
        )
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match self.config.api_key.as_deref() {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }
}

fn transport_error(error: &reqwest::Error) -> AppError {
    AppError::from(ProviderError::from_reqwest(FIRESTORE, error))
}

async fn status_error(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::from(ProviderError::from_status(FIRESTORE, status, body))
}

/// Typed Firestore value as a string (`stringValue`, `integerValue`, `doubleValue`)
fn field_text(fields: &Map<String, Value>, name: &str) -> Option<String> {
    let value = fields.get(name)?.as_object()?;
    if let Some(text) = value.get("stringValue").and_then(Value::as_str) {
        return Some(text.trim().to_owned());
    }
    if let Some(text) = value.get("integerValue").and_then(Value::as_str) {
        return Some(text.to_owned());
    }
    value.get("doubleValue").and_then(Value::as_f64).map(|n| n.to_string())
}

fn missing(email: &str, field: &str) -> AppError {
    AppError::new(
        ErrorCode::MissingRequiredField,
        format!("Profile for {email} is incomplete: missing {field}"),
    )
}

fn numeric_field<T: FromStr>(
    fields: &Map<String, Value>,
    email: &str,
    name: &str,
) -> AppResult<T> {
    let text = field_text(fields, name)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| missing(email, name))?;
    text.parse().map_err(|_| {
        AppError::new(
            ErrorCode::InvalidInput,
            format!("Profile for {email} has a non-numeric {name}: {text}"),
        )
    })
}

/// Whole-number fields may be stored as decimals (`"25.0"`)
fn whole_field(fields: &Map<String, Value>, email: &str, name: &str) -> AppResult<f64> {
    numeric_field::<f64>(fields, email, name).map(f64::round)
}

/// Map a Firestore document to a profile
///
/// # Errors
///
/// Returns `MISSING_REQUIRED_FIELD` when a biometric or the goal is absent and
/// `INVALID_INPUT` when a value cannot be parsed
pub fn profile_from_document(email: &str, document: &Value) -> AppResult<UserProfile> {
    let empty = Map::new();
    let fields = document
        .get("fields")
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    let sex = field_text(fields, "gender")
        .or_else(|| field_text(fields, "sex"))
        .ok_or_else(|| missing(email, "gender"))?
        .parse::<Sex>()
        .map_err(AppError::invalid_input)?;

    Ok(UserProfile {
        email: field_text(fields, "email").unwrap_or_else(|| email.to_owned()),
        age: whole_field(fields, email, "age")?.max(0.0) as u32,
        height_in: numeric_field(fields, email, "height")?,
        weight_lb: numeric_field(fields, email, "weight")?,
        sex,
        fitness_goal: field_text(fields, "fitnessGoal")
            .filter(|goal| !goal.is_empty())
            .ok_or_else(|| missing(email, "fitnessGoal"))?,
        activity_level: whole_field(fields, email, "activityLevel")?.clamp(0.0, 255.0) as u8,
    })
}

/// Firestore document body for a profile, numeric fields stored as strings
#[must_use]
pub fn profile_to_document(profile: &UserProfile) -> Value {
    let string = |value: String| json!({ "stringValue": value });
    let sex = match profile.sex {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    json!({
        "fields": {
            "email": string(profile.email.clone()),
            "age": string(profile.age.to_string()),
            "height": string(profile.height_in.to_string()),
            "weight": string(profile.weight_lb.to_string()),
            "gender": string(sex.to_owned()),
            "fitnessGoal": string(profile.fitness_goal.clone()),
            "activityLevel": string(profile.activity_level.to_string()),
            "updatedAt": { "timestampValue": Utc::now().to_rfc3339() }
        }
    })
}

#[async_trait]
impl ProfileStore for FirestoreProfileStore {
    async fn get_profile(&self, email: &str) -> AppResult<Option<UserProfile>> {
        let response = self
            .with_key(self.http_client.get(self.document_url(email)))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(email, "No stored profile");
            return Ok(None);
        }
        if !response.status().is_success() {
            let error = status_error(response).await;
            warn!(email, error = %error, "Failed to read profile");
            return Err(error);
        }

        let document: Value = response.json().await.map_err(|e| transport_error(&e))?;
        profile_from_document(email, &document).map(Some)
    }

    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        let response = self
            .with_key(self.http_client.patch(self.document_url(&profile.email)))
            .json(&profile_to_document(profile))
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        if !response.status().is_success() {
            let error = status_error(response).await;
            warn!(email = %profile.email, error = %error, "Failed to save profile");
            return Err(error);
        }
        debug!(email = %profile.email, "Profile saved to Firestore");
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "firestore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboarding_document_with_string_numbers() {
        let document = json!({
            "fields": {
                "gender": {"stringValue": "female"},
                "height": {"stringValue": "65"},
                "weight": {"stringValue": "140.5"},
                "age": {"integerValue": "28"},
                "fitnessGoal": {"stringValue": "lose-weight"},
                "activityLevel": {"stringValue": "2"}
            }
        });
        let profile = profile_from_document("a@b.com", &document).unwrap();
        assert_eq!(profile.email, "a@b.com");
        assert_eq!(profile.age, 28);
        assert_eq!(profile.sex, Sex::Female);
        assert!((profile.weight_lb - 140.5).abs() < f64::EPSILON);
        assert_eq!(profile.activity_level, 2);
    }

    #[test]
    fn test_missing_age_is_reported() {
        let document = json!({
            "fields": {
                "gender": {"stringValue": "male"},
                "height": {"stringValue": "70"},
                "weight": {"stringValue": "180"},
                "fitnessGoal": {"stringValue": "maintain"},
                "activityLevel": {"stringValue": "1"}
            }
        });
        let error = profile_from_document("a@b.com", &document).unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert!(error.message.contains("missing age"));
    }
}
