// ABOUTME: Environment configuration for ports, provider credentials, and tuning knobs
// ABOUTME: Parses environment variables into a typed ServerConfig with contextual errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Environment-based configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartbytes_core::constants::places::{MENU_PROBE_BATCH_SIZE, MENU_PROBE_MAX_RESTAURANTS};
use smartbytes_providers::http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use smartbytes_providers::{
    api_ninjas, foursquare, nutritionix, ApiNinjasConfig, FoursquareConfig, NutritionixConfig,
    RetryConfig,
};
use std::env;
use std::fmt;
use tracing::info;

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Credentials and endpoints for the external data providers
#[derive(Debug, Clone)]
pub struct ProvidersConfig {
    /// Single-food nutrition lookup
    pub api_ninjas: ApiNinjasConfig,
    /// Branded menu search
    pub nutritionix: NutritionixConfig,
    /// Nearby places search
    pub foursquare: FoursquareConfig,
    /// Request timeout for the shared HTTP client
    pub timeout_secs: u64,
    /// Connect timeout for the shared HTTP client
    pub connect_timeout_secs: u64,
}

/// Firestore profile storage; absent means the in-memory store is used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    /// Google Cloud project id
    pub project_id: String,
    /// Web API key appended as `?key=`
    pub api_key: Option<String>,
    /// REST base URL
    pub base_url: String,
}

/// Default Firestore REST base URL
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// How restaurants are probed for menu data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuProbeConfig {
    /// Concurrent probes per batch
    pub batch_size: usize,
    /// Stop once this many restaurants with menus are found
    pub max_restaurants: usize,
}

impl Default for MenuProbeConfig {
    fn default() -> Self {
        Self {
            batch_size: MENU_PROBE_BATCH_SIZE,
            max_restaurants: MENU_PROBE_MAX_RESTAURANTS,
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// External providers
    pub providers: ProvidersConfig,
    /// Profile storage backend
    pub firestore: Option<FirestoreConfig>,
    /// Menu probing limits
    pub menu_probe: MenuProbeConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            providers: ProvidersConfig {
                api_ninjas: ApiNinjasConfig::default(),
                nutritionix: NutritionixConfig::default(),
                foursquare: FoursquareConfig::default(),
                timeout_secs: DEFAULT_TIMEOUT_SECS,
                connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
            firestore: None,
            menu_probe: MenuProbeConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable cannot be parsed or a batch size is zero
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let retry = RetryConfig {
            max_retries: env_var_or("PROVIDER_MAX_RETRIES", "2")
                .parse()
                .context("Invalid PROVIDER_MAX_RETRIES value")?,
            initial_backoff_ms: env_var_or("PROVIDER_RETRY_BASE_DELAY_MS", "250")
                .parse()
                .context("Invalid PROVIDER_RETRY_BASE_DELAY_MS value")?,
        };

        let providers = ProvidersConfig {
            api_ninjas: ApiNinjasConfig {
                api_key: optional_env("API_NINJAS_KEY"),
                base_url: env_var_or("API_NINJAS_BASE_URL", api_ninjas::DEFAULT_BASE_URL),
                retry,
            },
            nutritionix: NutritionixConfig {
                app_id: optional_env("NUTRITIONIX_APP_ID"),
                api_key: optional_env("NUTRITIONIX_API_KEY"),
                base_url: env_var_or("NUTRITIONIX_BASE_URL", nutritionix::DEFAULT_BASE_URL),
                retry,
            },
            foursquare: FoursquareConfig {
                api_key: optional_env("FOURSQUARE_API_KEY"),
                base_url: env_var_or("FOURSQUARE_BASE_URL", foursquare::DEFAULT_BASE_URL),
                retry,
            },
            timeout_secs: env_var_or("HTTP_CLIENT_TIMEOUT_SECS", "10")
                .parse()
                .context("Invalid HTTP_CLIENT_TIMEOUT_SECS value")?,
            connect_timeout_secs: env_var_or("HTTP_CLIENT_CONNECT_TIMEOUT_SECS", "5")
                .parse()
                .context("Invalid HTTP_CLIENT_CONNECT_TIMEOUT_SECS value")?,
        };

        let firestore = optional_env("FIRESTORE_PROJECT_ID").map(|project_id| FirestoreConfig {
            project_id,
            api_key: optional_env("FIRESTORE_API_KEY"),
            base_url: env_var_or("FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_BASE_URL),
        });

        let menu_probe = MenuProbeConfig {
            batch_size: env_var_or("MENU_PROBE_BATCH_SIZE", "5")
                .parse()
                .context("Invalid MENU_PROBE_BATCH_SIZE value")?,
            max_restaurants: env_var_or("MENU_PROBE_MAX_RESTAURANTS", "10")
                .parse()
                .context("Invalid MENU_PROBE_MAX_RESTAURANTS value")?,
        };
        anyhow::ensure!(
            menu_probe.batch_size > 0,
            "MENU_PROBE_BATCH_SIZE must be greater than zero"
        );

        Ok(Self {
            http_port: env_var_or("HTTP_PORT", "8081")
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            providers,
            firestore,
            menu_probe,
        })
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        let enabled = |on: bool| if on { "Enabled" } else { "Disabled" };
        format!(
            "SmartBytes Server Configuration:\n\
             - HTTP Port: {}\n\
             - Environment: {}\n\
             - Nutrition Lookup (API Ninjas): {}\n\
             - Menu Search (Nutritionix): {}\n\
             - Places (Foursquare): {}\n\
             - Profile Store: {}\n\
             - Provider Retries: {} (base delay {} ms)\n\
             - Menu Probe: batches of {}, up to {} restaurants",
            self.http_port,
            self.environment,
            enabled(self.providers.api_ninjas.api_key.is_some()),
            enabled(
                self.providers.nutritionix.app_id.is_some()
                    && self.providers.nutritionix.api_key.is_some()
            ),
            enabled(self.providers.foursquare.api_key.is_some()),
            self.firestore
                .as_ref()
                .map_or("In-memory", |_| "Firestore"),
            self.providers.api_ninjas.retry.max_retries,
            self.providers.api_ninjas.retry.initial_backoff_ms,
            self.menu_probe.batch_size,
            self.menu_probe.max_restaurants,
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment variable treated as unset when empty
fn optional_env(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_hides_secrets() {
        let mut config = ServerConfig::default();
        config.providers.foursquare.api_key = Some("fsq-secret".to_owned());
        let summary = config.summary();
        assert!(summary.contains("Places (Foursquare): Enabled"));
        assert!(summary.contains("Profile Store: In-memory"));
        assert!(!summary.contains("fsq-secret"));
    }
}
