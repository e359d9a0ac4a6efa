// ABOUTME: External data provider clients for nutrition facts, branded menus, and places
// ABOUTME: Shares one pooled HTTP client and a bounded retry loop across providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![deny(unsafe_code)]

//! # SmartBytes Providers
//!
//! - **`api_ninjas`**: single-food nutrition lookup implementing `NutritionLookup`
//! - **`nutritionix`**: branded restaurant menu search
//! - **`foursquare`**: nearby restaurant search and representative photos
//! - **`http_client`**: process-wide pooled `reqwest::Client`
//! - **`retry`**: exponential backoff for retryable provider failures
//! - **`sources`**: `MenuSource` and `PlaceSource` traits the server depends on

/// Single-food nutrition client
pub mod api_ninjas;

/// Nearby places client
pub mod foursquare;

/// Shared HTTP client with configured timeouts
pub mod http_client;

/// Branded menu search client
pub mod nutritionix;

/// Bounded retry with exponential backoff
pub mod retry;

/// Menu and place source traits
pub mod sources;

pub use api_ninjas::{ApiNinjasClient, ApiNinjasConfig};
pub use foursquare::{FoursquareClient, FoursquareConfig};
pub use nutritionix::{NutritionixClient, NutritionixConfig};
pub use retry::RetryConfig;
pub use sources::{MenuSource, PlaceSource};
