// ABOUTME: Restaurant model returned by nearby search
// ABOUTME: Carries location, optional rating and photo, and the menu-data probe flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

/// A nearby restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    /// Display name
    pub name: String,
    /// Street or formatted address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Provider rating, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Provider place identifier
    pub place_id: String,
    /// Geocoded location
    pub location: GeoPoint,
    /// Representative photo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// Whether branded menu data was found for this restaurant
    #[serde(default)]
    pub has_menu_data: bool,
}
