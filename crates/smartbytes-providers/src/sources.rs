// ABOUTME: Provider-agnostic traits for menu and place sources used by the server
// ABOUTME: Implemented by the Nutritionix and Foursquare clients and by test stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::foursquare::FoursquareClient;
use crate::nutritionix::NutritionixClient;
use async_trait::async_trait;
use smartbytes_core::constants::service_names::{FOURSQUARE, NUTRITIONIX};
use smartbytes_core::errors::ProviderResult;
use smartbytes_core::models::{FoodItem, Restaurant};

/// Source of raw menu items for a restaurant
#[async_trait]
pub trait MenuSource: Send + Sync {
    /// Menu items published for `restaurant`
    async fn search_menu(&self, restaurant: &str) -> ProviderResult<Vec<FoodItem>>;

    /// Provider name used in logs
    fn name(&self) -> &'static str;
}

/// Source of nearby restaurants
#[async_trait]
pub trait PlaceSource: Send + Sync {
    /// Restaurants within `radius_m` meters of a point, at most `limit`
    async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        limit: u32,
    ) -> ProviderResult<Vec<Restaurant>>;

    /// Provider name used in logs
    fn name(&self) -> &'static str;
}

#[async_trait]
impl MenuSource for NutritionixClient {
    async fn search_menu(&self, restaurant: &str) -> ProviderResult<Vec<FoodItem>> {
        self.search_branded(restaurant).await
    }

    fn name(&self) -> &'static str {
        NUTRITIONIX
    }
}

#[async_trait]
impl PlaceSource for FoursquareClient {
    async fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_m: u32,
        limit: u32,
    ) -> ProviderResult<Vec<Restaurant>> {
        // Inherent method; includes representative photos
        Self::search_nearby(self, lat, lng, radius_m, limit).await
    }

    fn name(&self) -> &'static str {
        FOURSQUARE
    }
}
