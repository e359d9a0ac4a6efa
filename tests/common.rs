// ABOUTME: Shared test utilities: quiet logging, menu fixtures, and stub providers
// ABOUTME: Stubs stand in for the menu, places, and nutrition providers in service and route tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `smartbytes`

use async_trait::async_trait;
use smartbytes::config::ServerConfig;
use smartbytes::profiles::{MemoryProfileStore, ProfileStore};
use smartbytes::ServerResources;
use smartbytes_core::errors::{ProviderError, ProviderResult};
use smartbytes_core::models::{
    FoodItem, GeoPoint, NutritionFacts, NutritionMatch, Restaurant, Sex, UserProfile,
};
use smartbytes_core::NutritionLookup;
use smartbytes_providers::{MenuSource, PlaceSource};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Menu item with the given name, calories, and protein (other nutrients zero)
pub fn food(name: &str, calories: f64, protein: f64) -> FoodItem {
    FoodItem {
        name: name.to_owned(),
        brand_name: String::new(),
        serving_size: 1.0,
        serving_unit: "serving".to_owned(),
        nutrition: NutritionFacts {
            calories,
            protein,
            ..NutritionFacts::default()
        },
    }
}

/// Menu item with fat and carbohydrates as well
pub fn food_with_macros(name: &str, calories: f64, protein: f64, fat: f64, carbs: f64) -> FoodItem {
    let mut item = food(name, calories, protein);
    item.nutrition.total_fat = fat;
    item.nutrition.total_carbs = carbs;
    item
}

/// Restaurant fixture
pub fn restaurant(name: &str) -> Restaurant {
    Restaurant {
        name: name.to_owned(),
        address: Some("1 Main St".to_owned()),
        rating: None,
        place_id: format!("fsq-{}", name.to_lowercase().replace(' ', "-")),
        location: GeoPoint {
            lat: 39.68,
            lng: -75.75,
        },
        photo: None,
        has_menu_data: false,
    }
}

/// Profile fixture in imperial units
pub fn profile(email: &str, age: u32, height_in: f64, weight_lb: f64, goal: &str) -> UserProfile {
    UserProfile {
        email: email.to_owned(),
        age,
        height_in,
        weight_lb,
        sex: Sex::Male,
        fitness_goal: goal.to_owned(),
        activity_level: 2,
    }
}

/// Menu source returning fixed menus keyed by restaurant name
#[derive(Default)]
pub struct StubMenuSource {
    menus: HashMap<String, Vec<FoodItem>>,
    failing: Vec<String>,
    pub calls: AtomicUsize,
}

impl StubMenuSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_menu(mut self, restaurant: &str, items: Vec<FoodItem>) -> Self {
        self.menus.insert(restaurant.to_owned(), items);
        self
    }

    pub fn failing_for(mut self, restaurant: &str) -> Self {
        self.failing.push(restaurant.to_owned());
        self
    }
}

#[async_trait]
impl MenuSource for StubMenuSource {
    async fn search_menu(&self, restaurant: &str) -> ProviderResult<Vec<FoodItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.iter().any(|r| r == restaurant) {
            return Err(ProviderError::Api {
                provider: "stub".to_owned(),
                status_code: 500,
                message: "boom".to_owned(),
            });
        }
        Ok(self.menus.get(restaurant).cloned().unwrap_or_default())
    }

    fn name(&self) -> &'static str {
        "stub-menu"
    }
}

/// Place source returning a fixed list, or failing
pub struct StubPlaces {
    restaurants: Vec<Restaurant>,
    fail: bool,
}

impl StubPlaces {
    pub fn new(restaurants: Vec<Restaurant>) -> Self {
        Self {
            restaurants,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            restaurants: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl PlaceSource for StubPlaces {
    async fn search_nearby(
        &self,
        _lat: f64,
        _lng: f64,
        _radius_m: u32,
        limit: u32,
    ) -> ProviderResult<Vec<Restaurant>> {
        if self.fail {
            return Err(ProviderError::Timeout {
                provider: "stub".to_owned(),
            });
        }
        Ok(self
            .restaurants
            .iter()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "stub-places"
    }
}

/// Nutrition lookup answering from a fixed table of protein grams
#[derive(Default)]
pub struct StubLookup {
    protein: HashMap<String, Option<f64>>,
    pub calls: AtomicUsize,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// `protein = None` simulates a premium-only (non-numeric) protein field
    pub fn with(mut self, food: &str, protein: Option<f64>) -> Self {
        self.protein.insert(food.to_lowercase(), protein);
        self
    }
}

#[async_trait]
impl NutritionLookup for StubLookup {
    async fn lookup(&self, food_name: &str) -> Option<NutritionMatch> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let protein = self.protein.get(&food_name.to_lowercase())?;
        Some(NutritionMatch {
            name: food_name.to_owned(),
            serving_size_g: 100.0,
            nutrition: NutritionFacts {
                protein: protein.unwrap_or_default(),
                ..NutritionFacts::default()
            },
            protein_reported: protein.is_some(),
        })
    }
}

/// Resources wired to stubs and an in-memory profile store
pub fn test_resources(
    menus: StubMenuSource,
    places: StubPlaces,
    profiles: Vec<UserProfile>,
) -> Arc<ServerResources> {
    init_test_logging();
    let profiles: Arc<dyn ProfileStore> = Arc::new(MemoryProfileStore::with_profiles(profiles));
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        Arc::new(menus),
        Arc::new(places),
        Arc::new(StubLookup::new()),
        profiles,
    ))
}
