// ABOUTME: Domain models shared across SmartBytes crates
// ABOUTME: Food items and nutrition facts, user profiles, restaurants, menus, and orders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

/// Food items, nutrition facts, and protein estimates
pub mod food;
/// Menu sorting options, filters, and ranked entries
pub mod menu;
/// Simulated order confirmations
pub mod order;
/// User biometrics and goals
pub mod profile;
/// Restaurants returned by the places provider
pub mod restaurant;

pub use food::{Confidence, FoodItem, KnownMacros, NutritionFacts, NutritionMatch, ProteinEstimation};
pub use menu::{MenuEntry, MenuFilters, SortOption};
pub use order::{OrderConfirmation, OrderStage, OrderStatus};
pub use profile::{Sex, UserProfile};
pub use restaurant::{GeoPoint, Restaurant};
