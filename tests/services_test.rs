// ABOUTME: Service-level tests for menu ranking, restaurant probing, and goal targets
// ABOUTME: Providers are replaced by in-process stubs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    food, food_with_macros, profile, restaurant, test_resources, StubMenuSource, StubPlaces,
};
use pretty_assertions::assert_eq;
use smartbytes::services::{GoalService, MenuService, RestaurantService};
use smartbytes_core::models::{Confidence, MenuEntry, MenuFilters, SortOption};
use smartbytes_core::ErrorCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;

fn names(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.item.name.as_str()).collect()
}

fn chipotle_menu() -> Vec<smartbytes_core::models::FoodItem> {
    vec![
        food("Chicken Burrito Bowl", 665.0, 49.0),
        food("Chips & Guacamole", 770.0, 10.0),
        // protein missing from the provider; 300 - 8*9 - 20*4 = 148 kcal -> 37 g, capped at 30 g
        food_with_macros("Steak Tacos", 300.0, 0.0, 8.0, 20.0),
        food("Tomatillo Red-Chili Salsa Sauce", 30.0, 0.0),
    ]
}

// ============================================================================
// Menu
// ============================================================================

#[tokio::test]
async fn test_missing_protein_is_estimated_and_flagged() {
    let resources = test_resources(
        StubMenuSource::new().with_menu("Chipotle", chipotle_menu()),
        StubPlaces::new(vec![]),
        vec![],
    );
    let menu = MenuService::new(resources)
        .sorted_menu("Chipotle", Some(SortOption::ProteinAsc), &MenuFilters::default(), None)
        .await
        .unwrap();

    assert_eq!(
        names(&menu),
        vec!["Chips & Guacamole", "Steak Tacos", "Chicken Burrito Bowl"]
    );
    let tacos = &menu[1];
    assert!(tacos.protein_estimated);
    assert!((tacos.item.nutrition.protein - 30.0).abs() < f64::EPSILON);
    assert_eq!(tacos.protein_confidence, Confidence::High);
    assert!(!menu[0].protein_estimated);
    assert_eq!(menu[0].restaurant, "Chipotle");
    assert!((menu[2].score - 262.5).abs() < 1e-9);
}

#[tokio::test]
async fn test_profile_goal_selects_sort_and_suppresses_desserts() {
    let items = vec![
        food("Double Cheeseburger", 450.0, 25.0),
        food("Chocolate Shake", 530.0, 12.0),
        food("Grilled Chicken Wrap", 350.0, 30.0),
    ];
    let resources = test_resources(StubMenuSource::new().with_menu("Wendy's", items), StubPlaces::new(vec![]), vec![]);
    let service = MenuService::new(resources);

    // 45-year-old: desserts suppressed; build-muscle -> protein_ratio_desc
    let older = profile("pat@example.com", 45, 70.0, 160.0, "build-muscle");
    let ranked = service
        .sorted_menu("Wendy's", None, &MenuFilters::default(), Some(&older))
        .await
        .unwrap();
    assert_eq!(names(&ranked), vec!["Grilled Chicken Wrap", "Double Cheeseburger"]);

    // 22-year-old with BMI ~23: desserts allowed; lose-weight -> calories_asc
    let younger = profile("kim@example.com", 22, 70.0, 160.0, "lose-weight");
    let ranked = service
        .sorted_menu("Wendy's", None, &MenuFilters::default(), Some(&younger))
        .await
        .unwrap();
    assert_eq!(
        names(&ranked),
        vec!["Grilled Chicken Wrap", "Double Cheeseburger", "Chocolate Shake"]
    );
}

#[tokio::test]
async fn test_menu_for_user_loads_stored_profile() {
    let items = vec![food("Apple Pie", 230.0, 2.0), food("McChicken", 400.0, 14.0)];
    let resources = test_resources(
        StubMenuSource::new().with_menu("McDonald's", items),
        StubPlaces::new(vec![]),
        vec![profile("sam@example.com", 35, 70.0, 180.0, "maintain")],
    );
    let service = MenuService::new(resources);

    let personalized = service
        .menu_for_user("McDonald's", None, &MenuFilters::default(), Some("sam@example.com"))
        .await
        .unwrap();
    assert_eq!(names(&personalized), vec!["McChicken"]);

    let anonymous = service
        .menu_for_user("McDonald's", None, &MenuFilters::default(), Some("nobody@example.com"))
        .await
        .unwrap();
    assert_eq!(names(&anonymous), vec!["Apple Pie", "McChicken"]);
}

#[tokio::test]
async fn test_menu_provider_failure_is_generic() {
    let resources = test_resources(StubMenuSource::new().failing_for("Subway"), StubPlaces::new(vec![]), vec![]);
    let error = MenuService::new(resources)
        .sorted_menu("Subway", None, &MenuFilters::default(), None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.message, "Failed to load menu items");
}

#[tokio::test]
async fn test_blank_restaurant_is_invalid() {
    let resources = test_resources(StubMenuSource::new(), StubPlaces::new(vec![]), vec![]);
    let error = MenuService::new(resources)
        .detailed_menu_items("   ")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

// ============================================================================
// Restaurants
// ============================================================================

#[tokio::test]
async fn test_probe_keeps_only_restaurants_with_menus() {
    let places: Vec<_> = ["Chipotle", "Joe's Diner", "Panera Bread", "Broken Grill"]
        .into_iter()
        .map(restaurant)
        .collect();
    let menus = StubMenuSource::new()
        .with_menu("Chipotle", vec![food("Burrito", 1000.0, 50.0)])
        .with_menu("Panera Bread", vec![food("Soup", 200.0, 8.0)])
        .failing_for("Broken Grill");
    let resources = test_resources(menus, StubPlaces::new(places), vec![]);

    let found = RestaurantService::new(resources)
        .search_nearby_with_menu_data(39.68, -75.75, None, None)
        .await
        .unwrap();

    let found_names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(found_names, vec!["Chipotle", "Panera Bread"]);
    assert!(found.iter().all(|r| r.has_menu_data));
}

#[tokio::test]
async fn test_probe_stops_after_enough_restaurants() {
    let places: Vec<_> = (0..30).map(|i| restaurant(&format!("Spot {i}"))).collect();
    let mut menus = StubMenuSource::new();
    for i in 0..30 {
        menus = menus.with_menu(&format!("Spot {i}"), vec![food("Plate", 500.0, 20.0)]);
    }
    let menus = Arc::new(menus);
    let resources = Arc::new(smartbytes::ServerResources::new(
        smartbytes::ServerConfig::default(),
        Arc::clone(&menus) as Arc<dyn smartbytes_providers::MenuSource>,
        Arc::new(StubPlaces::new(places)),
        Arc::new(common::StubLookup::new()),
        Arc::new(smartbytes::profiles::MemoryProfileStore::new()),
    ));

    let found = RestaurantService::new(resources)
        .search_nearby_with_menu_data(39.68, -75.75, None, Some(30))
        .await
        .unwrap();

    assert_eq!(found.len(), 10);
    // two batches of five are enough
    assert_eq!(menus.calls.load(Ordering::SeqCst), 10);
}

#[tokio::test]
async fn test_invalid_coordinates_rejected() {
    let resources = test_resources(StubMenuSource::new(), StubPlaces::new(vec![]), vec![]);
    let error = RestaurantService::new(resources)
        .search_nearby(91.0, 0.0, None, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ValueOutOfRange);
}

#[tokio::test]
async fn test_places_failure_is_generic() {
    let resources = test_resources(StubMenuSource::new(), StubPlaces::failing(), vec![]);
    let error = RestaurantService::new(resources)
        .search_nearby(39.68, -75.75, None, None)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
}

// ============================================================================
// Goals
// ============================================================================

#[tokio::test]
async fn test_goal_profile_for_stored_user() {
    let resources = test_resources(
        StubMenuSource::new(),
        StubPlaces::new(vec![]),
        vec![profile("sam@example.com", 25, 70.0, 180.0, "build-muscle")],
    );
    let service = GoalService::new(resources);

    let goals = service.goal_profile("sam@example.com").await.unwrap();
    assert_eq!(goals.target_calories, 2735);

    let missing = service.goal_profile("nobody@example.com").await.unwrap_err();
    assert_eq!(missing.code, ErrorCode::ResourceNotFound);
}
