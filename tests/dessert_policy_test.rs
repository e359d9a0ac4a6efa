// ABOUTME: Integration tests for dessert detection and the age/BMI suppression rule
// ABOUTME: Includes boundary values and chain-specific dessert names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartbytes_intelligence::{is_dessert_item, should_recommend_desserts};

#[test]
fn test_suppression_boundaries() {
    assert!(!should_recommend_desserts(31, 20.0));
    assert!(!should_recommend_desserts(25, 25.0));
    assert!(should_recommend_desserts(25, 24.9));
    assert!(should_recommend_desserts(30, 18.0));
}

#[test]
fn test_generic_keywords_any_restaurant() {
    assert!(is_dessert_item("Chocolate Chip Cookie", "Panera Bread"));
    assert!(is_dessert_item("Vanilla Shake", "Shake Shack"));
    assert!(!is_dessert_item("Grilled Chicken Sandwich", "Panera Bread"));
}

#[test]
fn test_chain_specific_desserts() {
    assert!(is_dessert_item("Oreo McFlurry", "McDonald's"));
    assert!(is_dessert_item("Chocolate Frosty", "Wendy's"));
    assert!(is_dessert_item("Blizzard Treat", "Dairy Queen"));
    // Brand names only count at their own chain
    assert!(!is_dessert_item("Frosty Lemonade", "Subway"));
}
