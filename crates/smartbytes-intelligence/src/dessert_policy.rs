// ABOUTME: Dessert detection by keyword and the age/BMI rule for suppressing desserts
// ABOUTME: Chain-specific dessert names are checked before the generic keyword list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use smartbytes_core::constants::dessert_policy::{
    BMI_SUPPRESSION_THRESHOLD, MAX_AGE_FOR_DESSERTS,
};

/// Dessert substrings that apply at every restaurant
pub const GENERIC_DESSERT_KEYWORDS: &[&str] = &[
    "ice cream",
    "icedream",
    "sundae",
    "cookie",
    "brownie",
    "cake",
    "pie",
    "shake",
    "dessert",
];

/// Chain name fragment and the desserts it sells under brand names
const CHAIN_DESSERT_KEYWORDS: &[(&str, &[&str])] = &[
    ("mcdonald", &["mcflurry", "apple pie", "baked apple pie"]),
    ("wendy", &["frosty"]),
    ("dairy queen", &["blizzard", "dilly bar", "dipped cone"]),
    ("chick-fil-a", &["frosted", "milkshake"]),
    ("starbucks", &["frappuccino", "cake pop", "loaf"]),
    ("taco bell", &["cinnabon", "cinnamon twists"]),
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Whether `item_name` is a dessert at `restaurant_name`
///
/// Matching is case-insensitive substring search.
#[must_use]
pub fn is_dessert_item(item_name: &str, restaurant_name: &str) -> bool {
    let item = item_name.to_lowercase();
    let restaurant = restaurant_name.to_lowercase();

    let chain_match = CHAIN_DESSERT_KEYWORDS
        .iter()
        .find(|(chain, _)| restaurant.contains(chain))
        .is_some_and(|(_, keywords)| contains_any(&item, keywords));

    chain_match || contains_any(&item, GENERIC_DESSERT_KEYWORDS)
}

/// Whether desserts may be recommended to a user
///
/// Suppressed for users older than 30 or with a BMI of 25 or more.
#[must_use]
pub fn should_recommend_desserts(age: u32, bmi: f64) -> bool {
    !(age > MAX_AGE_FOR_DESSERTS || bmi >= BMI_SUPPRESSION_THRESHOLD)
}
