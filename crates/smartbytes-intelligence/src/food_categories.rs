// ABOUTME: Keyword-based food category table with typical protein density per 100 g
// ABOUTME: Used as the last-resort protein estimate and for degenerate-result rescue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use smartbytes_core::constants::protein::{DEFAULT_ESTIMATE_G, STRONG_MATCH_KEYWORDS};
use smartbytes_core::models::{Confidence, ProteinEstimation};

/// A food category recognised from keywords in an item name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodCategory {
    /// Category name
    pub name: &'static str,
    /// Lowercase substrings that identify the category
    pub keywords: &'static [&'static str],
    /// Typical protein per 100 g serving (grams)
    pub protein_estimate: u32,
    /// Trust in the typical value
    pub confidence: Confidence,
}

impl FoodCategory {
    /// Number of this category's keywords found in `search_text`
    ///
    /// `search_text` must already be lowercase.
    #[must_use]
    pub fn keyword_hits(&self, search_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|keyword| search_text.contains(*keyword))
            .count()
    }
}

/// Categories in match-priority order
pub const FOOD_CATEGORIES: &[FoodCategory] = &[
    FoodCategory {
        name: "Meat",
        keywords: &["chicken", "beef", "steak", "pork", "turkey", "lamb", "veal", "meat"],
        protein_estimate: 25,
        confidence: Confidence::High,
    },
    FoodCategory {
        name: "Fish",
        keywords: &["fish", "tuna", "salmon", "tilapia", "cod", "halibut", "seafood", "shrimp"],
        protein_estimate: 20,
        confidence: Confidence::High,
    },
    FoodCategory {
        name: "Dairy",
        keywords: &["milk", "cheese", "yogurt", "greek yogurt", "dairy", "cottage cheese"],
        protein_estimate: 10,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Legumes",
        keywords: &["beans", "lentils", "chickpeas", "tofu", "soy", "tempeh", "legume"],
        protein_estimate: 9,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Eggs",
        keywords: &["egg", "eggs", "omelette", "frittata"],
        protein_estimate: 13,
        confidence: Confidence::High,
    },
    FoodCategory {
        name: "Protein Supplements",
        keywords: &["protein", "whey", "protein shake", "protein powder", "protein bar"],
        protein_estimate: 70,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Grains",
        keywords: &["bread", "rice", "pasta", "cereal", "oats", "quinoa", "grain"],
        protein_estimate: 4,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Vegetables",
        keywords: &["vegetable", "salad", "broccoli", "spinach", "kale"],
        protein_estimate: 2,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Nuts",
        keywords: &["nuts", "almonds", "peanuts", "walnuts", "cashews"],
        protein_estimate: 20,
        confidence: Confidence::Medium,
    },
    FoodCategory {
        name: "Fast Food",
        keywords: &["burger", "fries", "pizza", "fast food", "sandwich"],
        protein_estimate: 15,
        confidence: Confidence::Low,
    },
];

fn search_text(food_name: &str, description: Option<&str>) -> String {
    format!("{} {}", food_name, description.unwrap_or_default()).to_lowercase()
}

/// Identify the food category of an item from its name and optional description
///
/// A category with at least two keyword hits wins outright, scanning in table
/// order. Otherwise the first category with any hit is returned.
#[must_use]
pub fn identify_food_category(
    food_name: &str,
    description: Option<&str>,
) -> Option<&'static FoodCategory> {
    let text = search_text(food_name, description);

    FOOD_CATEGORIES
        .iter()
        .find(|category| category.keyword_hits(&text) >= STRONG_MATCH_KEYWORDS)
        .or_else(|| {
            FOOD_CATEGORIES
                .iter()
                .find(|category| category.keyword_hits(&text) > 0)
        })
}

/// Estimate protein from the item's food category alone
///
/// Unrecognised items get a conservative 5 g at low confidence.
#[must_use]
pub fn estimate_by_food_category(food_name: &str, description: Option<&str>) -> ProteinEstimation {
    identify_food_category(food_name, description).map_or(
        ProteinEstimation::new(DEFAULT_ESTIMATE_G, Confidence::Low),
        |category| ProteinEstimation::new(category.protein_estimate, category.confidence),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grilled_chicken_is_meat() {
        let category = identify_food_category("grilled chicken breast", None);
        assert_eq!(category.map(|c| c.name), Some("Meat"));

        let estimate = estimate_by_food_category("grilled chicken breast", None);
        assert_eq!(estimate.estimated_protein, 25);
        assert_eq!(estimate.confidence, Confidence::High);
    }

    #[test]
    fn test_strong_match_beats_table_order() {
        // One Meat hit ("chicken") but two Dairy hits ("cheese", "milk")
        let category = identify_food_category("chicken with cheese and milk", None);
        assert_eq!(category.map(|c| c.name), Some("Dairy"));
    }

    #[test]
    fn test_description_participates_in_matching() {
        let category = identify_food_category("Bowl", Some("Brown Rice"));
        assert_eq!(category.map(|c| c.name), Some("Grains"));
    }

    #[test]
    fn test_unknown_food_defaults() {
        assert!(identify_food_category("xyz", None).is_none());
        let estimate = estimate_by_food_category("xyz", None);
        assert_eq!(estimate.estimated_protein, 5);
        assert_eq!(estimate.confidence, Confidence::Low);
    }
}
