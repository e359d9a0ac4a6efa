// ABOUTME: Food item and nutrition facts models mapped from provider responses
// ABOUTME: Also defines protein estimates with their confidence tiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro and micronutrient facts for one serving
///
/// Every field defaults to 0 when the provider omits it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy (kcal)
    pub calories: f64,
    /// Total fat (g)
    pub total_fat: f64,
    /// Saturated fat (g)
    pub saturated_fat: f64,
    /// Cholesterol (mg)
    pub cholesterol: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Total carbohydrates (g)
    pub total_carbs: f64,
    /// Dietary fiber (g)
    pub dietary_fiber: f64,
    /// Sugars (g)
    pub sugars: f64,
    /// Protein (g), measured or estimated
    pub protein: f64,
    /// Potassium (mg)
    pub potassium: f64,
    /// Calcium (% daily value)
    pub calcium: f64,
    /// Iron (% daily value)
    pub iron: f64,
}

impl NutritionFacts {
    /// Replace negative or non-finite values with 0
    #[must_use]
    pub fn clamped(self) -> Self {
        let fix = |v: f64| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Self {
            calories: fix(self.calories),
            total_fat: fix(self.total_fat),
            saturated_fat: fix(self.saturated_fat),
            cholesterol: fix(self.cholesterol),
            sodium: fix(self.sodium),
            total_carbs: fix(self.total_carbs),
            dietary_fiber: fix(self.dietary_fiber),
            sugars: fix(self.sugars),
            protein: fix(self.protein),
            potassium: fix(self.potassium),
            calcium: fix(self.calcium),
            iron: fix(self.iron),
        }
    }

    /// Macros usable for protein estimation
    #[must_use]
    pub const fn known_macros(&self) -> KnownMacros {
        KnownMacros {
            calories: Some(self.calories),
            total_fat: Some(self.total_fat),
            total_carbs: Some(self.total_carbs),
        }
    }
}

/// A branded menu item with its nutrition facts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Item name as listed by the provider
    pub name: String,
    /// Brand (restaurant chain) name
    pub brand_name: String,
    /// Serving quantity
    pub serving_size: f64,
    /// Serving unit (e.g. "burger", "g")
    pub serving_unit: String,
    /// Nutrition facts for one serving
    pub nutrition: NutritionFacts,
}

impl AsRef<Self> for FoodItem {
    fn as_ref(&self) -> &Self {
        self
    }
}

/// Result of a single-food nutrition lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionMatch {
    /// Food name echoed by the provider
    pub name: String,
    /// Serving size in grams
    pub serving_size_g: f64,
    /// Nutrition facts, missing fields defaulted to 0
    pub nutrition: NutritionFacts,
    /// Whether the provider reported protein as a number
    pub protein_reported: bool,
}

/// Partial macro information known for an item before estimation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KnownMacros {
    /// Energy (kcal)
    pub calories: Option<f64>,
    /// Total fat (g)
    pub total_fat: Option<f64>,
    /// Total carbohydrates (g)
    pub total_carbs: Option<f64>,
}

/// Qualitative trust in an estimated value
///
/// Ordered `Low < Medium < High`. Display only; never used as a numeric weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    /// Rough guess
    Low,
    /// Derived from partial data
    Medium,
    /// Measured or derived from complete data
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Estimated protein content with its confidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinEstimation {
    /// Protein in whole grams
    pub estimated_protein: u32,
    /// Trust in the estimate
    pub confidence: Confidence,
}

impl ProteinEstimation {
    /// Create an estimation
    #[must_use]
    pub const fn new(estimated_protein: u32, confidence: Confidence) -> Self {
        Self {
            estimated_protein,
            confidence,
        }
    }
}
