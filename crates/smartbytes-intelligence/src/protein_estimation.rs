// ABOUTME: Protein estimation as an ordered chain of strategies where the first result wins
// ABOUTME: Macro differential, direct nutrition lookup, and food-category fallback with zero rescue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Protein estimation for menu items that lack a reported protein value.
//!
//! The default chain is:
//!
//! 1. [`MacroDifferential`]: protein from calories left over after fat and carbs
//! 2. [`DirectLookup`]: protein reported by a [`NutritionLookup`] provider
//! 3. [`CategoryFallback`]: typical protein density of the item's food category
//!
//! A final estimate of 0 g is rescued to a small category-based value when the
//! item's category is recognisable.

use crate::food_categories::{estimate_by_food_category, identify_food_category};
use async_trait::async_trait;
use smartbytes_core::constants::energy::{
    KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN, MAX_PROTEIN_CALORIE_SHARE,
};
use smartbytes_core::constants::protein::{DEGENERATE_RESCUE_FACTOR, MIN_DIFFERENTIAL_PROTEIN_G};
use smartbytes_core::models::{Confidence, KnownMacros, ProteinEstimation};
use smartbytes_core::NutritionLookup;
use std::sync::Arc;
use tracing::debug;

/// Input to a protein estimate
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EstimationQuery {
    /// Item name
    pub food_name: String,
    /// Optional free-text description
    pub description: Option<String>,
    /// Macros already known for the item
    pub known_macros: Option<KnownMacros>,
}

impl EstimationQuery {
    /// Query for a bare food name
    pub fn new(food_name: impl Into<String>) -> Self {
        Self {
            food_name: food_name.into(),
            ..Self::default()
        }
    }

    /// Attach a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attach known macros
    #[must_use]
    pub const fn with_macros(mut self, macros: KnownMacros) -> Self {
        self.known_macros = Some(macros);
        self
    }
}

/// One way of producing a protein estimate
#[async_trait]
pub trait ProteinStrategy: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce an estimate, or `None` to defer to the next strategy
    async fn estimate(&self, query: &EstimationQuery) -> Option<ProteinEstimation>;
}

fn round_grams(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

/// Protein from the calories not accounted for by fat and carbohydrates
///
/// Capped at 40% of calories. Results of 1 g or less defer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroDifferential;

impl MacroDifferential {
    /// Synchronous form of the strategy
    #[must_use]
    pub fn compute(macros: &KnownMacros) -> Option<ProteinEstimation> {
        let calories = macros.calories.filter(|c| *c > 0.0)?;
        let fat = macros.total_fat.unwrap_or_default();
        let carbs = macros.total_carbs.unwrap_or_default();

        let remaining = calories - fat * KCAL_PER_G_FAT - carbs * KCAL_PER_G_CARBS;
        if remaining <= 0.0 {
            return None;
        }

        let cap = round_grams(calories * MAX_PROTEIN_CALORIE_SHARE / KCAL_PER_G_PROTEIN);
        let protein = round_grams(remaining / KCAL_PER_G_PROTEIN).min(cap);
        if protein <= MIN_DIFFERENTIAL_PROTEIN_G {
            return None;
        }

        let confidence = if fat > 0.0 && carbs > 0.0 {
            Confidence::High
        } else {
            Confidence::Medium
        };
        Some(ProteinEstimation::new(protein, confidence))
    }
}

#[async_trait]
impl ProteinStrategy for MacroDifferential {
    fn name(&self) -> &'static str {
        "macro_differential"
    }

    async fn estimate(&self, query: &EstimationQuery) -> Option<ProteinEstimation> {
        query.known_macros.as_ref().and_then(Self::compute)
    }
}

/// Protein reported by an external nutrition provider
pub struct DirectLookup {
    lookup: Arc<dyn NutritionLookup>,
}

impl DirectLookup {
    /// Wrap a lookup implementation
    #[must_use]
    pub fn new(lookup: Arc<dyn NutritionLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl ProteinStrategy for DirectLookup {
    fn name(&self) -> &'static str {
        "direct_lookup"
    }

    async fn estimate(&self, query: &EstimationQuery) -> Option<ProteinEstimation> {
        let found = self.lookup.lookup(&query.food_name).await?;
        if !found.protein_reported {
            debug!(food = %query.food_name, "Protein not reported by lookup, deferring");
            return None;
        }
        Some(ProteinEstimation::new(
            round_grams(found.nutrition.protein),
            Confidence::High,
        ))
    }
}

/// Typical protein density of the recognised food category
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryFallback;

#[async_trait]
impl ProteinStrategy for CategoryFallback {
    fn name(&self) -> &'static str {
        "category_fallback"
    }

    async fn estimate(&self, query: &EstimationQuery) -> Option<ProteinEstimation> {
        Some(estimate_by_food_category(
            &query.food_name,
            query.description.as_deref(),
        ))
    }
}

/// Runs strategies in order and returns the first estimate produced
pub struct ProteinEstimator {
    strategies: Vec<Box<dyn ProteinStrategy>>,
}

impl ProteinEstimator {
    /// Default chain; the lookup step is skipped when no provider is given
    #[must_use]
    pub fn new(lookup: Option<Arc<dyn NutritionLookup>>) -> Self {
        let mut strategies: Vec<Box<dyn ProteinStrategy>> = vec![Box::new(MacroDifferential)];
        if let Some(lookup) = lookup {
            strategies.push(Box::new(DirectLookup::new(lookup)));
        }
        strategies.push(Box::new(CategoryFallback));
        Self { strategies }
    }

    /// Custom chain
    #[must_use]
    pub fn with_strategies(strategies: Vec<Box<dyn ProteinStrategy>>) -> Self {
        Self { strategies }
    }

    /// Estimate protein for `query`
    ///
    /// Always produces a value: when every strategy defers, the food-category
    /// estimate is used.
    pub async fn estimate(&self, query: &EstimationQuery) -> ProteinEstimation {
        let mut chosen = None;
        for strategy in &self.strategies {
            if let Some(estimate) = strategy.estimate(query).await {
                debug!(
                    food = %query.food_name,
                    strategy = strategy.name(),
                    grams = estimate.estimated_protein,
                    confidence = %estimate.confidence,
                    "Protein estimated"
                );
                chosen = Some(estimate);
                break;
            }
        }

        let estimate = chosen.unwrap_or_else(|| {
            estimate_by_food_category(&query.food_name, query.description.as_deref())
        });
        rescue_zero(estimate, query)
    }
}

fn rescue_zero(estimate: ProteinEstimation, query: &EstimationQuery) -> ProteinEstimation {
    if estimate.estimated_protein > 0 {
        return estimate;
    }
    identify_food_category(&query.food_name, query.description.as_deref()).map_or(
        estimate,
        |category| {
            let grams =
                round_grams(f64::from(category.protein_estimate) * DEGENERATE_RESCUE_FACTOR).max(1);
            ProteinEstimation::new(grams, Confidence::Low)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn macros(calories: f64, fat: f64, carbs: f64) -> KnownMacros {
        KnownMacros {
            calories: Some(calories),
            total_fat: Some(fat),
            total_carbs: Some(carbs),
        }
    }

    #[test]
    fn test_differential_with_full_macros() {
        // 500 - 20*9 - 40*4 = 160 kcal -> 40 g, cap round(500*0.4/4) = 50
        let estimate = MacroDifferential::compute(&macros(500.0, 20.0, 40.0)).unwrap();
        assert_eq!(estimate.estimated_protein, 40);
        assert_eq!(estimate.confidence, Confidence::High);
    }

    #[test]
    fn test_differential_is_capped() {
        // No fat/carbs: 300 kcal would be 75 g, capped at 30 g
        let estimate = MacroDifferential::compute(&macros(300.0, 0.0, 0.0)).unwrap();
        assert_eq!(estimate.estimated_protein, 30);
        assert_eq!(estimate.confidence, Confidence::Medium);
    }

    #[test]
    fn test_differential_defers_on_small_or_negative_remainder() {
        assert!(MacroDifferential::compute(&macros(100.0, 10.0, 5.0)).is_none());
        assert!(MacroDifferential::compute(&macros(0.0, 1.0, 1.0)).is_none());
        // remaining 4 kcal -> 1 g, treated as no result
        assert!(MacroDifferential::compute(&macros(94.0, 10.0, 0.0)).is_none());
    }

    #[test]
    fn test_round_grams_handles_non_finite() {
        assert_eq!(round_grams(f64::NAN), 0);
        assert_eq!(round_grams(-3.0), 0);
        assert_eq!(round_grams(2.5), 3);
    }
}
