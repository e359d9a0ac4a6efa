// ABOUTME: Nutrition intelligence for restaurant menus: estimation, targets, policy, ranking
// ABOUTME: Deterministic logic over core models; network access only through NutritionLookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![deny(unsafe_code)]

//! # SmartBytes Intelligence
//!
//! Scoring and estimation logic used by the menu service:
//!
//! - **`food_categories`**: keyword table mapping food names to typical protein density
//! - **`protein_estimation`**: ordered strategy chain producing a protein estimate
//! - **`goal_calculator`**: Mifflin-St Jeor maintenance calories and goal targets
//! - **`dessert_policy`**: dessert detection and suppression rules
//! - **`menu_ranker`**: filtering and stable sorting of menu items

/// Static food category table
pub mod food_categories;

/// Protein estimation strategies
pub mod protein_estimation;

/// Calorie and protein targets
pub mod goal_calculator;

/// Dessert detection and recommendation policy
pub mod dessert_policy;

/// Menu filtering and sorting
pub mod menu_ranker;

pub use dessert_policy::{is_dessert_item, should_recommend_desserts};
pub use food_categories::{estimate_by_food_category, identify_food_category, FoodCategory};
pub use goal_calculator::{
    bmi, maintenance_calories, meal_calories, target_macros, FitnessGoal, GoalError, GoalProfile,
    MealTime, TargetMacros,
};
pub use menu_ranker::{is_vegetarian_by_keywords, protein_score, rank, RankContext};
pub use protein_estimation::{EstimationQuery, ProteinEstimator, ProteinStrategy};
