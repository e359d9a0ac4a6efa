// ABOUTME: Daily calorie and protein targets from biometrics using Mifflin-St Jeor
// ABOUTME: Goal adjustments, per-meal calorie splits, BMI, and profile-derived goal summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Goal Calculator
//!
//! Maintenance calories follow the Mifflin-St Jeor equation:
//!
//! `BMR = 10 x weight_kg + 6.25 x height_cm - 5 x age + s`, with `s = +5` for
//! men and `s = -161` for women, scaled by an activity multiplier.
//!
//! # Reference
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use serde::{Deserialize, Serialize};
use smartbytes_core::constants::units::{CM_PER_INCH, KG_PER_POUND};
use smartbytes_core::models::{Sex, UserProfile};
use smartbytes_core::AppError;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Invalid input to a goal calculation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalError {
    /// Activity level outside 1..=3
    #[error("Invalid activity level: {0} (expected 1, 2, or 3)")]
    InvalidActivityLevel(u8),
    /// Goal not recognised
    #[error("Invalid goal: {0}")]
    InvalidGoal(String),
    /// Meal time not recognised
    #[error("Invalid time of day: {0}. Must be breakfast, lunch, or dinner")]
    InvalidMealTime(String),
}

impl From<GoalError> for AppError {
    fn from(error: GoalError) -> Self {
        Self::invalid_input(error.to_string())
    }
}

/// Calorie and protein strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    /// Caloric surplus, high protein
    GainMuscle,
    /// Caloric deficit
    LoseWeight,
    /// Maintenance
    Balanced,
}

impl FitnessGoal {
    /// Map the goal stored on a profile (`build-muscle`, `lose-weight`, `maintain`)
    ///
    /// # Errors
    ///
    /// Returns [`GoalError::InvalidGoal`] for any other value
    pub fn from_stored(value: &str) -> Result<Self, GoalError> {
        match value.trim().to_lowercase().as_str() {
            "build-muscle" => Ok(Self::GainMuscle),
            "lose-weight" => Ok(Self::LoseWeight),
            "maintain" => Ok(Self::Balanced),
            _ => Err(GoalError::InvalidGoal(value.to_owned())),
        }
    }

    const fn calorie_factor(self) -> f64 {
        match self {
            Self::GainMuscle => 1.1,
            Self::LoseWeight => 0.75,
            Self::Balanced => 1.0,
        }
    }

    const fn protein_g_per_kg(self) -> f64 {
        match self {
            Self::GainMuscle => 2.2,
            Self::LoseWeight => 2.0,
            Self::Balanced => 1.8,
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::GainMuscle => "gain muscle",
            Self::LoseWeight => "lose weight",
            Self::Balanced => "balanced",
        })
    }
}

impl FromStr for FitnessGoal {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gain muscle" => Ok(Self::GainMuscle),
            "lose weight" => Ok(Self::LoseWeight),
            "balanced" => Ok(Self::Balanced),
            _ => Err(GoalError::InvalidGoal(s.to_owned())),
        }
    }
}

/// Meal of the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealTime {
    /// 20% of daily calories
    Breakfast,
    /// 30% of daily calories
    Lunch,
    /// 50% of daily calories
    Dinner,
}

impl MealTime {
    const fn share(self) -> f64 {
        match self {
            Self::Breakfast => 0.2,
            Self::Lunch => 0.3,
            Self::Dinner => 0.5,
        }
    }
}

impl FromStr for MealTime {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            _ => Err(GoalError::InvalidMealTime(s.to_owned())),
        }
    }
}

/// Daily targets for a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetMacros {
    /// Target kcal/day
    pub target_calories: u32,
    /// Target protein g/day
    pub target_protein: u32,
}

fn round_non_negative(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}

fn activity_multiplier(activity_level: u8) -> Result<f64, GoalError> {
    match activity_level {
        1 => Ok(1.2),
        2 => Ok(1.375),
        3 => Ok(1.55),
        other => Err(GoalError::InvalidActivityLevel(other)),
    }
}

/// Maintenance calories (kcal/day)
///
/// Activity levels: 1 = under 30 min/day (x1.2), 2 = 30-60 min/day (x1.375),
/// 3 = over 60 min/day (x1.55).
///
/// # Errors
///
/// Returns [`GoalError::InvalidActivityLevel`] for levels outside 1..=3
pub fn maintenance_calories(
    age: u32,
    height_cm: f64,
    activity_level: u8,
    weight_kg: f64,
    sex: Sex,
) -> Result<u32, GoalError> {
    let multiplier = activity_multiplier(activity_level)?;
    let sex_constant = match sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };
    let bmr = 6.25f64.mul_add(height_cm, 10.0 * weight_kg) - 5.0 * f64::from(age) + sex_constant;
    Ok(round_non_negative(bmr * multiplier))
}

/// Target calories and protein for a goal
#[must_use]
pub fn target_macros(maintenance: u32, goal: FitnessGoal, weight_kg: f64) -> TargetMacros {
    TargetMacros {
        target_calories: round_non_negative(f64::from(maintenance) * goal.calorie_factor()),
        target_protein: round_non_negative(weight_kg * goal.protein_g_per_kg()),
    }
}

/// Calories for one meal (`breakfast`, `lunch`, or `dinner`, any case)
///
/// # Errors
///
/// Returns [`GoalError::InvalidMealTime`] for any other meal name
pub fn meal_calories(target_calories: u32, meal_time: &str) -> Result<u32, GoalError> {
    let meal: MealTime = meal_time.parse()?;
    Ok(round_non_negative(f64::from(target_calories) * meal.share()))
}

/// Body mass index, unrounded
#[must_use]
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Per-meal calorie targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealTargets {
    /// Breakfast kcal
    pub breakfast: u32,
    /// Lunch kcal
    pub lunch: u32,
    /// Dinner kcal
    pub dinner: u32,
}

/// Targets derived from a stored profile; recomputed on every request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalProfile {
    /// Goal the targets were computed for
    pub goal: FitnessGoal,
    /// Maintenance kcal/day
    pub maintenance_calories: u32,
    /// Goal-adjusted kcal/day
    pub target_calories: u32,
    /// Protein g/day
    pub target_protein: u32,
    /// Body mass index
    pub bmi: f64,
    /// Per-meal calorie split
    pub meals: MealTargets,
}

impl GoalProfile {
    /// Compute targets from a profile stored in imperial units
    ///
    /// # Errors
    ///
    /// Returns a [`GoalError`] when the stored goal or activity level is invalid
    pub fn from_profile(profile: &UserProfile) -> Result<Self, GoalError> {
        let height_cm = profile.height_in * CM_PER_INCH;
        let weight_kg = profile.weight_lb * KG_PER_POUND;
        let goal = FitnessGoal::from_stored(&profile.fitness_goal)?;

        let maintenance = maintenance_calories(
            profile.age,
            height_cm,
            profile.activity_level,
            weight_kg,
            profile.sex,
        )?;
        let targets = target_macros(maintenance, goal, weight_kg);
        let split = |meal: MealTime| {
            round_non_negative(f64::from(targets.target_calories) * meal.share())
        };

        Ok(Self {
            goal,
            maintenance_calories: maintenance,
            target_calories: targets.target_calories,
            target_protein: targets.target_protein,
            bmi: bmi(weight_kg, height_cm),
            meals: MealTargets {
                breakfast: split(MealTime::Breakfast),
                lunch: split(MealTime::Lunch),
                dinner: split(MealTime::Dinner),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartbytes_core::ErrorCode;

    #[test]
    fn test_female_constant() {
        // 600 + 1000 - 150 - 161 = 1289 x 1.2 = 1546.8
        assert_eq!(maintenance_calories(30, 160.0, 1, 60.0, Sex::Female), Ok(1547));
    }

    #[test]
    fn test_goal_string_parsing() {
        assert_eq!("Gain Muscle".parse::<FitnessGoal>(), Ok(FitnessGoal::GainMuscle));
        assert_eq!(
            FitnessGoal::from_stored("maintain"),
            Ok(FitnessGoal::Balanced)
        );
        assert!(matches!(
            FitnessGoal::from_stored("gain muscle"),
            Err(GoalError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_goal_error_maps_to_invalid_input() {
        let error = AppError::from(GoalError::InvalidActivityLevel(4));
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.http_status(), 400);
    }
}
