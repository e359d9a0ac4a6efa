// ABOUTME: Integration tests for maintenance calories, goal targets, meal split, and BMI
// ABOUTME: Covers reference values, activity levels, and invalid input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use smartbytes_core::models::{Sex, UserProfile};
use smartbytes_intelligence::{
    bmi, maintenance_calories, meal_calories, target_macros, FitnessGoal, GoalError, GoalProfile,
    TargetMacros,
};

// ============================================================================
// Maintenance calories
// ============================================================================

#[test]
fn test_maintenance_reference_value() {
    // BMR = 700 + 1062.5 - 125 + 5 = 1642.5; x1.375 = 2258.4
    assert_eq!(maintenance_calories(25, 170.0, 2, 70.0, Sex::Male), Ok(2258));
}

#[test]
fn test_activity_levels_scale_bmr() {
    let low = maintenance_calories(25, 170.0, 1, 70.0, Sex::Male).unwrap();
    let mid = maintenance_calories(25, 170.0, 2, 70.0, Sex::Male).unwrap();
    let high = maintenance_calories(25, 170.0, 3, 70.0, Sex::Male).unwrap();
    assert_eq!(low, 1971);
    assert!(low < mid && mid < high);
    assert_eq!(high, 2546);
}

#[test]
fn test_female_constant_is_166_kcal_lower_before_multiplier() {
    // BMR base 600 + 1000 - 150 = 1450
    let male = maintenance_calories(30, 160.0, 1, 60.0, Sex::Male).unwrap();
    let female = maintenance_calories(30, 160.0, 1, 60.0, Sex::Female).unwrap();
    assert_eq!(male, 1746);
    assert_eq!(female, 1547);
}

#[test]
fn test_invalid_activity_level() {
    assert_eq!(
        maintenance_calories(25, 170.0, 4, 70.0, Sex::Male),
        Err(GoalError::InvalidActivityLevel(4))
    );
    assert_eq!(
        maintenance_calories(25, 170.0, 0, 70.0, Sex::Male),
        Err(GoalError::InvalidActivityLevel(0))
    );
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_gain_muscle_targets() {
    assert_eq!(
        target_macros(2000, FitnessGoal::GainMuscle, 80.0),
        TargetMacros {
            target_calories: 2200,
            target_protein: 176,
        }
    );
}

#[test]
fn test_lose_weight_and_balanced_targets() {
    let lose = target_macros(2000, FitnessGoal::LoseWeight, 80.0);
    assert_eq!(lose.target_calories, 1500);
    assert_eq!(lose.target_protein, 160);

    let balanced = target_macros(2000, FitnessGoal::Balanced, 80.0);
    assert_eq!(balanced.target_calories, 2000);
    assert_eq!(balanced.target_protein, 144);
}

#[test]
fn test_goal_parsing_is_case_insensitive() {
    assert_eq!("Gain Muscle".parse::<FitnessGoal>(), Ok(FitnessGoal::GainMuscle));
    assert_eq!(FitnessGoal::from_stored("BUILD-MUSCLE"), Ok(FitnessGoal::GainMuscle));
    assert!(matches!(
        "bulk".parse::<FitnessGoal>(),
        Err(GoalError::InvalidGoal(_))
    ));
}

// ============================================================================
// Meals and BMI
// ============================================================================

#[test]
fn test_meal_split() {
    assert_eq!(meal_calories(2000, "breakfast"), Ok(400));
    assert_eq!(meal_calories(2000, "Lunch"), Ok(600));
    assert_eq!(meal_calories(2000, "DINNER"), Ok(1000));
    assert!(matches!(
        meal_calories(2000, "brunch"),
        Err(GoalError::InvalidMealTime(_))
    ));
}

#[test]
fn test_bmi() {
    assert!((bmi(70.0, 175.0) - 22.857).abs() < 0.001);
}

#[test]
fn test_goal_profile_from_imperial_profile() {
    let profile = UserProfile {
        email: "sam@example.com".to_owned(),
        age: 25,
        height_in: 70.0,
        weight_lb: 180.0,
        sex: Sex::Male,
        fitness_goal: "build-muscle".to_owned(),
        activity_level: 2,
    };
    let goals = GoalProfile::from_profile(&profile).unwrap();

    // 70 in = 177.8 cm, 180 lb = 81.65 kg
    assert_eq!(goals.goal, FitnessGoal::GainMuscle);
    assert_eq!(goals.maintenance_calories, 2486);
    assert_eq!(goals.target_calories, 2735);
    assert_eq!(goals.target_protein, 180);
    assert_eq!(goals.meals.breakfast, 547);
    assert!((goals.bmi - 25.83).abs() < 0.01);
}
