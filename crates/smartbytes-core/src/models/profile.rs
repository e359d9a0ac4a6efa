// ABOUTME: User profile model owned by the profile document store
// ABOUTME: Biometrics are stored in imperial units as entered during onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Biological sex used by the BMR formula
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male (+5 kcal constant)
    #[default]
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("Unknown sex: {other}")),
        }
    }
}

/// Fitness and dietary preferences for one user, keyed by email
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account email (document key)
    pub email: String,
    /// Age in years
    pub age: u32,
    /// Height in inches
    pub height_in: f64,
    /// Weight in pounds
    pub weight_lb: f64,
    /// Biological sex
    pub sex: Sex,
    /// Stored goal: `build-muscle`, `lose-weight`, or `maintain`
    pub fitness_goal: String,
    /// Activity level 1 (low) to 3 (high)
    pub activity_level: u8,
}
