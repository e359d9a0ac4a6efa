// ABOUTME: Goal targets command computing maintenance, target calories, and protein
// ABOUTME: Runs entirely offline from command-line biometrics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::print_json;
use anyhow::Result;
use smartbytes::profiles::validate_profile;
use smartbytes_core::models::{Sex, UserProfile};
use smartbytes_intelligence::GoalProfile;

/// Print the goal profile for the given biometrics
pub fn run(
    age: u32,
    height_in: f64,
    weight_lb: f64,
    sex: Sex,
    goal: String,
    activity_level: u8,
) -> Result<()> {
    let profile = UserProfile {
        email: "cli@localhost".to_owned(),
        age,
        height_in,
        weight_lb,
        sex,
        fitness_goal: goal,
        activity_level,
    };
    validate_profile(&profile)?;
    print_json(&GoalProfile::from_profile(&profile)?)
}
