// ABOUTME: Menu sort options, filters, and ranked menu entries
// ABOUTME: SortOption wire names match the query strings accepted by the menu API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::food::{Confidence, FoodItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to a ranked menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Fewest calories first
    #[default]
    CaloriesAsc,
    /// Most calories first
    CaloriesDesc,
    /// Least protein first
    ProteinAsc,
    /// Most protein first
    ProteinDesc,
    /// Lowest composite protein score first
    ProteinRatioAsc,
    /// Highest composite protein score first
    ProteinRatioDesc,
}

impl SortOption {
    /// All options in display order
    pub const ALL: [Self; 6] = [
        Self::CaloriesAsc,
        Self::CaloriesDesc,
        Self::ProteinAsc,
        Self::ProteinDesc,
        Self::ProteinRatioAsc,
        Self::ProteinRatioDesc,
    ];

    /// Sort option implied by a stored fitness goal
    ///
    /// Unknown goals fall back to [`SortOption::CaloriesAsc`].
    #[must_use]
    pub fn for_goal(fitness_goal: &str) -> Self {
        match fitness_goal.trim().to_lowercase().as_str() {
            "build-muscle" => Self::ProteinRatioDesc,
            "maintain" => Self::ProteinDesc,
            _ => Self::CaloriesAsc,
        }
    }

    /// Wire name (e.g. `protein_ratio_desc`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CaloriesAsc => "calories_asc",
            Self::CaloriesDesc => "calories_desc",
            Self::ProteinAsc => "protein_asc",
            Self::ProteinDesc => "protein_desc",
            Self::ProteinRatioAsc => "protein_ratio_asc",
            Self::ProteinRatioDesc => "protein_ratio_desc",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CaloriesAsc => "Lowest Calories",
            Self::CaloriesDesc => "Highest Calories",
            Self::ProteinAsc => "Lowest Protein",
            Self::ProteinDesc => "Highest Protein",
            Self::ProteinRatioAsc => "Lowest Protein-to-Calorie Ratio",
            Self::ProteinRatioDesc => "Highest Protein-to-Calorie Ratio",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == wanted)
            .ok_or_else(|| format!("Unknown sort option: {s}"))
    }
}

/// Optional constraints applied before sorting
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MenuFilters {
    /// Exclude items with more calories than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<f64>,
    /// Exclude items with less protein than this (grams)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_protein: Option<f64>,
    /// Exclude items classified as non-vegetarian
    #[serde(default)]
    pub vegetarian: bool,
}

/// A menu item prepared for display, with estimation metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntry {
    /// The underlying item, protein filled in when it had to be estimated
    pub item: FoodItem,
    /// Restaurant the menu belongs to
    pub restaurant: String,
    /// Trust in the protein value
    pub protein_confidence: Confidence,
    /// Whether protein was estimated rather than reported
    pub protein_estimated: bool,
    /// Composite protein score (`protein * 4 + calories * 0.1`)
    pub score: f64,
}

impl AsRef<FoodItem> for MenuEntry {
    fn as_ref(&self) -> &FoodItem {
        &self.item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_mapping() {
        assert_eq!(SortOption::for_goal("build-muscle"), SortOption::ProteinRatioDesc);
        assert_eq!(SortOption::for_goal("lose-weight"), SortOption::CaloriesAsc);
        assert_eq!(SortOption::for_goal("maintain"), SortOption::ProteinDesc);
        assert_eq!(SortOption::for_goal("bulk"), SortOption::CaloriesAsc);
    }

    #[test]
    fn test_wire_names_round_trip_through_serde() {
        let json = serde_json::to_string(&SortOption::ProteinRatioDesc).unwrap();
        assert_eq!(json, "\"protein_ratio_desc\"");
        assert_eq!(
            "Protein_Desc".parse::<SortOption>().unwrap(),
            SortOption::ProteinDesc
        );
        assert!("protein_ratio".parse::<SortOption>().is_err());
    }
}
