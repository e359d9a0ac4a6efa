// ABOUTME: Filters and stably sorts menu items by calories, protein, or composite protein score
// ABOUTME: Always drops sauces; optionally drops desserts and non-vegetarian items
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::dessert_policy::is_dessert_item;
use smartbytes_core::constants::ranking::{
    CALORIE_SCORE_WEIGHT, EXCLUDED_KEYWORD, NON_VEGETARIAN_KEYWORDS, PROTEIN_SCORE_WEIGHT,
    VEGETARIAN_MARKERS,
};
use smartbytes_core::models::{FoodItem, MenuFilters, SortOption};
use std::cmp::Ordering;

/// Whether `keyword` occurs in `name` starting at a word boundary
fn mentions(name: &str, keyword: &str) -> bool {
    name.match_indices(keyword).any(|(start, _)| {
        !name[..start]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric)
    })
}

/// Keyword classifier: vegetarian unless the name mentions meat or fish
///
/// Explicit vegetarian markers ("veggie", "impossible", ...) win over meat words.
#[must_use]
pub fn is_vegetarian_by_keywords(item: &FoodItem) -> bool {
    let name = item.name.to_lowercase();
    if VEGETARIAN_MARKERS.iter().any(|marker| mentions(&name, marker)) {
        return true;
    }
    !NON_VEGETARIAN_KEYWORDS
        .iter()
        .any(|keyword| mentions(&name, keyword))
}

/// Per-request inputs to ranking that are not part of the items themselves
#[derive(Debug, Clone, Copy)]
pub struct RankContext<'a> {
    /// Restaurant the items belong to, for chain-specific dessert names
    pub restaurant_name: &'a str,
    /// Drop desserts (decided by the dessert policy)
    pub suppress_desserts: bool,
    /// Returns `true` for vegetarian items
    pub is_vegetarian: fn(&FoodItem) -> bool,
}

impl<'a> RankContext<'a> {
    /// Context with desserts allowed and the keyword vegetarian classifier
    #[must_use]
    pub fn new(restaurant_name: &'a str) -> Self {
        Self {
            restaurant_name,
            suppress_desserts: false,
            is_vegetarian: is_vegetarian_by_keywords,
        }
    }

    /// Set dessert suppression
    #[must_use]
    pub const fn suppress_desserts(mut self, suppress: bool) -> Self {
        self.suppress_desserts = suppress;
        self
    }

    /// Replace the vegetarian classifier
    #[must_use]
    pub fn with_vegetarian_classifier(mut self, classifier: fn(&FoodItem) -> bool) -> Self {
        self.is_vegetarian = classifier;
        self
    }
}

/// Composite protein score: `protein * 4 + calories * 0.1`
///
/// A weighted sum rather than a ratio; higher means more protein-dense and
/// more filling.
#[must_use]
pub fn protein_score(item: &FoodItem) -> f64 {
    item.nutrition
        .protein
        .mul_add(PROTEIN_SCORE_WEIGHT, item.nutrition.calories * CALORIE_SCORE_WEIGHT)
}

fn keep(item: &FoodItem, filters: &MenuFilters, context: &RankContext<'_>) -> bool {
    let name = item.name.to_lowercase();
    if name.contains(EXCLUDED_KEYWORD) {
        return false;
    }
    if filters
        .max_calories
        .is_some_and(|max| item.nutrition.calories > max)
    {
        return false;
    }
    if filters
        .min_protein
        .is_some_and(|min| item.nutrition.protein < min)
    {
        return false;
    }
    if filters.vegetarian && !(context.is_vegetarian)(item) {
        return false;
    }
    !(context.suppress_desserts && is_dessert_item(&item.name, context.restaurant_name))
}

fn compare(sort: SortOption, a: &FoodItem, b: &FoodItem) -> Ordering {
    let (facts_a, facts_b) = (&a.nutrition, &b.nutrition);
    match sort {
        SortOption::CaloriesAsc => facts_a.calories.total_cmp(&facts_b.calories),
        SortOption::CaloriesDesc => facts_b.calories.total_cmp(&facts_a.calories),
        SortOption::ProteinAsc => facts_a.protein.total_cmp(&facts_b.protein),
        SortOption::ProteinDesc => facts_b.protein.total_cmp(&facts_a.protein),
        SortOption::ProteinRatioAsc => protein_score(a).total_cmp(&protein_score(b)),
        SortOption::ProteinRatioDesc => protein_score(b).total_cmp(&protein_score(a)),
    }
}

/// Filter and sort menu items
///
/// The sort is stable, so equal keys keep their provider order. The input is
/// never modified.
#[must_use]
pub fn rank<T>(
    items: &[T],
    sort: SortOption,
    filters: &MenuFilters,
    context: &RankContext<'_>,
) -> Vec<T>
where
    T: AsRef<FoodItem> + Clone,
{
    let mut ranked: Vec<T> = items
        .iter()
        .filter(|item| keep((*item).as_ref(), filters, context))
        .cloned()
        .collect();
    ranked.sort_by(|a, b| compare(sort, a.as_ref(), b.as_ref()));
    ranked
}
