// ABOUTME: Menu service loading branded items, estimating missing protein, and ranking
// ABOUTME: Personalizes sort order and dessert suppression from the stored profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use crate::resources::ServerResources;
use futures_util::future::join_all;
use smartbytes_core::constants::units::{CM_PER_INCH, KG_PER_POUND};
use smartbytes_core::models::{
    Confidence, FoodItem, MenuEntry, MenuFilters, SortOption, UserProfile,
};
use smartbytes_core::{AppError, AppResult, ErrorCode};
use smartbytes_intelligence::{
    bmi, protein_score, rank, should_recommend_desserts, EstimationQuery, RankContext,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Menu operations for one restaurant
pub struct MenuService {
    resources: Arc<ServerResources>,
}

impl MenuService {
    /// Create a service over shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Raw menu items for `restaurant`, missing nutrients defaulted to zero
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a blank name and `EXTERNAL_SERVICE_ERROR`
    /// with a generic message when the menu provider fails
    pub async fn detailed_menu_items(&self, restaurant: &str) -> AppResult<Vec<FoodItem>> {
        let restaurant = restaurant.trim();
        if restaurant.is_empty() {
            return Err(AppError::invalid_input("Restaurant name is required"));
        }

        self.resources
            .menu_source
            .search_menu(restaurant)
            .await
            .map_err(|e| {
                warn!(restaurant, error = %e, "Menu provider request failed");
                AppError::new(ErrorCode::ExternalServiceError, "Failed to load menu items")
                    .with_source(e)
            })
    }

    /// Fill in protein for items whose provider value is zero
    ///
    /// Estimates run concurrently; reported values are kept with high confidence.
    pub async fn enrich_protein(&self, restaurant: &str, items: Vec<FoodItem>) -> Vec<MenuEntry> {
        let estimator = &self.resources.estimator;
        let entries = items.into_iter().map(|mut item| async move {
            if item.nutrition.protein > 0.0 {
                return (item, Confidence::High, false);
            }
            let query = EstimationQuery::new(item.name.clone())
                .with_macros(item.nutrition.known_macros());
            let estimate = estimator.estimate(&query).await;
            item.nutrition.protein = f64::from(estimate.estimated_protein);
            (item, estimate.confidence, true)
        });

        join_all(entries)
            .await
            .into_iter()
            .map(|(item, protein_confidence, protein_estimated)| MenuEntry {
                score: protein_score(&item),
                item,
                restaurant: restaurant.to_owned(),
                protein_confidence,
                protein_estimated,
            })
            .collect()
    }

    /// Ranked menu for `restaurant`
    ///
    /// Sort order is `sort` when given, else derived from the profile goal,
    /// else calories ascending. Desserts are suppressed when the profile's age
    /// and BMI advise against them.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::detailed_menu_items`]
    pub async fn sorted_menu(
        &self,
        restaurant: &str,
        sort: Option<SortOption>,
        filters: &MenuFilters,
        profile: Option<&UserProfile>,
    ) -> AppResult<Vec<MenuEntry>> {
        let restaurant = restaurant.trim();
        let items = self.detailed_menu_items(restaurant).await?;
        let total = items.len();
        let entries = self.enrich_protein(restaurant, items).await;

        let suppress_desserts = profile.is_some_and(|p| {
            let bmi = bmi(p.weight_lb * KG_PER_POUND, p.height_in * CM_PER_INCH);
            !should_recommend_desserts(p.age, bmi)
        });
        let sort = sort
            .or_else(|| profile.map(|p| SortOption::for_goal(&p.fitness_goal)))
            .unwrap_or_default();

        let context = RankContext::new(restaurant).suppress_desserts(suppress_desserts);
        let ranked = rank(&entries, sort, filters, &context);
        info!(
            restaurant,
            %sort,
            suppress_desserts,
            total,
            returned = ranked.len(),
            "Menu ranked"
        );
        Ok(ranked)
    }

    /// Ranked menu personalized by the profile stored for `email`, if any
    ///
    /// A profile that cannot be loaded is logged and ignored.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Self::sorted_menu`]
    pub async fn menu_for_user(
        &self,
        restaurant: &str,
        sort: Option<SortOption>,
        filters: &MenuFilters,
        email: Option<&str>,
    ) -> AppResult<Vec<MenuEntry>> {
        let profile = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(email) => match self.resources.profiles.get_profile(email).await {
                Ok(profile) => {
                    debug!(email, found = profile.is_some(), "Profile lookup for menu");
                    profile
                }
                Err(e) => {
                    warn!(email, error = %e, "Ignoring unreadable profile for menu ranking");
                    None
                }
            },
            None => None,
        };
        self.sorted_menu(restaurant, sort, filters, profile.as_ref())
            .await
    }
}
