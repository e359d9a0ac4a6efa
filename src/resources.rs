// ABOUTME: Centralized resource container shared by route handlers and services
// ABOUTME: Holds configuration, provider sources, the protein estimator, and the profile store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! # Server Resources
//!
//! Built once at startup and shared behind an `Arc`. Provider clients sit
//! behind the `MenuSource`, `PlaceSource`, and `NutritionLookup` seams so
//! tests can swap in stubs.

use crate::config::ServerConfig;
use crate::profiles::{FirestoreProfileStore, MemoryProfileStore, ProfileStore};
use smartbytes_core::NutritionLookup;
use smartbytes_intelligence::ProteinEstimator;
use smartbytes_providers::{
    ApiNinjasClient, FoursquareClient, MenuSource, NutritionixClient, PlaceSource,
};
use std::sync::Arc;
use tracing::info;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Branded menu search
    pub menu_source: Arc<dyn MenuSource>,
    /// Nearby restaurant search
    pub places: Arc<dyn PlaceSource>,
    /// Single-food nutrition lookup
    pub nutrition_lookup: Arc<dyn NutritionLookup>,
    /// Profile storage
    pub profiles: Arc<dyn ProfileStore>,
    /// Protein estimator wired to `nutrition_lookup`
    pub estimator: Arc<ProteinEstimator>,
}

impl ServerResources {
    /// Assemble resources from explicit components
    #[must_use]
    pub fn new(
        config: ServerConfig,
        menu_source: Arc<dyn MenuSource>,
        places: Arc<dyn PlaceSource>,
        nutrition_lookup: Arc<dyn NutritionLookup>,
        profiles: Arc<dyn ProfileStore>,
    ) -> Self {
        let estimator = Arc::new(ProteinEstimator::new(Some(Arc::clone(&nutrition_lookup))));
        Self {
            config: Arc::new(config),
            menu_source,
            places,
            nutrition_lookup,
            profiles,
            estimator,
        }
    }

    /// Build the production provider clients and profile store from configuration
    ///
    /// Call after `initialize_shared_client` so the clients pick up the configured timeouts.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let providers = &config.providers;
        let menu_source: Arc<dyn MenuSource> =
            Arc::new(NutritionixClient::new(providers.nutritionix.clone()));
        let places: Arc<dyn PlaceSource> =
            Arc::new(FoursquareClient::new(providers.foursquare.clone()));
        let nutrition_lookup: Arc<dyn NutritionLookup> =
            Arc::new(ApiNinjasClient::new(providers.api_ninjas.clone()));

        let profiles: Arc<dyn ProfileStore> = match &config.firestore {
            Some(firestore) => Arc::new(FirestoreProfileStore::new(firestore.clone())),
            None => Arc::new(MemoryProfileStore::new()),
        };
        info!(
            profile_store = profiles.backend_name(),
            menu_source = menu_source.name(),
            places = places.name(),
            "Server resources initialized"
        );

        Self::new(config, menu_source, places, nutrition_lookup, profiles)
    }
}
