// ABOUTME: Menu and nearby-restaurant commands backed by the live providers
// ABOUTME: Requires provider credentials in the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::print_json;
use anyhow::{anyhow, Result};
use smartbytes::services::{MenuService, RestaurantService};
use smartbytes::ServerResources;
use smartbytes_core::models::{MenuFilters, SortOption};
use std::sync::Arc;

/// Print the ranked menu for `restaurant`
pub async fn ranked(
    resources: Arc<ServerResources>,
    restaurant: &str,
    sort: Option<&str>,
    filters: &MenuFilters,
) -> Result<()> {
    let sort = sort
        .map(str::parse::<SortOption>)
        .transpose()
        .map_err(|e| anyhow!(e))?;
    let items = MenuService::new(resources)
        .sorted_menu(restaurant, sort, filters, None)
        .await?;
    print_json(&items)
}

/// Print restaurants near a point
pub async fn nearby(
    resources: Arc<ServerResources>,
    lat: f64,
    lng: f64,
    radius: Option<u32>,
    limit: Option<u32>,
    with_menu: bool,
) -> Result<()> {
    let service = RestaurantService::new(resources);
    let restaurants = if with_menu {
        service
            .search_nearby_with_menu_data(lat, lng, radius, limit)
            .await?
    } else {
        service.search_nearby(lat, lng, radius, limit).await?
    };
    print_json(&restaurants)
}
