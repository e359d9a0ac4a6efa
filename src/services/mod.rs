// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Combines provider sources, the profile store, and the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

//! Domain service layer
//!
//! Route handlers parse and validate HTTP input, then delegate here. The CLI
//! reuses the same services.

/// Goal targets derived from stored profiles
pub mod goals;

/// Menu loading, protein enrichment, and personalized ranking
pub mod menu;

/// Simulated order confirmations
pub mod orders;

/// Nearby restaurant discovery and menu probing
pub mod restaurants;

pub use goals::GoalService;
pub use menu::MenuService;
pub use orders::simulate_order;
pub use restaurants::RestaurantService;
