// ABOUTME: SmartBytes server library: configuration, logging, profiles, services, and HTTP routes
// ABOUTME: Wires the intelligence and provider crates into an axum API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![deny(unsafe_code)]

//! # SmartBytes
//!
//! Restaurant discovery with nutrition-aware menu ranking.
//!
//! - [`config`]: environment-only `ServerConfig`
//! - [`logging`]: `tracing` subscriber setup
//! - [`profiles`]: `ProfileStore` with in-memory and Firestore backends
//! - [`resources`]: shared dependencies handed to routes and services
//! - [`services`]: menu, restaurant, goal, and order logic
//! - [`routes`]: axum router for the HTTP API
//!
//! Domain types live in `smartbytes_core`, scoring and estimation in
//! `smartbytes_intelligence`, and provider clients in `smartbytes_providers`.

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Profile storage backends
pub mod profiles;

/// Shared server resources
pub mod resources;

/// HTTP API routes
pub mod routes;

/// Domain services
pub mod services;

pub use config::ServerConfig;
pub use resources::ServerResources;
pub use routes::router;
