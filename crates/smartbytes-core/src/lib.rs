// ABOUTME: Core types and constants for SmartBytes restaurant nutrition intelligence
// ABOUTME: Foundation crate with error handling, domain models, constants, and lookup seam
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

#![deny(unsafe_code)]

//! # SmartBytes Core
//!
//! Foundation crate providing shared types and constants for the SmartBytes
//! menu intelligence service. The intelligence and provider crates both build
//! on it, so it is kept small and dependency-light.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ProviderError`
//! - **constants**: Nutrition science constants, policy thresholds, and provider defaults
//! - **models**: Food items, nutrition facts, user profiles, restaurants, orders
//! - **lookup**: The `NutritionLookup` trait implemented by nutrition providers

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`FoodItem`, `NutritionFacts`, `UserProfile`, `Restaurant`, ...)
pub mod models;

/// Single-food nutrition lookup abstraction
pub mod lookup;

pub use errors::{AppError, AppResult, ErrorCode};
pub use lookup::NutritionLookup;
