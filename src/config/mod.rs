// ABOUTME: Configuration module for the SmartBytes server
// ABOUTME: Environment-only settings loaded once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

/// Environment-variable configuration
pub mod environment;

pub use environment::{
    Environment, FirestoreConfig, MenuProbeConfig, ProvidersConfig, ServerConfig,
};
