// ABOUTME: Simulated order confirmation returned when a user "buys" a menu item
// ABOUTME: Progress stages describe the client-side animation timeline
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order lifecycle as reported to the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Progress animation still running
    Loading,
    /// Order reported as placed
    Success,
}

/// One progress checkpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderStage {
    /// Milliseconds after placement
    pub after_ms: u64,
    /// Progress shown at that point
    pub progress_percent: u8,
}

/// Confirmation for a simulated order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Generated order id
    pub order_id: Uuid,
    /// Ordered item
    pub item_name: String,
    /// Item image
    pub image_url: String,
    /// Placement timestamp
    pub placed_at: DateTime<Utc>,
    /// Progress checkpoints in ascending time order
    pub stages: Vec<OrderStage>,
    /// When the order flips to success (ms after placement)
    pub completes_after_ms: u64,
    /// Status at placement time
    pub status: OrderStatus,
}
