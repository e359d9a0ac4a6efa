// ABOUTME: Simulated ordering that returns a confirmation with a progress timeline
// ABOUTME: No payment or delivery integration; the client animates the stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use chrono::Utc;
use smartbytes_core::constants::orders::{
    COMPLETES_AFTER_MS, DEFAULT_IMAGE_URL, DEFAULT_ITEM_NAME, PROGRESS_STAGES,
};
use smartbytes_core::models::{OrderConfirmation, OrderStage, OrderStatus};
use tracing::info;
use uuid::Uuid;

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Confirm an order for `item_name`, falling back to the default name and image
#[must_use]
pub fn simulate_order(item_name: Option<&str>, image_url: Option<&str>) -> OrderConfirmation {
    let confirmation = OrderConfirmation {
        order_id: Uuid::new_v4(),
        item_name: non_blank(item_name).unwrap_or(DEFAULT_ITEM_NAME).to_owned(),
        image_url: non_blank(image_url).unwrap_or(DEFAULT_IMAGE_URL).to_owned(),
        placed_at: Utc::now(),
        stages: PROGRESS_STAGES
            .iter()
            .map(|&(after_ms, progress_percent)| OrderStage {
                after_ms,
                progress_percent,
            })
            .collect(),
        completes_after_ms: COMPLETES_AFTER_MS,
        status: OrderStatus::Loading,
    };
    info!(order_id = %confirmation.order_id, item = %confirmation.item_name, "Order simulated");
    confirmation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_item_uses_defaults() {
        let order = simulate_order(Some("  "), None);
        assert_eq!(order.item_name, "your item");
        assert_eq!(order.image_url, "/images/Default.png");
        assert_eq!(order.status, OrderStatus::Loading);
    }

    #[test]
    fn test_stages_end_before_completion() {
        let order = simulate_order(Some("Big Mac"), Some("/images/bigmac.png"));
        let percents: Vec<u8> = order.stages.iter().map(|s| s.progress_percent).collect();
        assert_eq!(percents, vec![25, 65, 100]);
        assert!(order.stages.iter().all(|s| s.after_ms < order.completes_after_ms));
        assert_eq!(order.completes_after_ms, 5000);
    }
}
