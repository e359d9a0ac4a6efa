// ABOUTME: Bounded retry with exponential backoff for provider GET requests
// ABOUTME: Retries 429, 5xx, timeouts, and connection failures; other errors return at once
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use smartbytes_core::errors::{ProviderError, ProviderResult};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Retries after the first attempt
    pub max_retries: u32,
    /// Backoff before the first retry, doubled for each further retry
    pub initial_backoff_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 2,
            initial_backoff_ms: 250,
        }
    }
}

impl RetryConfig {
    /// No retries at all
    #[must_use]
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            initial_backoff_ms: 0,
        }
    }

    /// Delay before retry number `retry` (1-based)
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2_u64.saturating_pow(retry.saturating_sub(1));
        Duration::from_millis(self.initial_backoff_ms.saturating_mul(factor))
    }
}

async fn attempt<T>(provider: &str, request: RequestBuilder) -> ProviderResult<T>
where
    T: DeserializeOwned,
{
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, &e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ProviderError::from_status(provider, status.as_u16(), body));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, &e))?;
    serde_json::from_slice(&bytes).map_err(|e| ProviderError::Parse {
        provider: provider.to_owned(),
        message: e.to_string(),
    })
}

/// Send a GET built by `build` and decode the JSON body, retrying on transient failures
///
/// `build` is called once per attempt because a sent `RequestBuilder` is consumed.
///
/// # Errors
///
/// Returns the last [`ProviderError`] once retries are exhausted, or the first
/// non-retryable error.
pub async fn get_json_with_retry<T, F>(
    provider: &str,
    retry: &RetryConfig,
    build: F,
) -> ProviderResult<T>
where
    T: DeserializeOwned,
    F: Fn() -> RequestBuilder + Send,
{
    let mut retries = 0;
    loop {
        match attempt(provider, build()).await {
            Ok(value) => {
                debug!(provider, attempt = retries + 1, "Provider request succeeded");
                return Ok(value);
            }
            Err(error) if error.is_retryable() && retries < retry.max_retries => {
                retries += 1;
                let backoff = retry.backoff(retries);
                warn!(
                    provider,
                    attempt = retries,
                    max_retries = retry.max_retries,
                    backoff_ms = backoff.as_millis(),
                    error = %error,
                    "Retrying provider request"
                );
                tokio::time::sleep(backoff).await;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles() {
        let retry = RetryConfig {
            max_retries: 3,
            initial_backoff_ms: 100,
        };
        assert_eq!(retry.backoff(1), Duration::from_millis(100));
        assert_eq!(retry.backoff(2), Duration::from_millis(200));
        assert_eq!(retry.backoff(3), Duration::from_millis(400));
    }
}
