// ABOUTME: Error types for external provider adapters (places, nutrition, profile store)
// ABOUTME: Classifies failures as retryable or terminal for the bounded retry loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use thiserror::Error;

/// Failure talking to an external provider
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    /// Provider returned a non-success HTTP status
    #[error("{provider} API request failed with status {status_code}: {message}")]
    Api {
        /// Provider display name
        provider: String,
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Provider rejected the request with HTTP 429
    #[error("{provider} API rate limit exceeded")]
    RateLimitExceeded {
        /// Provider display name
        provider: String,
    },
    /// Provider rejected our credentials (401/403)
    #[error("{provider} authentication failed: {reason}")]
    AuthenticationFailed {
        /// Provider display name
        provider: String,
        /// Reason reported by the provider
        reason: String,
    },
    /// Connection-level failure before a response was received
    #[error("{provider} network error: {message}")]
    Network {
        /// Provider display name
        provider: String,
        /// Underlying error text
        message: String,
    },
    /// Request exceeded the configured timeout
    #[error("{provider} request timed out")]
    Timeout {
        /// Provider display name
        provider: String,
    },
    /// Response body could not be decoded
    #[error("Failed to parse {provider} response: {message}")]
    Parse {
        /// Provider display name
        provider: String,
        /// Decoder error text
        message: String,
    },
    /// Provider credentials are not configured
    #[error("{provider} is not configured: {detail}")]
    NotConfigured {
        /// Provider display name
        provider: String,
        /// Which setting is missing
        detail: String,
    },
}

impl ProviderError {
    /// Whether a retry with backoff could plausibly succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::RateLimitExceeded { .. } | Self::Network { .. } | Self::Timeout { .. } => true,
            Self::Api { status_code, .. } => *status_code >= 500,
            Self::AuthenticationFailed { .. } | Self::Parse { .. } | Self::NotConfigured { .. } => {
                false
            }
        }
    }

    /// Build an error from an HTTP status and response body
    #[must_use]
    pub fn from_status(provider: &str, status_code: u16, body: String) -> Self {
        match status_code {
            401 | 403 => Self::AuthenticationFailed {
                provider: provider.to_owned(),
                reason: body,
            },
            429 => Self::RateLimitExceeded {
                provider: provider.to_owned(),
            },
            _ => Self::Api {
                provider: provider.to_owned(),
                status_code,
                message: body,
            },
        }
    }

    /// Classify a transport error from reqwest
    #[cfg(feature = "provider-errors")]
    #[must_use]
    pub fn from_reqwest(provider: &str, error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                provider: provider.to_owned(),
            }
        } else if error.is_decode() {
            Self::Parse {
                provider: provider.to_owned(),
                message: error.to_string(),
            }
        } else if let Some(status) = error.status() {
            Self::from_status(provider, status.as_u16(), error.to_string())
        } else {
            Self::Network {
                provider: provider.to_owned(),
                message: error.to_string(),
            }
        }
    }
}

/// Result alias for provider adapters
pub type ProviderResult<T> = Result<T, ProviderError>;
