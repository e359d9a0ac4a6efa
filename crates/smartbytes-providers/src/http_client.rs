// ABOUTME: Pooled reqwest client shared by the nutrition, menu, places, and profile adapters
// ABOUTME: Timeouts are fixed once at startup; every upstream call carries them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use tracing::{debug, warn};

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default connection timeout in seconds
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

/// `User-Agent` sent to every provider
pub const USER_AGENT: &str = concat!("smartbytes/", env!("CARGO_PKG_VERSION"));

/// Request and connect timeouts applied to upstream calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientTimeouts {
    /// Whole-request timeout
    pub request: Duration,
    /// TCP/TLS connect timeout
    pub connect: Duration,
}

impl Default for ClientTimeouts {
    fn default() -> Self {
        Self::from_secs(DEFAULT_TIMEOUT_SECS, DEFAULT_CONNECT_TIMEOUT_SECS)
    }
}

impl ClientTimeouts {
    /// Timeouts from whole seconds; zero values fall back to the defaults
    #[must_use]
    pub fn from_secs(request_secs: u64, connect_secs: u64) -> Self {
        let or_default =
            |secs: u64, default: u64| Duration::from_secs(if secs == 0 { default } else { secs });
        Self {
            request: or_default(request_secs, DEFAULT_TIMEOUT_SECS),
            connect: or_default(connect_secs, DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

static TIMEOUTS: OnceLock<ClientTimeouts> = OnceLock::new();

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Fix the shared client's timeouts
///
/// Call once at startup before any provider client is created; later calls
/// are ignored with a debug log.
pub fn initialize_shared_client(timeout_secs: u64, connect_timeout_secs: u64) {
    let timeouts = ClientTimeouts::from_secs(timeout_secs, connect_timeout_secs);
    if TIMEOUTS.set(timeouts).is_err() {
        debug!(?timeouts, "Shared HTTP client timeouts already set, ignoring");
    }
}

/// Timeouts the shared client is (or will be) built with
#[must_use]
pub fn configured_timeouts() -> ClientTimeouts {
    TIMEOUTS.get().copied().unwrap_or_default()
}

/// Build a client with the given timeouts and the SmartBytes user agent
///
/// # Errors
///
/// Returns the builder error when the TLS backend cannot be initialised
pub fn build_client(timeouts: ClientTimeouts) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .user_agent(USER_AGENT)
        .build()
}

/// The process-wide provider client
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        let timeouts = configured_timeouts();
        build_client(timeouts).unwrap_or_else(|e| {
            warn!(
                error = %e,
                request_timeout_secs = timeouts.request.as_secs(),
                "Failed to build HTTP client with timeouts; provider calls will not time out"
            );
            Client::new()
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_timeouts_use_defaults() {
        let timeouts = ClientTimeouts::from_secs(0, 2);
        assert_eq!(timeouts.request, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(timeouts.connect, Duration::from_secs(2));
        assert_eq!(ClientTimeouts::default().connect, Duration::from_secs(5));
    }

    #[test]
    fn test_build_client_with_timeouts() {
        assert!(build_client(ClientTimeouts::from_secs(3, 1)).is_ok());
        assert!(USER_AGENT.starts_with("smartbytes/"));
    }
}
