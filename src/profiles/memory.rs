// ABOUTME: Process-local profile store backed by a concurrent hash map
// ABOUTME: Emails are matched case-insensitively
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 SmartBytes

use super::ProfileStore;
use async_trait::async_trait;
use dashmap::DashMap;
use smartbytes_core::models::UserProfile;
use smartbytes_core::AppResult;
use tracing::debug;

/// In-memory profile store
#[derive(Debug, Default)]
pub struct MemoryProfileStore {
    profiles: DashMap<String, UserProfile>,
}

impl MemoryProfileStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `profiles`
    #[must_use]
    pub fn with_profiles(profiles: impl IntoIterator<Item = UserProfile>) -> Self {
        let store = Self::new();
        for profile in profiles {
            store.profiles.insert(key(&profile.email), profile);
        }
        store
    }
}

fn key(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, email: &str) -> AppResult<Option<UserProfile>> {
        Ok(self.profiles.get(&key(email)).map(|entry| entry.value().clone()))
    }

    async fn save_profile(&self, profile: &UserProfile) -> AppResult<()> {
        debug!(email = %profile.email, "Saving profile in memory");
        self.profiles.insert(key(&profile.email), profile.clone());
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
