//! Profile and daily-goal persistence

use anyhow::Result;
use stride_shared::BiometricProfile;

use crate::store::{keys, KeyValueStore};

/// Repository for user-editable settings
pub struct ProfileRepository;

impl ProfileRepository {
    /// Load the biometric profile, defaulting on first launch
    pub async fn load(store: &dyn KeyValueStore) -> BiometricProfile {
        super::load_or(store, keys::PROFILE, BiometricProfile::default()).await
    }

    pub async fn save(store: &dyn KeyValueStore, profile: &BiometricProfile) -> Result<()> {
        super::save(store, keys::PROFILE, profile).await
    }

    /// Load the daily step goal, falling back to the configured default
    pub async fn load_daily_goal(store: &dyn KeyValueStore, default: u32) -> u32 {
        super::load_or(store, keys::DAILY_GOAL, default).await
    }

    pub async fn save_daily_goal(store: &dyn KeyValueStore, goal: u32) -> Result<()> {
        super::save(store, keys::DAILY_GOAL, &goal).await
    }
}
