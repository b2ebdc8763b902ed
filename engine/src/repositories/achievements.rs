//! Achievement catalog persistence

use anyhow::Result;
use stride_shared::AchievementSet;

use crate::store::{keys, KeyValueStore};

/// Repository for the achievement catalog
pub struct AchievementRepository;

impl AchievementRepository {
    /// Load the catalog; first launch gets the shipped, fully-locked set
    pub async fn load(store: &dyn KeyValueStore) -> AchievementSet {
        super::load_or(store, keys::ACHIEVEMENTS, AchievementSet::default()).await
    }

    pub async fn save(store: &dyn KeyValueStore, set: &AchievementSet) -> Result<()> {
        super::save(store, keys::ACHIEVEMENTS, set).await
    }
}
