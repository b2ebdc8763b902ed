//! Streak, totals and daily-progress persistence

use anyhow::Result;
use chrono::NaiveDate;
use stride_shared::{CumulativeTotals, DailyProgress, StreakState};

use crate::store::{keys, KeyValueStore};

/// Repository for the accumulating activity state
pub struct ActivityRepository;

impl ActivityRepository {
    pub async fn load_streak(store: &dyn KeyValueStore) -> StreakState {
        super::load_or(store, keys::STREAK, StreakState::default()).await
    }

    pub async fn save_streak(store: &dyn KeyValueStore, streak: &StreakState) -> Result<()> {
        super::save(store, keys::STREAK, streak).await
    }

    pub async fn load_totals(store: &dyn KeyValueStore) -> CumulativeTotals {
        super::load_or(store, keys::TOTALS, CumulativeTotals::default()).await
    }

    pub async fn save_totals(store: &dyn KeyValueStore, totals: &CumulativeTotals) -> Result<()> {
        super::save(store, keys::TOTALS, totals).await
    }

    /// Load today's progress; a record from an earlier date (or none at
    /// all) starts fresh at zero for `today`
    pub async fn load_daily_progress(store: &dyn KeyValueStore, today: NaiveDate) -> DailyProgress {
        let stored = super::load_or(store, keys::DAILY_PROGRESS, DailyProgress::new(today)).await;
        if stored.date == today {
            stored
        } else {
            DailyProgress::new(today)
        }
    }

    pub async fn save_daily_progress(
        store: &dyn KeyValueStore,
        progress: &DailyProgress,
    ) -> Result<()> {
        super::save(store, keys::DAILY_PROGRESS, progress).await
    }
}
