//! Engine state snapshots
//!
//! The tracker publishes an immutable [`TrackerSnapshot`] after every
//! applied sample or edit. UI layers subscribe through a watch channel
//! and render from the snapshot alone; they never reach into tracker
//! internals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stride_shared::{CumulativeTotals, DerivedMetrics, StreakState};

/// Everything a display surface needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub date: NaiveDate,
    /// Steps accumulated since local midnight
    pub today_steps: u64,
    pub daily_goal: u32,
    /// Goal completion in percent, capped at 100
    pub goal_progress_percent: f64,
    pub derived: DerivedMetrics,
    pub streak: StreakState,
    pub totals: CumulativeTotals,
    pub achievements_unlocked: usize,
    pub achievements_total: usize,
}

/// Goal completion in percent, capped at 100 and rounded to one decimal
pub fn goal_progress_percent(today_steps: u64, daily_goal: u32) -> f64 {
    if daily_goal == 0 {
        return 0.0;
    }
    let percent = today_steps as f64 / f64::from(daily_goal) * 100.0;
    (percent.min(100.0) * 10.0).round() / 10.0
}
