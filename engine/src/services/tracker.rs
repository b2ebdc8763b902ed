//! Step tracking engine service
//!
//! [`StepTracker`] is the single state object behind the pedometer
//! screen. It consumes raw platform step-counter samples, derives the
//! display metrics, keeps the daily-goal streak, accumulates lifetime
//! totals, evaluates the achievement catalog and persists everything
//! through the key-value store. Updates are synchronous: each sample is
//! fully applied, best-effort persist included, before the next one is
//! processed.
//!
//! The platform counter is monotonically non-decreasing within a session
//! but restarts at an arbitrary point whenever the app or device does.
//! The tracker therefore rebases every sample against the last one seen
//! and only ever feeds deltas into the accumulating state.

use std::sync::Arc;

use chrono::{Local, NaiveDate};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use stride_shared::{
    achievements, activity_metrics, AchievementSet, BiometricProfile, CumulativeTotals,
    DailyProgress, EvaluationContext, StreakState, StreakTransition,
};

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::repositories::{AchievementRepository, ActivityRepository, ProfileRepository};
use crate::services::profile::{ProfileInput, ProfileService};
use crate::state::{goal_progress_percent, TrackerSnapshot};
use crate::store::KeyValueStore;

/// The engine state object behind the pedometer screen
pub struct StepTracker {
    store: Arc<dyn KeyValueStore>,
    profile: BiometricProfile,
    daily_goal: u32,
    streak: StreakState,
    achievements: AchievementSet,
    totals: CumulativeTotals,
    daily: DailyProgress,
    /// Last raw counter seen this session; None until the first sample
    last_counter: Option<u64>,
    updates: watch::Sender<TrackerSnapshot>,
}

impl StepTracker {
    /// Restore the tracker from the store using the local calendar date
    ///
    /// Anything missing or unreadable falls back to first-launch
    /// defaults; restoring never fails.
    pub async fn restore(store: Arc<dyn KeyValueStore>, config: &EngineConfig) -> Self {
        Self::restore_at(store, config, Local::now().date_naive()).await
    }

    /// Restore the tracker for an explicit calendar date
    pub async fn restore_at(
        store: Arc<dyn KeyValueStore>,
        config: &EngineConfig,
        today: NaiveDate,
    ) -> Self {
        let profile = ProfileRepository::load(&*store).await;
        let daily_goal =
            ProfileRepository::load_daily_goal(&*store, config.tracker.default_daily_goal).await;
        let streak = ActivityRepository::load_streak(&*store).await;
        let achievements = AchievementRepository::load(&*store).await;
        let totals = ActivityRepository::load_totals(&*store).await;
        let daily = ActivityRepository::load_daily_progress(&*store, today).await;

        info!(
            total_steps = totals.total_steps,
            streak = streak.current,
            achievements = achievements.unlocked_count(),
            "Tracker state restored"
        );

        let snapshot = Self::build_snapshot(
            &profile,
            daily_goal,
            &streak,
            &achievements,
            &totals,
            &daily,
        );
        let (updates, _) = watch::channel(snapshot);

        Self {
            store,
            profile,
            daily_goal,
            streak,
            achievements,
            totals,
            daily,
            last_counter: None,
            updates,
        }
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<TrackerSnapshot> {
        self.updates.subscribe()
    }

    /// The snapshot for the current state
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.updates.borrow().clone()
    }

    /// Apply a step-counter sample using the local calendar date
    pub async fn record_sample(&mut self, counter: u64) -> TrackerSnapshot {
        self.record_sample_at(counter, Local::now().date_naive())
            .await
    }

    /// Apply a step-counter sample for an explicit calendar date
    pub async fn record_sample_at(&mut self, counter: u64, today: NaiveDate) -> TrackerSnapshot {
        let delta = match self.last_counter {
            Some(last) if counter >= last => counter - last,
            Some(last) => {
                // The platform counter restarted; the new counter value
                // is all steps taken since
                info!(counter, last, "Step counter reset detected");
                counter
            }
            None => counter,
        };
        self.last_counter = Some(counter);

        // Day rollover clears today's accumulation before the new delta lands
        if self.daily.date != today {
            debug!(from = %self.daily.date, to = %today, "Calendar date rolled over");
            self.daily = DailyProgress::new(today);
        }
        self.daily.steps += delta;
        self.totals.record(
            delta,
            activity_metrics::raw_distance_km(delta, self.profile.height_cm),
        );

        let (streak, transition) = self
            .streak
            .record_day(self.daily.steps, self.daily_goal, today);
        self.streak = streak;

        let evaluation = achievements::evaluate(
            &self.achievements,
            &EvaluationContext {
                totals: self.totals,
                streak: self.streak,
                today_steps: self.daily.steps,
                daily_goal: self.daily_goal,
                new_streak_record: matches!(
                    transition,
                    StreakTransition::Extended { new_record: true }
                ),
            },
        );
        self.achievements = evaluation.set;
        for milestone in &evaluation.newly_unlocked {
            info!(id = %milestone.id, title = %milestone.title, "Achievement unlocked");
        }

        self.persist().await;
        self.publish()
    }

    /// Validate, apply and persist an edited biometric profile
    ///
    /// Display metrics are recomputed against the new profile in the
    /// published snapshot.
    pub async fn update_profile(&mut self, input: ProfileInput) -> EngineResult<TrackerSnapshot> {
        self.profile = ProfileService::save_profile(&*self.store, input).await?;
        Ok(self.publish())
    }

    /// Validate, apply and persist a new daily step goal
    ///
    /// Streak state is not rewritten retroactively; the new goal takes
    /// effect from the next sample.
    pub async fn set_daily_goal(&mut self, goal: u32) -> EngineResult<TrackerSnapshot> {
        self.daily_goal = ProfileService::save_daily_goal(&*self.store, goal).await?;
        Ok(self.publish())
    }

    /// Write the full accumulating state back to the store
    ///
    /// Failures are logged and swallowed: the in-memory state stays
    /// authoritative and the next update writes the same keys again.
    async fn persist(&self) {
        let store = &*self.store;
        if let Err(err) = ActivityRepository::save_daily_progress(store, &self.daily).await {
            warn!(error = %err, "Daily progress write failed");
        }
        if let Err(err) = ActivityRepository::save_totals(store, &self.totals).await {
            warn!(error = %err, "Totals write failed");
        }
        if let Err(err) = ActivityRepository::save_streak(store, &self.streak).await {
            warn!(error = %err, "Streak write failed");
        }
        if let Err(err) = AchievementRepository::save(store, &self.achievements).await {
            warn!(error = %err, "Achievements write failed");
        }
    }

    fn publish(&self) -> TrackerSnapshot {
        let snapshot = Self::build_snapshot(
            &self.profile,
            self.daily_goal,
            &self.streak,
            &self.achievements,
            &self.totals,
            &self.daily,
        );
        self.updates.send_replace(snapshot.clone());
        snapshot
    }

    fn build_snapshot(
        profile: &BiometricProfile,
        daily_goal: u32,
        streak: &StreakState,
        achievements: &AchievementSet,
        totals: &CumulativeTotals,
        daily: &DailyProgress,
    ) -> TrackerSnapshot {
        TrackerSnapshot {
            date: daily.date,
            today_steps: daily.steps,
            daily_goal,
            goal_progress_percent: goal_progress_percent(daily.steps, daily_goal),
            derived: activity_metrics::derive_metrics(daily.steps, profile),
            streak: *streak,
            totals: *totals,
            achievements_unlocked: achievements.unlocked_count(),
            achievements_total: achievements.total_count(),
        }
    }
}
