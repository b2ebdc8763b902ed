//! Integration tests for the step tracker engine

mod common;

use std::sync::Arc;

use common::{config, date, store, ReadFailStore, WriteFailStore};
use stride_engine::services::{ProfileInput, StepTracker};
use stride_shared::{BiologicalSex, BiometricProfile};

#[tokio::test]
async fn test_fresh_restore_uses_defaults() {
    let tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    let snapshot = tracker.snapshot();

    assert_eq!(snapshot.today_steps, 0);
    assert_eq!(snapshot.daily_goal, 10_000);
    assert_eq!(snapshot.streak.current, 0);
    assert_eq!(snapshot.totals.total_steps, 0);
    assert_eq!(snapshot.achievements_unlocked, 0);
    assert_eq!(snapshot.achievements_total, 16);
}

#[tokio::test]
async fn test_sample_derives_display_metrics() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(10_000, date(2024, 1, 1)).await;

    // Reference derivation for the default 70kg/170cm/30y male profile
    assert_eq!(snapshot.today_steps, 10_000);
    assert_eq!(snapshot.derived.active_minutes, 100);
    assert_eq!(snapshot.derived.calories_burned, 545);
    assert!((snapshot.derived.distance_km - 7.04).abs() < 1e-9);
    assert_eq!(snapshot.goal_progress_percent, 100.0);
}

#[tokio::test]
async fn test_counter_deltas_accumulate() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(100, date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(250, date(2024, 1, 1)).await;

    assert_eq!(snapshot.today_steps, 250);
    assert_eq!(snapshot.totals.total_steps, 250);
}

#[tokio::test]
async fn test_counter_reset_never_decreases_totals() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(1_000, date(2024, 1, 1)).await;
    // Platform counter restarted; 200 steps since the restart
    let snapshot = tracker.record_sample_at(200, date(2024, 1, 1)).await;

    assert_eq!(snapshot.totals.total_steps, 1_200);
    assert_eq!(snapshot.today_steps, 1_200);
}

#[tokio::test]
async fn test_day_rollover_resets_daily_steps() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(11_000, date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(11_400, date(2024, 1, 2)).await;

    // Only the delta lands on the new day
    assert_eq!(snapshot.today_steps, 400);
    assert_eq!(snapshot.date, date(2024, 1, 2));
    // Lifetime totals keep growing
    assert_eq!(snapshot.totals.total_steps, 11_400);
    // Yesterday's streak day survives the rollover
    assert_eq!(snapshot.streak.current, 1);
}

#[tokio::test]
async fn test_streak_extends_once_per_day() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(10_000, date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(18_000, date(2024, 1, 1)).await;

    assert_eq!(snapshot.streak.current, 1);
    assert_eq!(snapshot.streak.best, 1);
}

#[tokio::test]
async fn test_streak_spans_consecutive_goal_days() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(10_000, date(2024, 1, 1)).await;

    // The next day starts below goal: the run is still alive
    let snapshot = tracker.record_sample_at(10_500, date(2024, 1, 2)).await;
    assert_eq!(snapshot.streak.current, 1);

    // Crossing the goal later the same day extends it
    let snapshot = tracker.record_sample_at(20_500, date(2024, 1, 2)).await;
    assert_eq!(snapshot.streak.current, 2);
    assert_eq!(snapshot.streak.best, 2);
}

#[tokio::test]
async fn test_unrecorded_day_breaks_streak() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(10_000, date(2024, 1, 1)).await;

    // Nothing recorded on Jan 2; the first Jan 3 sample ends the run
    let snapshot = tracker.record_sample_at(10_200, date(2024, 1, 3)).await;
    assert_eq!(snapshot.streak.current, 0);
    assert_eq!(snapshot.streak.best, 1);
}

#[tokio::test]
async fn test_achievements_unlock_and_survive_restart() {
    let shared_store: Arc<dyn stride_engine::store::KeyValueStore> = store();
    let mut tracker =
        StepTracker::restore_at(Arc::clone(&shared_store), &config(), date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(10_000, date(2024, 1, 1)).await;

    // first_1k, step_master, first_steps, step_goal, new_record
    assert_eq!(snapshot.achievements_unlocked, 5);

    // A new session over the same store sees the same unlocks
    let restarted = StepTracker::restore_at(shared_store, &config(), date(2024, 1, 2)).await;
    assert_eq!(restarted.snapshot().achievements_unlocked, 5);
}

#[tokio::test]
async fn test_write_failure_keeps_memory_state() {
    let mut tracker =
        StepTracker::restore_at(Arc::new(WriteFailStore::new()), &config(), date(2024, 1, 1)).await;
    let snapshot = tracker.record_sample_at(5_000, date(2024, 1, 1)).await;

    // Persistence failed but the update was applied and published
    assert_eq!(snapshot.today_steps, 5_000);
    assert_eq!(snapshot.totals.total_steps, 5_000);
}

#[tokio::test]
async fn test_read_failure_falls_back_to_defaults() {
    let tracker = StepTracker::restore_at(Arc::new(ReadFailStore), &config(), date(2024, 1, 1)).await;
    let snapshot = tracker.snapshot();

    assert_eq!(snapshot.daily_goal, 10_000);
    assert_eq!(snapshot.totals.total_steps, 0);
    assert_eq!(snapshot.achievements_unlocked, 0);
}

#[tokio::test]
async fn test_profile_edit_recomputes_metrics() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(10_000, date(2024, 1, 1)).await;

    let snapshot = tracker
        .update_profile(ProfileInput {
            weight_kg: 90.0,
            height_cm: 190.0,
            age_years: 25,
            sex: BiologicalSex::Male,
        })
        .await
        .unwrap();

    // Heavier profile, same steps: more calories, longer stride
    assert!(snapshot.derived.calories_burned > 545);
    assert!(snapshot.derived.distance_km > 7.04);
}

#[tokio::test]
async fn test_invalid_profile_edit_rejected() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    let result = tracker
        .update_profile(ProfileInput {
            weight_kg: 5.0,
            height_cm: 170.0,
            age_years: 30,
            sex: BiologicalSex::Male,
        })
        .await;

    assert!(result.is_err());
    // The snapshot still reflects the default profile
    assert_eq!(
        tracker.snapshot().derived,
        stride_shared::derive_metrics(0, &BiometricProfile::default())
    );
}

#[tokio::test]
async fn test_goal_edit_applies_from_next_sample() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    tracker.record_sample_at(6_000, date(2024, 1, 1)).await;

    // 6,000 steps against the default goal: no streak yet
    assert_eq!(tracker.snapshot().streak.current, 0);

    let snapshot = tracker.set_daily_goal(5_000).await.unwrap();
    assert_eq!(snapshot.daily_goal, 5_000);
    assert_eq!(snapshot.goal_progress_percent, 100.0);

    // The next sample records the day against the lowered goal
    let snapshot = tracker.record_sample_at(6_001, date(2024, 1, 1)).await;
    assert_eq!(snapshot.streak.current, 1);
}

#[tokio::test]
async fn test_goal_below_minimum_rejected() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    assert!(tracker.set_daily_goal(999).await.is_err());
    assert_eq!(tracker.snapshot().daily_goal, 10_000);
}

#[tokio::test]
async fn test_subscribers_see_every_update() {
    let mut tracker = StepTracker::restore_at(store(), &config(), date(2024, 1, 1)).await;
    let mut updates = tracker.subscribe();

    tracker.record_sample_at(1_500, date(2024, 1, 1)).await;
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().today_steps, 1_500);

    tracker.set_daily_goal(7_500).await.unwrap();
    assert!(updates.has_changed().unwrap());
    assert_eq!(updates.borrow_and_update().daily_goal, 7_500);
}
