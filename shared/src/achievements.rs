//! Achievement catalog and milestone evaluation
//!
//! Four categories (distance, steps, streaks, key moments), each an
//! ordered list of threshold milestones. Unlocks are strictly monotonic:
//! once a milestone unlocks it never re-locks, whatever later inputs look
//! like. The three threshold categories share one comparison rule,
//! parameterized by [`MilestoneKind`]; key moments carry bespoke rules.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::streak::StreakState;
use crate::types::CumulativeTotals;

// ============================================================================
// Key moment IDs
// ============================================================================

// Stable string ids; persisted sets reference them across app versions.
pub const FIRST_STEPS: &str = "first_steps";
pub const STEP_GOAL: &str = "step_goal";
pub const NEW_RECORD: &str = "new_record";
pub const COMPLETE_SWEEP: &str = "complete_sweep";

// ============================================================================
// Types
// ============================================================================

/// What a milestone's threshold is compared against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    /// Cumulative kilometers walked
    Distance,
    /// Cumulative steps recorded
    Steps,
    /// Current consecutive-day streak
    Streak,
    /// One-off moments with bespoke unlock rules
    KeyMoment,
}

/// A single unlockable milestone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub kind: MilestoneKind,
    /// Unlock threshold in the kind's unit; key moments carry no static
    /// threshold, their unlock rules live in [`evaluate`]
    pub threshold: f64,
    pub unlocked: bool,
}

impl Milestone {
    fn new(id: &str, title: &str, kind: MilestoneKind, threshold: f64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            threshold,
            unlocked: false,
        }
    }
}

/// The full achievement catalog, category by category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementSet {
    pub distances: Vec<Milestone>,
    pub steps: Vec<Milestone>,
    pub streaks: Vec<Milestone>,
    pub key_moments: Vec<Milestone>,
}

/// The values one evaluation pass compares milestones against
#[derive(Debug, Clone, Copy)]
pub struct EvaluationContext {
    pub totals: CumulativeTotals,
    pub streak: StreakState,
    /// Steps accumulated since local midnight
    pub today_steps: u64,
    pub daily_goal: u32,
    /// The streak just exceeded its previous best (reported by the
    /// streak transition, not re-derived here)
    pub new_streak_record: bool,
}

/// Result of one evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub set: AchievementSet,
    /// Entries that flipped to unlocked during this pass
    pub newly_unlocked: Vec<Milestone>,
}

// ============================================================================
// Default catalog
// ============================================================================

static DEFAULT_CATALOG: Lazy<AchievementSet> = Lazy::new(|| AchievementSet {
    distances: vec![
        Milestone::new("nyc_wash", "New York to Washington", MilestoneKind::Distance, 450.0),
        Milestone::new("800km", "Eight Hundred Kilometers", MilestoneKind::Distance, 800.0),
        Milestone::new("europe", "Across Europe", MilestoneKind::Distance, 1_900.0),
        Milestone::new("earth_core", "To Earth's Core", MilestoneKind::Distance, 6_350.0),
    ],
    steps: vec![
        Milestone::new("first_1k", "First 1,000 Steps", MilestoneKind::Steps, 1_000.0),
        Milestone::new("step_master", "Step Master", MilestoneKind::Steps, 10_000.0),
        Milestone::new("marathon", "Marathon Walker", MilestoneKind::Steps, 50_000.0),
        Milestone::new("step_legend", "Step Legend", MilestoneKind::Steps, 100_000.0),
    ],
    streaks: vec![
        Milestone::new("week_streak", "7 Day Streak", MilestoneKind::Streak, 7.0),
        Milestone::new("month_streak", "Monthly Dedication", MilestoneKind::Streak, 30.0),
        Milestone::new("quarter_streak", "Quarterly Champion", MilestoneKind::Streak, 90.0),
        Milestone::new("year_streak", "Year of Fitness", MilestoneKind::Streak, 365.0),
    ],
    key_moments: vec![
        Milestone::new(FIRST_STEPS, "First Steps", MilestoneKind::KeyMoment, 0.0),
        Milestone::new(STEP_GOAL, "Step Goal", MilestoneKind::KeyMoment, 0.0),
        Milestone::new(NEW_RECORD, "New Record", MilestoneKind::KeyMoment, 0.0),
        Milestone::new(COMPLETE_SWEEP, "Complete Sweep", MilestoneKind::KeyMoment, 0.0),
    ],
});

impl Default for AchievementSet {
    /// The catalog as shipped: everything locked
    fn default() -> Self {
        DEFAULT_CATALOG.clone()
    }
}

impl AchievementSet {
    /// All milestones across the four categories, in display order
    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.distances
            .iter()
            .chain(self.steps.iter())
            .chain(self.streaks.iter())
            .chain(self.key_moments.iter())
    }

    pub fn unlocked_count(&self) -> usize {
        self.iter().filter(|m| m.unlocked).count()
    }

    pub fn total_count(&self) -> usize {
        self.iter().count()
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Evaluate the whole catalog against the current context
///
/// Only forward transitions are applied: an entry that is already
/// unlocked stays unlocked even if the compared value has since dropped
/// (e.g. a broken streak). The complete-sweep key moment is decided last,
/// against the state of every other entry after this pass.
pub fn evaluate(set: &AchievementSet, ctx: &EvaluationContext) -> Evaluation {
    let mut next = set.clone();
    let mut newly_unlocked = Vec::new();

    for category in [&mut next.distances, &mut next.steps, &mut next.streaks] {
        for milestone in category.iter_mut() {
            let value = threshold_value(milestone.kind, ctx);
            unlock_if(milestone, value >= milestone.threshold, &mut newly_unlocked);
        }
    }

    for milestone in next.key_moments.iter_mut() {
        let reached = match milestone.id.as_str() {
            FIRST_STEPS => ctx.totals.total_steps > 0,
            STEP_GOAL => ctx.today_steps >= u64::from(ctx.daily_goal),
            NEW_RECORD => ctx.new_streak_record,
            _ => false, // complete sweep handled below
        };
        unlock_if(milestone, reached, &mut newly_unlocked);
    }

    let all_others_unlocked = next
        .iter()
        .filter(|m| m.id != COMPLETE_SWEEP)
        .all(|m| m.unlocked);
    if let Some(sweep) = next.key_moments.iter_mut().find(|m| m.id == COMPLETE_SWEEP) {
        unlock_if(sweep, all_others_unlocked, &mut newly_unlocked);
    }

    Evaluation {
        set: next,
        newly_unlocked,
    }
}

fn threshold_value(kind: MilestoneKind, ctx: &EvaluationContext) -> f64 {
    match kind {
        MilestoneKind::Distance => ctx.totals.total_distance_km,
        MilestoneKind::Steps => ctx.totals.total_steps as f64,
        MilestoneKind::Streak => f64::from(ctx.streak.current),
        MilestoneKind::KeyMoment => f64::NEG_INFINITY,
    }
}

fn unlock_if(milestone: &mut Milestone, reached: bool, newly_unlocked: &mut Vec<Milestone>) {
    if reached && !milestone.unlocked {
        milestone.unlocked = true;
        newly_unlocked.push(milestone.clone());
    }
}
