//! Daily-goal streak bookkeeping
//!
//! A streak is the number of consecutive calendar days on which the daily
//! step goal was met. At most one transition is recorded per calendar
//! date, keyed by `last_update`; repeated updates with the same date are
//! no-ops, so the sensor can fire as often as it likes.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persistent streak state
///
/// Invariant: `best >= current` after every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakState {
    pub current: u32,
    pub best: u32,
    pub last_update: Option<NaiveDate>,
}

/// Outcome of a single streak update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// Goal met on a new day; the streak grew by one
    Extended {
        /// The streak just exceeded the previous best
        new_record: bool,
    },
    /// A new day arrived with the goal still unmet; the streak reset
    Broken,
    /// Today is already recorded, or nothing changed
    Unchanged,
}

impl StreakState {
    /// Apply today's step total against the goal
    ///
    /// Once a day has been recorded as met, later calls on the same date
    /// leave the state untouched. A below-goal update never breaks the
    /// run for the current day, since the goal can still be met before
    /// midnight. The run breaks only once a whole calendar day has
    /// elapsed without being recorded.
    pub fn record_day(
        &self,
        today_steps: u64,
        daily_goal: u32,
        today: NaiveDate,
    ) -> (StreakState, StreakTransition) {
        if self.last_update == Some(today) {
            return (*self, StreakTransition::Unchanged);
        }

        // A day between the last recorded one and today went unrecorded
        let missed_day = match self.last_update {
            Some(last) => (today - last).num_days() >= 2,
            None => false,
        };
        let current = if missed_day { 0 } else { self.current };

        if today_steps >= u64::from(daily_goal) {
            let current = current + 1;
            let new_record = current > self.best;
            let next = StreakState {
                current,
                best: self.best.max(current),
                last_update: Some(today),
            };
            (next, StreakTransition::Extended { new_record })
        } else if current < self.current {
            let next = StreakState {
                current: 0,
                best: self.best,
                last_update: self.last_update,
            };
            (next, StreakTransition::Broken)
        } else {
            (*self, StreakTransition::Unchanged)
        }
    }
}
