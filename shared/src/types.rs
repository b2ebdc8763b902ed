//! Core domain types shared between the engine and its consumers

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily step goal used until the user picks their own
pub const DEFAULT_DAILY_GOAL: u32 = 10_000;

/// Biological sex for metabolic calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

/// User biometrics driving the calorie and stride-length formulas
///
/// Mutated only by an explicit profile edit; every derivation reads the
/// values as-is, so they must pass validation before they get here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BiometricProfile {
    /// Weight in kilograms (stored in SI)
    pub weight_kg: f64,
    /// Height in centimeters (stored in SI)
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    /// Biological sex for BMR estimation
    pub sex: BiologicalSex,
}

impl Default for BiometricProfile {
    fn default() -> Self {
        Self {
            weight_kg: 70.0,
            height_cm: 170.0,
            age_years: 30,
            sex: BiologicalSex::Male,
        }
    }
}

/// Display metrics derived from the current step count
///
/// Recomputed in full on every update; never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DerivedMetrics {
    pub calories_burned: u32,
    pub distance_km: f64,
    pub active_minutes: u32,
}

/// Lifetime totals accumulated across all sessions
///
/// Strictly additive; counter resets in the platform step source must
/// never decrement these.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CumulativeTotals {
    pub total_steps: u64,
    pub total_distance_km: f64,
}

impl CumulativeTotals {
    /// Fold a step delta and its distance equivalent into the totals
    pub fn record(&mut self, steps: u64, distance_km: f64) {
        self.total_steps += steps;
        self.total_distance_km += distance_km;
    }
}

/// Steps accumulated since local midnight
///
/// "Today's steps" for goal and streak purposes is always this value,
/// never the raw session counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: NaiveDate,
    pub steps: u64,
}

impl DailyProgress {
    /// Fresh progress record for the given calendar date
    pub fn new(date: NaiveDate) -> Self {
        Self { date, steps: 0 }
    }
}
