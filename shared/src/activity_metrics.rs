//! Activity metrics calculations module
//!
//! Derives calories burned, distance covered and active minutes from a
//! raw step count and a biometric profile.
//!
//! # Design Principles
//!
//! 1. **Pure Functions**: All derivations are pure, deterministic, no side effects
//! 2. **Evidence-Based**: Harris-Benedict BMR, MET-based energy cost
//! 3. **Graceful Zero**: Zero steps produce all-zero output, never an error

use crate::types::{BiologicalSex, BiometricProfile, DerivedMetrics};

/// MET value for walking at a moderate pace
pub const WALKING_MET: f64 = 3.5;

/// Steps assumed per minute of activity
const STEPS_PER_ACTIVE_MINUTE: f64 = 100.0;

/// Stride length as a fraction of body height
const STRIDE_HEIGHT_FACTOR: f64 = 0.414;

// ============================================================================
// BMR
// ============================================================================

/// Calculate Basal Metabolic Rate using the Harris-Benedict equation
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn harris_benedict_bmr(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    match sex {
        BiologicalSex::Male => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
        }
        BiologicalSex::Female => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
        }
    }
}

// ============================================================================
// Step Derivations
// ============================================================================

/// Minutes of activity implied by a step count
pub fn active_minutes(steps: u64) -> u32 {
    (steps as f64 / STEPS_PER_ACTIVE_MINUTE).round() as u32
}

/// Energy cost of walking per active minute, in kcal
///
/// Standard MET energy formula: (MET × 3.5 × weight(kg)) / 200
pub fn calories_per_minute(weight_kg: f64) -> f64 {
    (WALKING_MET * 3.5 * weight_kg) / 200.0
}

/// Stride length in meters, estimated from body height
pub fn stride_length_m(height_cm: f64) -> f64 {
    height_cm * STRIDE_HEIGHT_FACTOR / 100.0
}

/// Distance covered in kilometers, unrounded
///
/// Cumulative totals accumulate this value so that per-update rounding
/// never drifts the lifetime distance.
pub fn raw_distance_km(steps: u64, height_cm: f64) -> f64 {
    steps as f64 * stride_length_m(height_cm) / 1000.0
}

/// Distance covered in kilometers, rounded to two decimals for display
pub fn distance_km(steps: u64, height_cm: f64) -> f64 {
    round2(raw_distance_km(steps, height_cm))
}

/// Derive the full display metrics for a step count
pub fn derive_metrics(steps: u64, profile: &BiometricProfile) -> DerivedMetrics {
    let minutes = active_minutes(steps);
    let active_calories = (calories_per_minute(profile.weight_kg) * minutes as f64).round();

    // BMR can go negative for extreme (unvalidated) inputs; the resting
    // contribution is floored at zero
    let bmr = harris_benedict_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.sex,
    );
    let bmr_calories = ((bmr / 24.0) * (minutes as f64 / 60.0)).round().max(0.0);

    DerivedMetrics {
        calories_burned: (active_calories + bmr_calories) as u32,
        distance_km: distance_km(steps, profile.height_cm),
        active_minutes: minutes,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
