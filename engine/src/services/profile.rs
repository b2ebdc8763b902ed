//! User profile and daily-goal management
//!
//! Validation and persistence for the user-editable settings: the
//! biometric profile behind the calorie/distance formulas and the daily
//! step goal. Invalid numbers are rejected here so the derivation
//! functions never see them; a failed store write is logged and the
//! accepted value stays authoritative in memory.

use tracing::warn;

use stride_shared::validation;
use stride_shared::{BiologicalSex, BiometricProfile};

use crate::error::EngineResult;
use crate::repositories::ProfileRepository;
use crate::store::KeyValueStore;

/// Goal presets offered by the goal dialog
pub const GOAL_PRESETS: &[u32] = &[5_000, 7_500, 10_000, 12_500, 15_000];

/// Profile fields as entered by the user
#[derive(Debug, Clone, Copy)]
pub struct ProfileInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: i32,
    pub sex: BiologicalSex,
}

/// Profile service for user-editable settings
pub struct ProfileService;

impl ProfileService {
    /// Load the stored profile, defaulting on first launch
    pub async fn load_profile(store: &dyn KeyValueStore) -> BiometricProfile {
        ProfileRepository::load(store).await
    }

    /// Validate and persist an edited profile
    pub async fn save_profile(
        store: &dyn KeyValueStore,
        input: ProfileInput,
    ) -> EngineResult<BiometricProfile> {
        let profile = BiometricProfile {
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            age_years: input.age_years,
            sex: input.sex,
        };
        validation::validate_profile(&profile)?;

        if let Err(err) = ProfileRepository::save(store, &profile).await {
            warn!(error = %err, "Profile write failed, keeping in-memory value");
        }
        Ok(profile)
    }

    /// Load the stored daily goal, falling back to `default`
    pub async fn load_daily_goal(store: &dyn KeyValueStore, default: u32) -> u32 {
        ProfileRepository::load_daily_goal(store, default).await
    }

    /// Validate and persist a new daily step goal
    pub async fn save_daily_goal(store: &dyn KeyValueStore, goal: u32) -> EngineResult<u32> {
        validation::validate_daily_goal(goal)?;

        if let Err(err) = ProfileRepository::save_daily_goal(store, goal).await {
            warn!(error = %err, "Daily goal write failed, keeping in-memory value");
        }
        Ok(goal)
    }
}
