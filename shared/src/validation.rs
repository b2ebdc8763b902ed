//! Input validation functions
//!
//! Every number the engine derives from is validated here first; the
//! derivation and streak functions assume already-validated input and do
//! not re-check.

use crate::errors::DomainError;
use crate::types::BiometricProfile;

/// Validate weight value (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), DomainError> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err(DomainError::Validation(
            "Weight must be a valid number".to_string(),
        ));
    }
    if weight_kg < 20.0 {
        return Err(DomainError::Validation(
            "Weight must be at least 20 kg".to_string(),
        ));
    }
    if weight_kg > 500.0 {
        return Err(DomainError::Validation(
            "Weight must be at most 500 kg".to_string(),
        ));
    }
    Ok(())
}

/// Validate height value (in cm)
/// Valid range: 50-300 cm
pub fn validate_height_cm(height_cm: f64) -> Result<(), DomainError> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err(DomainError::Validation(
            "Height must be a valid number".to_string(),
        ));
    }
    if height_cm < 50.0 {
        return Err(DomainError::Validation(
            "Height must be at least 50 cm".to_string(),
        ));
    }
    if height_cm > 300.0 {
        return Err(DomainError::Validation(
            "Height must be at most 300 cm".to_string(),
        ));
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age_years(age_years: i32) -> Result<(), DomainError> {
    if age_years < 1 {
        return Err(DomainError::Validation(
            "Age must be at least 1 year".to_string(),
        ));
    }
    if age_years > 150 {
        return Err(DomainError::Validation(
            "Age cannot exceed 150 years".to_string(),
        ));
    }
    Ok(())
}

/// Validate a daily step goal
///
/// The goal dialog offers presets between 5,000 and 15,000; free entry is
/// accepted within a wider sanity band.
pub fn validate_daily_goal(goal: u32) -> Result<(), DomainError> {
    if goal < 1_000 {
        return Err(DomainError::Validation(
            "Daily goal must be at least 1,000 steps".to_string(),
        ));
    }
    if goal > 100_000 {
        return Err(DomainError::Validation(
            "Daily goal must be at most 100,000 steps".to_string(),
        ));
    }
    Ok(())
}

/// Validate a full biometric profile
pub fn validate_profile(profile: &BiometricProfile) -> Result<(), DomainError> {
    validate_weight_kg(profile.weight_kg)?;
    validate_height_cm(profile.height_cm)?;
    validate_age_years(profile.age_years)?;
    Ok(())
}
