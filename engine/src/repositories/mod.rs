//! Typed persistence over the key-value store
//!
//! Each aggregate round-trips as JSON inside a versioned envelope so the
//! stored shapes can evolve safely. Reads never fail the caller: a
//! missing, unreadable or wrong-version value is logged and replaced by
//! the aggregate's default, matching first-launch behavior.

pub mod achievements;
pub mod activity;
pub mod profile;

pub use achievements::AchievementRepository;
pub use activity::ActivityRepository;
pub use profile::ProfileRepository;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::KeyValueStore;

/// Schema version written with every record
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Serialize)]
struct Envelope<'a, T> {
    schema_version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct StoredEnvelope<T> {
    schema_version: u32,
    data: T,
}

/// Load the value under `key`, falling back to `default` on absence or
/// any read/decode failure
pub(crate) async fn load_or<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
    default: T,
) -> T {
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return default,
        Err(err) => {
            warn!(key, error = %err, "Storage read failed, using defaults");
            return default;
        }
    };

    match serde_json::from_str::<StoredEnvelope<T>>(&raw) {
        Ok(stored) if stored.schema_version == SCHEMA_VERSION => stored.data,
        Ok(stored) => {
            warn!(
                key,
                version = stored.schema_version,
                "Unknown schema version, using defaults"
            );
            default
        }
        Err(err) => {
            warn!(key, error = %err, "Stored value failed to decode, using defaults");
            default
        }
    }
}

/// Serialize `value` into the versioned envelope and write it under `key`
pub(crate) async fn save<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<()> {
    let raw = serde_json::to_string(&Envelope {
        schema_version: SCHEMA_VERSION,
        data: value,
    })?;
    store
        .set(key, &raw)
        .await
        .with_context(|| format!("persisting {key}"))
}
