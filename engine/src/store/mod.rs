//! Key-value persistence backends
//!
//! The engine persists all state through a string-keyed, string-valued
//! asynchronous store, the Rust counterpart of a mobile key-value store.
//! Callers never issue overlapping writes to the same key: each update
//! completes, persistence included, before the next sample is processed.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use anyhow::Result;
use async_trait::async_trait;

/// Storage keys used by the engine
pub mod keys {
    pub const PROFILE: &str = "profile";
    pub const DAILY_GOAL: &str = "daily_goal";
    pub const STREAK: &str = "streak";
    pub const ACHIEVEMENTS: &str = "achievements";
    pub const TOTALS: &str = "totals";
    pub const DAILY_PROGRESS: &str = "daily_progress";
}

/// Asynchronous string-keyed store
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Fetch the raw value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
