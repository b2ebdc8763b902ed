//! Common test utilities for engine integration tests

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use stride_engine::config::EngineConfig;
use stride_engine::store::{KeyValueStore, MemoryStore};

pub fn config() -> EngineConfig {
    EngineConfig::default()
}

pub fn store() -> std::sync::Arc<MemoryStore> {
    std::sync::Arc::new(MemoryStore::new())
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Store whose writes always fail; reads come from the wrapped store
pub struct WriteFailStore {
    inner: MemoryStore,
}

impl WriteFailStore {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
        }
    }
}

#[async_trait]
impl KeyValueStore for WriteFailStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.inner.get(key).await
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(anyhow!("disk full"))
    }
}

/// Store whose reads always fail
pub struct ReadFailStore;

#[async_trait]
impl KeyValueStore for ReadFailStore {
    async fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(anyhow!("storage unavailable"))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Ok(())
    }
}
