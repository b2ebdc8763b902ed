//! Stride Engine replay harness
//!
//! Development stand-in for the platform pedometer feed: reads raw step
//! counter samples from stdin (one integer per line), drives the engine
//! and logs the resulting snapshots. State persists across runs through
//! the configured store file.

use std::sync::Arc;

use anyhow::Result;
use stride_engine::config::EngineConfig;
use stride_engine::services::StepTracker;
use stride_engine::store::FileStore;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = EngineConfig::load()?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        env = if EngineConfig::is_production() { "production" } else { "development" },
        store = %config.storage.path,
        "Starting Stride engine"
    );

    let store = Arc::new(FileStore::open(&config.storage.path).await?);
    let mut tracker = StepTracker::restore(store, &config).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                // Numeric validation happens at this edge; the engine
                // itself only ever sees parsed counters
                let counter: u64 = match trimmed.parse() {
                    Ok(counter) => counter,
                    Err(_) => {
                        warn!(input = trimmed, "Ignoring non-numeric sample");
                        continue;
                    }
                };

                let snapshot = tracker.record_sample(counter).await;
                info!(
                    steps = snapshot.today_steps,
                    calories = snapshot.derived.calories_burned,
                    distance_km = snapshot.derived.distance_km,
                    progress = snapshot.goal_progress_percent,
                    streak = snapshot.streak.current,
                    achievements = snapshot.achievements_unlocked,
                    "Sample applied"
                );
            }
            _ = signal::ctrl_c() => {
                info!("Received Ctrl+C, ending session");
                break;
            }
        }
    }

    let final_snapshot = tracker.snapshot();
    info!(
        total_steps = final_snapshot.totals.total_steps,
        total_km = final_snapshot.totals.total_distance_km,
        best_streak = final_snapshot.streak.best,
        "Session complete"
    );
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if EngineConfig::is_production() {
            "stride_engine=info".into()
        } else {
            "stride_engine=debug".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if EngineConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
