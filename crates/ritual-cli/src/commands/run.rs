use anyhow::Result;
use ritual_core::engine::RecurrenceEngine;
use ritual_core::repository::SqliteRepository;
use ritual_core::scheduler::RolloverScheduler;
use ritual_core::store::TaskStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::warn;

use crate::config::{self, Config};

pub async fn run(repository: SqliteRepository, config: &Config) -> Result<()> {
    let tz = config::validate_timezone(&config.timezone).map_err(anyhow::Error::msg)?;
    let scheduler = RolloverScheduler::new(tz, Duration::from_secs(config.poll_interval_secs));
    let engine = Arc::new(Mutex::new(RecurrenceEngine::new(repository, tz)));

    println!(
        "ritual daemon started (timezone {}, polling every {}s). Ctrl-C to stop.",
        config.timezone, config.poll_interval_secs
    );

    let loop_engine = engine.clone();
    let rollover = scheduler.run(move |date| {
        let engine = loop_engine.clone();
        async move {
            let mut engine = engine.lock().await;

            let live = match engine.store().list_persisted_tasks().await {
                Ok(tasks) => tasks,
                Err(e) => {
                    warn!(error = %e, "live task query failed; skipping this cycle");
                    return;
                }
            };
            let summary = engine.materialize_for_date(date, &live).await;
            println!(
                "[{}] created {} instance(s).",
                summary.date_key, summary.instances_created
            );

            let live = match engine.store().list_persisted_tasks().await {
                Ok(tasks) => tasks,
                Err(_) => return,
            };
            let cleaned = engine.clean_duplicates(&live).await;
            if cleaned.deleted > 0 {
                println!(
                    "[{}] janitor removed {} duplicate instance(s).",
                    summary.date_key, cleaned.deleted
                );
            }
        }
    });

    tokio::select! {
        _ = rollover => {}
        _ = tokio::signal::ctrl_c() => {
            println!("\nStopping.");
        }
    }

    Ok(())
}
