use anyhow::Result;
use owo_colors::OwoColorize;
use ritual_core::engine::RecurrenceEngine;
use ritual_core::repository::SqliteRepository;
use ritual_core::store::TaskStore;
use ritual_core::timezone::local_today;

use crate::cli::MaterializeCommand;
use crate::config::{self, Config};
use crate::util;

pub async fn materialize(
    repository: SqliteRepository,
    command: MaterializeCommand,
    config: &Config,
) -> Result<()> {
    let tz = config::validate_timezone(&config.timezone).map_err(anyhow::Error::msg)?;
    let date = match &command.date {
        Some(raw) => util::parse_target_date(raw)?,
        None => local_today(tz),
    };

    let mut engine = RecurrenceEngine::new(repository, tz);
    let live = engine.store().list_persisted_tasks().await?;
    let summary = engine.materialize_for_date(date, &live).await;

    println!(
        "Materialized {} instance(s) for {} ({} proposed, {} failed).",
        summary.instances_created,
        summary.date_key,
        summary.drafts_proposed,
        summary.failures.len()
    );
    for failure in &summary.failures {
        eprintln!("  {} {}", "failed:".yellow(), failure);
    }

    // The live set just changed; give the janitor a pass.
    let live = engine.store().list_persisted_tasks().await?;
    let cleaned = engine.clean_duplicates(&live).await;
    if cleaned.duplicates_found > 0 {
        println!("Janitor removed {} duplicate instance(s).", cleaned.deleted);
    }

    Ok(())
}
