use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use ritual_core::engine::RecurrenceEngine;
use ritual_core::janitor;
use ritual_core::repository::SqliteRepository;
use ritual_core::store::TaskStore;

use crate::cli::CleanupCommand;
use crate::config::{self, Config};

pub async fn cleanup(
    repository: SqliteRepository,
    command: CleanupCommand,
    config: &Config,
) -> Result<()> {
    let tz = config::validate_timezone(&config.timezone).map_err(anyhow::Error::msg)?;
    let engine = RecurrenceEngine::new(repository, tz);

    let live = engine.store().list_persisted_tasks().await?;
    let duplicates = janitor::find_duplicates(&live);
    if duplicates.is_empty() {
        println!("No duplicate recurring instances found.");
        return Ok(());
    }

    if !command.force {
        let confirmation = Confirm::new()
            .with_prompt(format!(
                "Delete {} duplicate instance(s)?",
                duplicates.len()
            ))
            .default(false)
            .interact()
            .unwrap_or(false);

        if !confirmation {
            println!("Cleanup cancelled.");
            return Ok(());
        }
    }

    let summary = engine.clean_duplicates(&live).await;
    println!(
        "Deleted {} of {} duplicate instance(s).",
        summary.deleted, summary.duplicates_found
    );
    for failure in &summary.failures {
        eprintln!("  {} {}", "failed:".yellow(), failure);
    }

    Ok(())
}
