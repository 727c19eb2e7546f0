use anyhow::Result;
use ritual_core::repository::SqliteRepository;
use ritual_core::store::TaskStore;

use crate::views;

pub async fn list_tasks(repository: SqliteRepository) -> Result<()> {
    let tasks = repository.list_persisted_tasks().await?;
    views::table::display_tasks(&tasks);
    Ok(())
}
