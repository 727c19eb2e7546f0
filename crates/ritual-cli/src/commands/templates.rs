use anyhow::{bail, Result};
use ritual_core::repository::SqliteRepository;
use ritual_core::store::TemplateStore;

use crate::cli::{TemplatesCommand, TemplatesSubcommand};
use crate::views;

pub async fn templates(repository: SqliteRepository, command: TemplatesCommand) -> Result<()> {
    match command.command {
        TemplatesSubcommand::List => {
            let life = repository.load_life_template().await?;
            let macros = repository.load_macro_tasks().await?;
            views::table::display_templates(life.as_ref(), &macros);
        }
        TemplatesSubcommand::Import(import) => {
            if import.life.is_none() && import.macros.is_none() {
                bail!("Nothing to import: pass --life and/or --macros");
            }
            if let Some(path) = import.life {
                let blob = std::fs::read_to_string(&path)?;
                repository.save_life_template_blob(&blob).await?;
                println!("Imported life template from {}.", path.display());
            }
            if let Some(path) = import.macros {
                let blob = std::fs::read_to_string(&path)?;
                repository.save_macro_tasks_blob(&blob).await?;
                println!("Imported macro tasks from {}.", path.display());
            }
        }
    }
    Ok(())
}
