use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Materializes recurring life events and macro tasks into dated task instances
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run one materialization pass for a date
    Materialize(MaterializeCommand),
    /// Find and delete duplicate recurring instances
    Cleanup(CleanupCommand),
    /// List tasks
    List,
    /// Manage recurrence templates
    Templates(TemplatesCommand),
    /// Run the day-rollover daemon
    Run,
}

#[derive(Parser, Debug, Clone)]
pub struct MaterializeCommand {
    /// Target date (e.g. '2024-06-04', 'tomorrow'); defaults to today in
    /// the configured timezone
    #[clap(short, long)]
    pub date: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CleanupCommand {
    /// Delete without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct TemplatesCommand {
    #[command(subcommand)]
    pub command: TemplatesSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplatesSubcommand {
    /// Show the stored life and macro templates
    List,
    /// Import template blobs exported from the settings UI
    Import(ImportTemplatesCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct ImportTemplatesCommand {
    /// Life template JSON file ({wakeUp, sleep, fixedEvents})
    #[clap(long)]
    pub life: Option<PathBuf>,
    /// Macro tasks JSON file (array of macro task templates)
    #[clap(long)]
    pub macros: Option<PathBuf>,
}
