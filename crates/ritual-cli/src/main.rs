use clap::Parser;
use owo_colors::{OwoColorize, Style};
use ritual_core::db;
use ritual_core::error::CoreError;
use ritual_core::repository::SqliteRepository;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod util;
mod views;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    let filter =
        EnvFilter::try_from_env("RITUAL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = config::Config::new().unwrap_or_else(|_| config::Config::default());

    let db_pool = match db::establish_connection(&config.database_path).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    };
    let repository = SqliteRepository::new(db_pool);

    let result = match cli.command {
        cli::Commands::Materialize(command) => {
            commands::materialize::materialize(repository, command, &config).await
        }
        cli::Commands::Cleanup(command) => {
            commands::cleanup::cleanup(repository, command, &config).await
        }
        cli::Commands::List => commands::list::list_tasks(repository).await,
        cli::Commands::Templates(command) => {
            commands::templates::templates(repository, command).await
        }
        cli::Commands::Run => commands::run::run(repository, &config).await,
    };

    if let Err(e) = result {
        handle_error(e);
    }
}

fn handle_error(err: anyhow::Error) -> ! {
    let error_style = Style::new().red().bold();

    if let Some(core_error) = err.downcast_ref::<CoreError>() {
        match core_error {
            CoreError::StorageRead(s) => {
                eprintln!("{} Storage read failed: {}", "Error:".style(error_style), s);
            }
            CoreError::StorageWrite(s) => {
                eprintln!("{} Storage write failed: {}", "Error:".style(error_style), s);
            }
            CoreError::MalformedTemplate(s) => {
                eprintln!(
                    "{} Template blob is not valid: {}",
                    "Error:".style(error_style),
                    s.yellow()
                );
            }
            CoreError::InvalidTimezone(s) => {
                eprintln!("{} Invalid timezone: {}", "Error:".style(error_style), s.yellow());
            }
            CoreError::InvalidInput(s) => {
                eprintln!("{} Invalid input: {}", "Error:".style(error_style), s);
            }
            _ => eprintln!("{} {}", "Error:".style(error_style), err),
        }
    } else {
        eprintln!("{} {}", "Error:".style(error_style), err);
    }
    std::process::exit(1);
}
