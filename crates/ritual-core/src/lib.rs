//! # Ritual Core Library
//!
//! The recurring-schedule materialization engine behind the ritual planner:
//! it turns user-authored recurrence templates (fixed daily life events and
//! periodic macro tasks) into concrete, dated task instances, exactly once
//! per calendar day, safely across process restarts and overlapping
//! re-evaluations.
//!
//! ## How it fits together
//!
//! - [`rule`]: pure calendar-arithmetic rule matching
//! - [`marker`]: the `[recurring:<template>:<date>]` instance identifier
//! - [`materializer`]: proposes drafts for a local date, no I/O
//! - [`guard`]: session-scoped claimed-marker set; claiming a marker
//!   synchronously before the async create is the sole dedup mechanism
//!   within a run
//! - [`janitor`]: reactive cleanup of duplicates the guard could not see
//! - [`engine`]: the guard-wrapped pipeline over the two stores
//! - [`scheduler`]: day-rollover polling that feeds dates to the engine
//! - [`store`] / [`repository`]: task and template persistence (SQLite,
//!   with templates kept as the settings UI's opaque JSON blobs)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use ritual_core::{db, engine::RecurrenceEngine, repository::SqliteRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("ritual.db").await?;
//!     let repository = SqliteRepository::new(pool);
//!
//!     let mut engine = RecurrenceEngine::new(repository, chrono_tz::UTC);
//!     let today = ritual_core::timezone::local_today(chrono_tz::UTC);
//!
//!     let summary = engine.materialize_for_date(today, &[]).await;
//!     println!("created {} instances", summary.instances_created);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod engine;
pub mod error;
pub mod guard;
pub mod janitor;
pub mod marker;
pub mod materializer;
pub mod models;
pub mod repository;
pub mod rule;
pub mod scheduler;
pub mod store;
pub mod timezone;
