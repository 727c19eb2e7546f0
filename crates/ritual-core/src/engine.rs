use chrono::NaiveDate;
use chrono_tz::Tz;
use tracing::{info, warn};

use crate::guard::RecurrenceGuard;
use crate::janitor;
use crate::materializer::Materializer;
use crate::models::Task;
use crate::store::{TaskStore, TemplateStore};

/// Outcome of one materialization pass.
#[derive(Debug, Clone, Default)]
pub struct MaterializationSummary {
    pub date_key: String,
    pub drafts_proposed: usize,
    pub instances_created: usize,
    /// Create failures, one entry per draft left un-created. Their markers
    /// stay claimed, so this session will not retry them.
    pub failures: Vec<String>,
}

/// Outcome of one janitor pass.
#[derive(Debug, Clone, Default)]
pub struct JanitorSummary {
    pub duplicates_found: usize,
    pub deleted: usize,
    pub failures: Vec<String>,
}

/// The guard-wrapped materialization pipeline.
///
/// Owns the session-scoped guard and drives seed, materialize, then
/// claim-then-create. Every failure mode degrades to "no instance produced
/// this cycle"; nothing here escalates. The engine is not re-entrant-safe by
/// structure: correctness against overlapping invocations rests on markers
/// being claimed synchronously before any create is awaited.
pub struct RecurrenceEngine<R> {
    store: R,
    materializer: Materializer,
    guard: RecurrenceGuard,
}

impl<R> RecurrenceEngine<R>
where
    R: TaskStore + TemplateStore,
{
    pub fn new(store: R, timezone: Tz) -> Self {
        Self {
            store,
            materializer: Materializer::new(timezone),
            guard: RecurrenceGuard::new(),
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Releases the store, ending this guard session. A new engine built
    /// from the returned store behaves like a process restart.
    pub fn into_store(self) -> R {
        self.store
    }

    pub fn guard(&self) -> &RecurrenceGuard {
        &self.guard
    }

    /// Seeds the guard from the live task set and, best-effort, the
    /// persisted task list. The persisted query covers the window right
    /// after process restart before in-memory state has loaded; if it
    /// fails the engine proceeds with whatever it has.
    pub async fn seed_guard(&mut self, live_tasks: &[Task]) {
        self.guard
            .seed(live_tasks.iter().filter_map(|t| t.recurring_marker.clone()));

        match self.store.list_persisted_tasks().await {
            Ok(tasks) => {
                self.guard
                    .seed(tasks.into_iter().filter_map(|t| t.recurring_marker));
            }
            Err(e) => {
                warn!(error = %e, "persisted task query failed; guard seeded from in-memory state only");
            }
        }
    }

    /// Runs one materialization pass for `date` (a local calendar date).
    ///
    /// Each draft's marker is claimed before its create is awaited; a
    /// failed create therefore stays un-retried for the rest of this
    /// session and is only re-attempted by a future run's fresh guard.
    pub async fn materialize_for_date(
        &mut self,
        date: NaiveDate,
        live_tasks: &[Task],
    ) -> MaterializationSummary {
        self.seed_guard(live_tasks).await;

        let life_events = match self.store.load_life_template().await {
            Ok(Some(template)) => template.fixed_events,
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "life template unavailable; contributing no fixed events");
                Vec::new()
            }
        };
        let macro_tasks = match self.store.load_macro_tasks().await {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(error = %e, "macro tasks unavailable; contributing no macro templates");
                Vec::new()
            }
        };

        let drafts = self
            .materializer
            .materialize(date, &life_events, &macro_tasks, &self.guard);

        let mut summary = MaterializationSummary {
            date_key: date.format("%Y-%m-%d").to_string(),
            drafts_proposed: drafts.len(),
            ..Default::default()
        };

        for draft in drafts {
            let marker = draft.recurring_marker.to_string();
            if !self.guard.claim(&marker) {
                // Claimed earlier in this same pass (duplicate template id).
                continue;
            }
            match self.store.create_task(draft).await {
                Ok(_) => summary.instances_created += 1,
                Err(e) => {
                    warn!(marker = %marker, error = %e, "instance create failed; not retried this session");
                    summary.failures.push(format!("{marker}: {e}"));
                }
            }
        }

        info!(
            date_key = %summary.date_key,
            proposed = summary.drafts_proposed,
            created = summary.instances_created,
            failed = summary.failures.len(),
            "materialization pass finished"
        );
        summary
    }

    /// Janitor pass over the live task set: deletes every redundant
    /// instance sharing a marker, independently per id.
    pub async fn clean_duplicates(&self, live_tasks: &[Task]) -> JanitorSummary {
        let duplicate_ids = janitor::find_duplicates(live_tasks);
        let mut summary = JanitorSummary {
            duplicates_found: duplicate_ids.len(),
            ..Default::default()
        };

        for id in duplicate_ids {
            match self.store.delete_task(id).await {
                Ok(()) => summary.deleted += 1,
                Err(e) => {
                    warn!(task_id = %id, error = %e, "duplicate delete failed");
                    summary.failures.push(format!("{id}: {e}"));
                }
            }
        }

        if summary.duplicates_found > 0 {
            info!(
                found = summary.duplicates_found,
                deleted = summary.deleted,
                "janitor pass finished"
            );
        }
        summary
    }
}
