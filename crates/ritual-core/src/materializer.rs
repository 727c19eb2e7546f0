use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::guard::RecurrenceGuard;
use crate::marker::RecurringMarker;
use crate::models::{FixedEventTemplate, MacroTaskTemplate, TaskDraft, TaskKind};
use crate::timezone::local_datetime_to_utc;

/// Proposes draft task instances for one local calendar date.
///
/// The materializer performs no I/O and creates nothing: it filters enabled
/// templates whose rule matches the date, skips markers the guard already
/// knows, and emits drafts in template declaration order. It never claims a
/// marker; deduplication across passes is entirely the guard's job, which
/// is why two calls against an unseeded guard produce identical drafts.
#[derive(Debug)]
pub struct Materializer {
    timezone: Tz,
}

impl Materializer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Drafts for `date` from all enabled, matching, not-yet-claimed
    /// templates. Life events come first, then macro tasks, each in
    /// declaration order.
    pub fn materialize(
        &self,
        date: NaiveDate,
        life_events: &[FixedEventTemplate],
        macro_tasks: &[MacroTaskTemplate],
        guard: &RecurrenceGuard,
    ) -> Vec<TaskDraft> {
        let mut drafts = Vec::new();

        for event in life_events {
            if !event.enabled || !event.rule.matches(date) {
                continue;
            }
            let marker = RecurringMarker::new(&event.id, date);
            if guard.has(&marker.to_string()) {
                continue;
            }
            if let Some(draft) = self.fixed_event_draft(date, event, marker) {
                drafts.push(draft);
            }
        }

        for template in macro_tasks {
            if !template.enabled || !template.rule.matches(date) {
                continue;
            }
            let marker = RecurringMarker::new(&template.id, date);
            if guard.has(&marker.to_string()) {
                continue;
            }
            if let Some(draft) = self.macro_task_draft(date, template, marker) {
                drafts.push(draft);
            }
        }

        drafts
    }

    fn fixed_event_draft(
        &self,
        date: NaiveDate,
        event: &FixedEventTemplate,
        marker: RecurringMarker,
    ) -> Option<TaskDraft> {
        let start_time = match NaiveTime::parse_from_str(&event.start_time, "%H:%M") {
            Ok(t) => t,
            Err(_) => {
                debug!(
                    template_id = %event.id,
                    start_time = %event.start_time,
                    "skipping fixed event with unparseable start time"
                );
                return None;
            }
        };
        let start_at = local_datetime_to_utc(date, start_time, self.timezone)?;
        let end_at = start_at + Duration::minutes(event.duration_minutes);

        Some(TaskDraft {
            title: event.name.clone(),
            description: None,
            kind: TaskKind::FixedEvent,
            recurring_marker: marker,
            start_at,
            end_at,
            estimated_minutes: Some(event.duration_minutes),
        })
    }

    fn macro_task_draft(
        &self,
        date: NaiveDate,
        template: &MacroTaskTemplate,
        marker: RecurringMarker,
    ) -> Option<TaskDraft> {
        let (window_start, window_end) = match self.window_on_date(date, template) {
            Some(bounds) => bounds,
            None => {
                debug!(
                    template_id = %template.id,
                    "skipping macro task with missing or unparseable window"
                );
                return None;
            }
        };

        // Center the estimate inside the window; an estimate longer than
        // the window starts at the window start.
        let window_len = window_end - window_start;
        let estimated = Duration::minutes(template.estimated_minutes);
        let lead = ((window_len - estimated) / 2).max(Duration::zero());
        let start_at = window_start + lead;
        let end_at = start_at + estimated;

        Some(TaskDraft {
            title: template.title.clone(),
            description: None,
            kind: TaskKind::WindowBased,
            recurring_marker: marker,
            start_at,
            end_at,
            estimated_minutes: Some(template.estimated_minutes),
        })
    }

    /// Projects the template's window time-of-day onto the target date.
    /// An end at or before the start spans midnight into the next day.
    fn window_on_date(
        &self,
        date: NaiveDate,
        template: &MacroTaskTemplate,
    ) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start_tod = self.window_time_of_day(template.window_start_at.as_deref()?)?;
        let end_tod = self.window_time_of_day(template.window_end_at.as_deref()?)?;

        let start = local_datetime_to_utc(date, start_tod, self.timezone)?;
        let end = if end_tod > start_tod {
            local_datetime_to_utc(date, end_tod, self.timezone)?
        } else {
            local_datetime_to_utc(date.succ_opt()?, end_tod, self.timezone)?
        };
        Some((start, end))
    }

    fn window_time_of_day(&self, raw: &str) -> Option<NaiveTime> {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|dt| dt.with_timezone(&self.timezone).time())
    }
}
