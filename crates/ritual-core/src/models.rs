use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::marker::RecurringMarker;
use crate::rule::RecurrenceRule;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Cancelled,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task status: {0}")]
pub struct ParseTaskStatusError(String);

impl FromStr for TaskStatus {
    type Err = ParseTaskStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            "cancelled" => Ok(TaskStatus::Cancelled),
            _ => Err(ParseTaskStatusError(s.to_string())),
        }
    }
}

/// Scheduling semantics of a materialized instance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Absolute-time block anchored to a fixed start/end (life events).
    FixedEvent,
    /// Instance placed inside a flexible execution window (macro tasks).
    WindowBased,
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid task kind: {0}")]
pub struct ParseTaskKindError(String);

impl FromStr for TaskKind {
    type Err = ParseTaskKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fixed_event" => Ok(TaskKind::FixedEvent),
            "window_based" => Ok(TaskKind::WindowBased),
            _ => Err(ParseTaskKindError(s.to_string())),
        }
    }
}

/// A concrete task in the live set.
///
/// Instances materialized from a template carry a `recurring_marker`; once
/// created they live and die under ordinary task lifecycle rules and the
/// recurrence engine never revisits them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub kind: TaskKind,
    /// Links an instance to its generating (template, date); None for
    /// ordinary tasks.
    pub recurring_marker: Option<String>,
    pub start_at: Option<DateTime<Utc>>,
    pub end_at: Option<DateTime<Utc>>,
    pub estimated_minutes: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Task {
    fn default() -> Self {
        Self {
            id: Uuid::now_v7(),
            title: "".to_string(),
            description: None,
            status: TaskStatus::Pending,
            kind: TaskKind::FixedEvent,
            recurring_marker: None,
            start_at: None,
            end_at: None,
            estimated_minutes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }
}

/// Draft instance proposed by the materializer.
///
/// Drafts are pure values; the engine decides whether to persist them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: Option<String>,
    pub kind: TaskKind,
    pub recurring_marker: RecurringMarker,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub estimated_minutes: Option<i64>,
}

/// Informational recurrence granularity on a macro task. Date matching is
/// governed by the template's `rule`, never by this field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cadence::Daily => write!(f, "daily"),
            Cadence::Weekly => write!(f, "weekly"),
            Cadence::Monthly => write!(f, "monthly"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("Invalid cadence: {0}")]
pub struct ParseCadenceError(String);

impl FromStr for Cadence {
    type Err = ParseCadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "daily" => Ok(Cadence::Daily),
            "weekly" => Ok(Cadence::Weekly),
            "monthly" => Ok(Cadence::Monthly),
            _ => Err(ParseCadenceError(s.to_string())),
        }
    }
}

/// A daily-anchored recurring block (e.g. lunch) from the life template.
///
/// Template blobs are authored by the settings UI and persisted with
/// camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedEventTemplate {
    pub id: String,
    pub name: String,
    /// Local wall-clock start, "HH:MM".
    pub start_time: String,
    pub duration_minutes: i64,
    pub rule: RecurrenceRule,
    pub enabled: bool,
}

/// A periodic task materialized within a time window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroTaskTemplate {
    pub id: String,
    pub title: String,
    pub cadence: Cadence,
    /// RFC 3339 window bounds; may be unset or garbage, in which case the
    /// template soft-fails to no instance.
    #[serde(default)]
    pub window_start_at: Option<String>,
    #[serde(default)]
    pub window_end_at: Option<String>,
    pub estimated_minutes: i64,
    pub rule: RecurrenceRule,
    pub enabled: bool,
}

/// The persisted life template blob: wake/sleep bounds plus fixed events.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeTemplate {
    pub wake_up: String,
    pub sleep: String,
    pub fixed_events: Vec<FixedEventTemplate>,
}
