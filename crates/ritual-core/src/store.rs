use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{LifeTemplate, MacroTaskTemplate, Task, TaskDraft};

/// Task persistence consumed by the engine.
///
/// The engine only ever reads the full list (guard seeding), creates
/// instances, and deletes janitor-flagged duplicates; instance lifecycle
/// beyond that belongs to the owning application.
#[async_trait]
pub trait TaskStore {
    async fn list_persisted_tasks(&self) -> Result<Vec<Task>, CoreError>;
    async fn create_task(&self, draft: TaskDraft) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError>;
}

/// Access to the opaque template blobs written by the settings UI.
#[async_trait]
pub trait TemplateStore {
    /// Decoded life template, or None when no blob has been stored yet.
    async fn load_life_template(&self) -> Result<Option<LifeTemplate>, CoreError>;
    /// Decoded macro task list; an absent blob is an empty list.
    async fn load_macro_tasks(&self) -> Result<Vec<MacroTaskTemplate>, CoreError>;
    /// Stores a raw life template blob after checking it decodes.
    async fn save_life_template_blob(&self, blob: &str) -> Result<(), CoreError>;
    /// Stores a raw macro tasks blob after checking it decodes.
    async fn save_macro_tasks_blob(&self, blob: &str) -> Result<(), CoreError>;
}
