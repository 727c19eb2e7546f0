use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::{Task, TaskDraft, TaskStatus};
use crate::repository::SqliteRepository;
use crate::store::TaskStore;

#[async_trait]
impl TaskStore for SqliteRepository {
    async fn list_persisted_tasks(&self) -> Result<Vec<Task>, CoreError> {
        let tasks = sqlx::query_as("SELECT * FROM tasks ORDER BY created_at")
            .fetch_all(self.pool())
            .await
            .map_err(|e| CoreError::StorageRead(e.to_string()))?;
        Ok(tasks)
    }

    async fn create_task(&self, draft: TaskDraft) -> Result<Task, CoreError> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::now_v7(),
            title: draft.title,
            description: draft.description,
            status: TaskStatus::Pending,
            kind: draft.kind,
            recurring_marker: Some(draft.recurring_marker.to_string()),
            start_at: Some(draft.start_at),
            end_at: Some(draft.end_at),
            estimated_minutes: draft.estimated_minutes,
            created_at: now,
            updated_at: now,
        };

        sqlx::query(
            r#"INSERT INTO tasks (id, title, description, status, kind, recurring_marker, start_at, end_at, estimated_minutes, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)"#,
        )
        .bind(task.id)
        .bind(&task.title)
        .bind(&task.description)
        .bind(&task.status)
        .bind(&task.kind)
        .bind(&task.recurring_marker)
        .bind(task.start_at)
        .bind(task.end_at)
        .bind(task.estimated_minutes)
        .bind(task.created_at)
        .bind(task.updated_at)
        .execute(self.pool())
        .await
        .map_err(|e| CoreError::StorageWrite(e.to_string()))?;

        Ok(task)
    }

    async fn delete_task(&self, id: Uuid) -> Result<(), CoreError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await
            .map_err(|e| CoreError::StorageWrite(e.to_string()))?;
        Ok(())
    }
}
