use async_trait::async_trait;

use crate::error::CoreError;
use crate::models::{LifeTemplate, MacroTaskTemplate};
use crate::repository::SqliteRepository;
use crate::store::TemplateStore;

const LIFE_TEMPLATE_KEY: &str = "life_template";
const MACRO_TASKS_KEY: &str = "macro_tasks";

impl SqliteRepository {
    async fn load_blob(&self, key: &str) -> Result<Option<String>, CoreError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM settings WHERE key = $1")
            .bind(key)
            .fetch_optional(self.pool())
            .await
            .map_err(|e| CoreError::StorageRead(e.to_string()))?;
        Ok(row.map(|(value,)| value))
    }

    async fn save_blob(&self, key: &str, blob: &str) -> Result<(), CoreError> {
        sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES ($1, $2)")
            .bind(key)
            .bind(blob)
            .execute(self.pool())
            .await
            .map_err(|e| CoreError::StorageWrite(e.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for SqliteRepository {
    async fn load_life_template(&self) -> Result<Option<LifeTemplate>, CoreError> {
        match self.load_blob(LIFE_TEMPLATE_KEY).await? {
            Some(blob) => {
                let template = serde_json::from_str(&blob)
                    .map_err(|e| CoreError::MalformedTemplate(e.to_string()))?;
                Ok(Some(template))
            }
            None => Ok(None),
        }
    }

    async fn load_macro_tasks(&self) -> Result<Vec<MacroTaskTemplate>, CoreError> {
        match self.load_blob(MACRO_TASKS_KEY).await? {
            Some(blob) => {
                serde_json::from_str(&blob).map_err(|e| CoreError::MalformedTemplate(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    async fn save_life_template_blob(&self, blob: &str) -> Result<(), CoreError> {
        serde_json::from_str::<LifeTemplate>(blob)
            .map_err(|e| CoreError::MalformedTemplate(e.to_string()))?;
        self.save_blob(LIFE_TEMPLATE_KEY, blob).await
    }

    async fn save_macro_tasks_blob(&self, blob: &str) -> Result<(), CoreError> {
        serde_json::from_str::<Vec<MacroTaskTemplate>>(blob)
            .map_err(|e| CoreError::MalformedTemplate(e.to_string()))?;
        self.save_blob(MACRO_TASKS_KEY, blob).await
    }
}
