use async_trait::async_trait;
use chrono::Utc;
use erpview_types::iso_timestamp;
use serde_json::Value;
use std::sync::Arc;

use crate::environment::Environment;
use crate::filter::{Row, Select};
use crate::Result;

/// Physical storage behind the record store. Collection names passed here are
/// already environment-qualified.
///
/// Used as `Arc<dyn RecordBackend>`.
#[async_trait]
pub trait RecordBackend: Send + Sync {
    async fn select(&self, collection: &str, query: &Select) -> Result<Vec<Row>>;

    /// Insert one row and return it as stored (with id and timestamps).
    async fn insert(&self, collection: &str, row: Row) -> Result<Row>;

    /// Merge `changes` into the row with `id` and return the updated row.
    async fn update(&self, collection: &str, id: &str, changes: Row) -> Result<Row>;

    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Environment-aware handle every collaborator receives explicitly.
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn RecordBackend>,
    environment: Environment,
}

impl RecordStore {
    pub fn new(backend: Arc<dyn RecordBackend>, environment: Environment) -> Self {
        Self {
            backend,
            environment,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// Physical name of a logical collection in this environment.
    pub fn collection(&self, logical: &str) -> String {
        self.environment.collection(logical)
    }

    pub async fn select(&self, logical: &str, query: &Select) -> Result<Vec<Row>> {
        let collection = self.collection(logical);
        let rows = self.backend.select(&collection, query).await?;
        tracing::debug!(collection = %collection, rows = rows.len(), "select");
        Ok(rows)
    }

    pub async fn insert(&self, logical: &str, row: Row) -> Result<Row> {
        let collection = self.collection(logical);
        let stored = self.backend.insert(&collection, row).await?;
        tracing::debug!(collection = %collection, id = ?stored.get("id"), "insert");
        Ok(stored)
    }

    pub async fn update(&self, logical: &str, id: &str, changes: Row) -> Result<Row> {
        let collection = self.collection(logical);
        let stored = self.backend.update(&collection, id, changes).await?;
        tracing::debug!(collection = %collection, id = %id, "update");
        Ok(stored)
    }

    pub async fn delete(&self, logical: &str, id: &str) -> Result<()> {
        let collection = self.collection(logical);
        self.backend.delete(&collection, id).await?;
        tracing::debug!(collection = %collection, id = %id, "delete");
        Ok(())
    }
}

/// Fill in `id`, `created_at` and `updated_at` when the caller left them out.
pub fn stamp_insert(mut row: Row) -> Row {
    let now = iso_timestamp(Utc::now());
    if !matches!(row.get("id"), Some(Value::String(s)) if !s.is_empty()) {
        row.insert(
            "id".to_string(),
            Value::String(uuid::Uuid::new_v4().to_string()),
        );
    }
    if !row.contains_key("created_at") {
        row.insert("created_at".to_string(), Value::String(now.clone()));
    }
    if !row.contains_key("updated_at") {
        row.insert("updated_at".to_string(), Value::String(now));
    }
    row
}

/// Merge `changes` into `row`, keeping its id and refreshing `updated_at`.
pub fn apply_update(row: &mut Row, changes: Row) {
    for (key, value) in changes {
        if key == "id" {
            continue;
        }
        row.insert(key, value);
    }
    row.insert(
        "updated_at".to_string(),
        Value::String(iso_timestamp(Utc::now())),
    );
}

pub fn row_id(row: &Row) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stamp_insert_assigns_missing_fields() {
        let row = stamp_insert(Row::new());
        assert!(row_id(&row).is_some_and(|id| !id.is_empty()));
        assert!(row.contains_key("created_at"));
        assert_eq!(row["created_at"], row["updated_at"]);
    }

    #[test]
    fn test_stamp_insert_keeps_given_id() {
        let mut row = Row::new();
        row.insert("id".to_string(), json!("fixed"));
        assert_eq!(row_id(&stamp_insert(row)), Some("fixed"));
    }

    #[test]
    fn test_apply_update_never_changes_id() {
        let mut row = stamp_insert(Row::new());
        let id = row_id(&row).unwrap().to_string();

        let mut changes = Row::new();
        changes.insert("id".to_string(), json!("other"));
        changes.insert("status".to_string(), json!("testing"));
        apply_update(&mut row, changes);

        assert_eq!(row_id(&row), Some(id.as_str()));
        assert_eq!(row["status"], json!("testing"));
    }
}
