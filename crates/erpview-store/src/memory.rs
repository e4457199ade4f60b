use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::adapter::{RecordBackend, apply_update, row_id, stamp_insert};
use crate::filter::{Row, Select};
use crate::{Error, Result};

/// In-process backend. Rows keep insertion order per collection.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<Row>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows currently held in a physical collection.
    pub fn len(&self, collection: &str) -> usize {
        self.lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Vec<Row>>>> {
        self.collections
            .lock()
            .map_err(|_| Error::Backend("memory store lock poisoned".to_string()))
    }
}

#[async_trait]
impl RecordBackend for MemoryStore {
    async fn select(&self, collection: &str, query: &Select) -> Result<Vec<Row>> {
        let collections = self.lock()?;
        let rows = collections.get(collection).cloned().unwrap_or_default();
        Ok(query.apply(rows))
    }

    async fn insert(&self, collection: &str, row: Row) -> Result<Row> {
        let row = stamp_insert(row);
        let mut collections = self.lock()?;
        let rows = collections.entry(collection.to_string()).or_default();

        let id = row_id(&row).unwrap_or_default();
        if rows.iter().any(|r| row_id(r) == Some(id)) {
            return Err(Error::Conflict(format!(
                "duplicate id {} in {}",
                id, collection
            )));
        }

        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, collection: &str, id: &str, changes: Row) -> Result<Row> {
        let mut collections = self.lock()?;
        let row = collections
            .get_mut(collection)
            .and_then(|rows| rows.iter_mut().find(|r| row_id(r) == Some(id)))
            .ok_or_else(|| Error::Query(format!("row not found: {} in {}", id, collection)))?;

        apply_update(row, changes);
        Ok(row.clone())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut collections = self.lock()?;
        let rows = collections
            .get_mut(collection)
            .ok_or_else(|| Error::Query(format!("row not found: {} in {}", id, collection)))?;

        let before = rows.len();
        rows.retain(|r| row_id(r) != Some(id));
        if rows.len() == before {
            return Err(Error::Query(format!(
                "row not found: {} in {}",
                id, collection
            )));
        }
        Ok(())
    }
}
