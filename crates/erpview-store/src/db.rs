use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::adapter::{RecordBackend, apply_update, row_id, stamp_insert};
use crate::filter::{Row, Select};
use crate::schema;
use crate::{Error, Result};

/// SQLite-backed record store.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        schema::init_schema(&conn)?;
        tracing::debug!(path = %db_path.display(), "opened record store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::Backend("sqlite connection lock poisoned".to_string()))
    }
}

fn decode(body: &str) -> Result<Row> {
    match serde_json::from_str::<Value>(body)? {
        Value::Object(row) => Ok(row),
        other => Err(Error::Query(format!(
            "stored row is not an object: {}",
            other
        ))),
    }
}

fn text(row: &Row, key: &str) -> String {
    row.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn load(conn: &Connection, collection: &str, id: &str) -> Result<Option<Row>> {
    let body: Option<String> = conn
        .query_row(
            "SELECT body FROM records WHERE collection = ?1 AND id = ?2",
            params![collection, id],
            |row| row.get(0),
        )
        .optional()?;
    body.as_deref().map(decode).transpose()
}

#[async_trait]
impl RecordBackend for SqliteStore {
    async fn select(&self, collection: &str, query: &Select) -> Result<Vec<Row>> {
        let conn = self.lock()?;
        let mut stmt =
            conn.prepare("SELECT body FROM records WHERE collection = ?1 ORDER BY rowid")?;
        let bodies = stmt
            .query_map([collection], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let rows = bodies
            .iter()
            .map(|body| decode(body))
            .collect::<Result<Vec<_>>>()?;
        Ok(query.apply(rows))
    }

    async fn insert(&self, collection: &str, row: Row) -> Result<Row> {
        let row = stamp_insert(row);
        let id = row_id(&row).unwrap_or_default().to_string();
        let conn = self.lock()?;

        if load(&conn, collection, &id)?.is_some() {
            return Err(Error::Conflict(format!(
                "duplicate id {} in {}",
                id, collection
            )));
        }

        conn.execute(
            r#"
            INSERT INTO records (collection, id, body, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                collection,
                &id,
                serde_json::to_string(&row)?,
                text(&row, "created_at"),
                text(&row, "updated_at"),
            ],
        )?;

        Ok(row)
    }

    async fn update(&self, collection: &str, id: &str, changes: Row) -> Result<Row> {
        let conn = self.lock()?;
        let mut row = load(&conn, collection, id)?
            .ok_or_else(|| Error::Query(format!("row not found: {} in {}", id, collection)))?;

        apply_update(&mut row, changes);

        conn.execute(
            r#"
            UPDATE records SET body = ?3, updated_at = ?4
            WHERE collection = ?1 AND id = ?2
            "#,
            params![
                collection,
                id,
                serde_json::to_string(&row)?,
                text(&row, "updated_at"),
            ],
        )?;

        Ok(row)
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let conn = self.lock()?;
        let removed = conn.execute(
            "DELETE FROM records WHERE collection = ?1 AND id = ?2",
            params![collection, id],
        )?;
        if removed == 0 {
            return Err(Error::Query(format!(
                "row not found: {} in {}",
                id, collection
            )));
        }
        Ok(())
    }
}
