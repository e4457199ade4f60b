use erpview_types::{
    DevelopmentStatus, DevelopmentViewPayload, DevelopmentViewRecord, NewPublishedView,
    PublishedStatus, PublishedViewRecord,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::adapter::RecordStore;
use crate::filter::{Order, Row, Select};
use crate::{Error, Result};

/// Logical collection of published views (pointers to screens by path).
pub const PUBLISHED_VIEWS: &str = "published_views";

/// Logical collection of development views (full JSON screens).
pub const DEVELOPMENT_VIEWS: &str = "development_views";

fn to_row<T: Serialize>(value: &T) -> Result<Row> {
    match serde_json::to_value(value)? {
        Value::Object(row) => Ok(row),
        _ => Err(Error::Query("record did not serialize to an object".to_string())),
    }
}

fn from_row<T: DeserializeOwned>(row: Row) -> Result<T> {
    Ok(serde_json::from_value(Value::Object(row))?)
}

fn from_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter().map(from_row).collect()
}

/// Persistence for published and development view descriptors.
#[derive(Clone)]
pub struct ViewConfigStore {
    records: RecordStore,
}

impl ViewConfigStore {
    pub fn new(records: RecordStore) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    // --- published views ---

    pub async fn list_published(&self) -> Result<Vec<PublishedViewRecord>> {
        let rows = self
            .records
            .select(PUBLISHED_VIEWS, &Select::all().order_by("alias", Order::Asc))
            .await?;
        from_rows(rows)
    }

    pub async fn get_published(&self, id: &str) -> Result<Option<PublishedViewRecord>> {
        let mut rows = self
            .records
            .select(PUBLISHED_VIEWS, &Select::all().eq("id", id).limit(1))
            .await?;
        rows.pop().map(from_row).transpose()
    }

    /// Active published view for `alias` whose required roles include `role`.
    pub async fn find_active_published(
        &self,
        alias: &str,
        role: &str,
    ) -> Result<Option<PublishedViewRecord>> {
        let query = Select::all()
            .eq("alias", alias)
            .eq("status", PublishedStatus::Active.as_str())
            .contains("required_roles", role)
            .order_by("updated_at", Order::Desc)
            .limit(1);
        let mut rows = self.records.select(PUBLISHED_VIEWS, &query).await?;
        rows.pop().map(from_row).transpose()
    }

    /// Insert a published view. Rejected when an active row already holds the
    /// alias.
    pub async fn insert_published(&self, view: &NewPublishedView) -> Result<PublishedViewRecord> {
        if view.status == PublishedStatus::Active {
            let holders = self
                .records
                .select(
                    PUBLISHED_VIEWS,
                    &Select::all()
                        .eq("alias", view.alias.as_str())
                        .eq("status", PublishedStatus::Active.as_str()),
                )
                .await?;
            if !holders.is_empty() {
                return Err(Error::Conflict(format!(
                    "alias '{}' is already published",
                    view.alias
                )));
            }
        }

        let stored = self.records.insert(PUBLISHED_VIEWS, to_row(view)?).await?;
        from_row(stored)
    }

    pub async fn set_published_status(
        &self,
        id: &str,
        status: PublishedStatus,
    ) -> Result<PublishedViewRecord> {
        let mut changes = Row::new();
        changes.insert("status".to_string(), Value::from(status.as_str()));
        let stored = self.records.update(PUBLISHED_VIEWS, id, changes).await?;
        from_row(stored)
    }

    pub async fn delete_published(&self, id: &str) -> Result<()> {
        self.records.delete(PUBLISHED_VIEWS, id).await
    }

    // --- development views ---

    /// All development views, most recently updated first.
    pub async fn list_development(&self) -> Result<Vec<DevelopmentViewRecord>> {
        let rows = self
            .records
            .select(
                DEVELOPMENT_VIEWS,
                &Select::all().order_by("updated_at", Order::Desc),
            )
            .await?;
        from_rows(rows)
    }

    pub async fn get_development(&self, id: &str) -> Result<Option<DevelopmentViewRecord>> {
        let mut rows = self
            .records
            .select(DEVELOPMENT_VIEWS, &Select::all().eq("id", id).limit(1))
            .await?;
        rows.pop().map(from_row).transpose()
    }

    /// Development view for `alias` in a resolvable status. When several rows
    /// match, the most recently updated wins.
    pub async fn find_resolvable_development(
        &self,
        alias: &str,
    ) -> Result<Option<DevelopmentViewRecord>> {
        let query = Select::all()
            .eq("alias", alias)
            .in_list(
                "status",
                DevelopmentStatus::RESOLVABLE.iter().map(|s| s.as_str()),
            )
            .order_by("updated_at", Order::Desc)
            .limit(1);
        let mut rows = self.records.select(DEVELOPMENT_VIEWS, &query).await?;
        rows.pop().map(from_row).transpose()
    }

    pub async fn create_development(
        &self,
        payload: &DevelopmentViewPayload,
    ) -> Result<DevelopmentViewRecord> {
        self.ensure_alias_free(&payload.alias, None).await?;
        let stored = self
            .records
            .insert(DEVELOPMENT_VIEWS, to_row(payload)?)
            .await?;
        from_row(stored)
    }

    /// Overwrite a development view. The original author is kept.
    pub async fn update_development(
        &self,
        id: &str,
        payload: &DevelopmentViewPayload,
    ) -> Result<DevelopmentViewRecord> {
        self.ensure_alias_free(&payload.alias, Some(id)).await?;
        let mut changes = to_row(payload)?;
        changes.remove("created_by");
        let stored = self.records.update(DEVELOPMENT_VIEWS, id, changes).await?;
        from_row(stored)
    }

    pub async fn set_development_status(
        &self,
        id: &str,
        status: DevelopmentStatus,
    ) -> Result<DevelopmentViewRecord> {
        let mut changes = Row::new();
        changes.insert("status".to_string(), Value::from(status.as_str()));
        let stored = self.records.update(DEVELOPMENT_VIEWS, id, changes).await?;
        from_row(stored)
    }

    pub async fn delete_development(&self, id: &str) -> Result<()> {
        self.records.delete(DEVELOPMENT_VIEWS, id).await
    }

    /// Fails with `Conflict` when another draft still holds `alias`.
    async fn ensure_alias_free(&self, alias: &str, except_id: Option<&str>) -> Result<()> {
        let query = Select::all().eq("alias", alias).in_list(
            "status",
            DevelopmentStatus::ALIAS_HOLDING.iter().map(|s| s.as_str()),
        );
        let holders = self.records.select(DEVELOPMENT_VIEWS, &query).await?;
        let taken = holders
            .iter()
            .any(|row| row.get("id").and_then(Value::as_str) != except_id);
        if taken {
            return Err(Error::Conflict(format!(
                "alias '{}' is already used by another development view",
                alias
            )));
        }
        Ok(())
    }
}
