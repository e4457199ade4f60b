use erpview_store::ViewConfigStore;
use erpview_types::{
    Clock, DataSource, DevelopmentViewPayload, DynamicViewConfig, QueryBuilder, ViewComponent,
    ViewLayout, validate,
};
use std::sync::Arc;

use crate::error::{BuilderError, SaveOutcome};

/// Fields of the view itself that `update_view_info` can change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewInfoUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub alias: Option<String>,
    pub layout: Option<ViewLayout>,
}

/// Authoring session over one view.
///
/// Every mutation that changes the view re-stamps `metadata.updated_at`;
/// calls that find nothing to change leave it alone.
pub struct ViewBuilder {
    views: ViewConfigStore,
    clock: Arc<dyn Clock>,
    author: String,
    config: DynamicViewConfig,
    selected: Option<String>,
    catalog: Vec<DataSource>,
    /// `updated_at` at the last save, load or reset.
    saved_at: String,
}

impl ViewBuilder {
    pub fn new(views: ViewConfigStore, clock: Arc<dyn Clock>, author: impl Into<String>) -> Self {
        let author = author.into();
        let config = DynamicViewConfig::draft(author.clone(), clock.now());
        let saved_at = config.metadata.updated_at.clone();
        Self {
            views,
            clock,
            author,
            config,
            selected: None,
            catalog: Vec::new(),
            saved_at,
        }
    }

    pub fn config(&self) -> &DynamicViewConfig {
        &self.config
    }

    /// Changed since the last save, load or reset.
    pub fn is_dirty(&self) -> bool {
        self.config.metadata.updated_at != self.saved_at
    }

    fn touch(&mut self) {
        self.config.touch(self.clock.now());
    }

    pub fn update_view_info(&mut self, update: ViewInfoUpdate) {
        if let Some(name) = update.name {
            self.config.name = name;
        }
        if let Some(description) = update.description {
            self.config.description = description;
        }
        if let Some(alias) = update.alias {
            self.config.alias = alias;
        }
        if let Some(layout) = update.layout {
            self.config.layout = layout;
        }
        self.touch();
    }

    // --- components ---

    pub fn add_component(&mut self, component: ViewComponent) {
        self.config.components.push(component);
        self.touch();
    }

    /// Append inside a container. Returns false when `parent_id` is missing
    /// or is not a container.
    pub fn add_component_to(&mut self, parent_id: &str, component: ViewComponent) -> bool {
        let Some(children) = self
            .config
            .find_component_mut(parent_id)
            .and_then(|parent| parent.body.children_mut())
        else {
            return false;
        };
        children.push(component);
        self.touch();
        true
    }

    /// Apply `change` to the component with `id`, wherever it is nested.
    pub fn update_component(&mut self, id: &str, change: impl FnOnce(&mut ViewComponent)) -> bool {
        let Some(component) = self.config.find_component_mut(id) else {
            return false;
        };
        change(component);
        self.touch();
        true
    }

    /// Remove the component with `id` and its subtree. Removing a missing id
    /// is a no-op. Clears the selection if it pointed into the removed subtree.
    pub fn remove_component(&mut self, id: &str) -> bool {
        let Some(removed) = remove_from(&mut self.config.components, id) else {
            return false;
        };
        if let Some(selected) = &self.selected
            && removed.find(selected).is_some()
        {
            self.selected = None;
        }
        self.touch();
        true
    }

    /// Select a component for editing; `None` or an unknown id clears it.
    pub fn select_element(&mut self, id: Option<&str>) {
        self.selected = id
            .filter(|id| self.config.find_component(id).is_some())
            .map(str::to_string);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_component(&self) -> Option<&ViewComponent> {
        self.selected
            .as_deref()
            .and_then(|id| self.config.find_component(id))
    }

    // --- data sources ---

    /// Register a data source and mark it used by the view. Re-adding an id
    /// replaces its definition.
    pub fn add_data_source(&mut self, source: DataSource) {
        if !self.config.data_sources.contains(&source.id) {
            self.config.data_sources.push(source.id.clone());
        }
        match self.catalog.iter_mut().find(|s| s.id == source.id) {
            Some(existing) => *existing = source,
            None => self.catalog.push(source),
        }
        self.touch();
    }

    /// Drop a data source and every query that reads it.
    pub fn remove_data_source(&mut self, id: &str) -> bool {
        let before = self.config.data_sources.len();
        self.config.data_sources.retain(|s| s != id);
        self.catalog.retain(|s| s.id != id);
        let queries_before = self.config.queries.len();
        self.config.queries.retain(|q| !q.references_source(id));

        let queries_removed = queries_before - self.config.queries.len();
        if self.config.data_sources.len() == before && queries_removed == 0 {
            return false;
        }
        tracing::debug!(data_source = %id, queries_removed, "removed data source");
        self.touch();
        true
    }

    pub fn data_source(&self, id: &str) -> Option<&DataSource> {
        self.catalog.iter().find(|s| s.id == id)
    }

    pub fn data_sources(&self) -> &[DataSource] {
        &self.catalog
    }

    // --- queries ---

    /// Add a query, replacing any query with the same id.
    pub fn add_query(&mut self, query: QueryBuilder) {
        match self.config.queries.iter_mut().find(|q| q.id == query.id) {
            Some(existing) => *existing = query,
            None => self.config.queries.push(query),
        }
        self.touch();
    }

    pub fn update_query(&mut self, id: &str, change: impl FnOnce(&mut QueryBuilder)) -> bool {
        let Some(query) = self.config.queries.iter_mut().find(|q| q.id == id) else {
            return false;
        };
        change(query);
        self.touch();
        true
    }

    pub fn remove_query(&mut self, id: &str) -> bool {
        let before = self.config.queries.len();
        self.config.queries.retain(|q| q.id != id);
        if self.config.queries.len() == before {
            return false;
        }
        self.touch();
        true
    }

    // --- persistence ---

    /// Persist the view as a development view. Creates a record the first
    /// time and writes the new id back; updates it afterwards.
    ///
    /// Nothing is written when the view has no name or alias or fails
    /// validation.
    pub async fn save_view(&mut self, actor_id: &str) -> SaveOutcome {
        if self.config.name.trim().is_empty() || self.config.alias.trim().is_empty() {
            return SaveOutcome::failed("Name and alias are required");
        }

        let report = validate(&self.config);
        if !report.is_valid() {
            return SaveOutcome::failed(BuilderError::Validation(report.error_summary()));
        }

        let payload = match DevelopmentViewPayload::from_config(&self.config, actor_id) {
            Ok(payload) => payload,
            Err(err) => return SaveOutcome::failed(err),
        };

        let result = match self.config.id.clone() {
            Some(id) => self.views.update_development(&id, &payload).await,
            None => self.views.create_development(&payload).await,
        };

        match result {
            Ok(record) => {
                tracing::debug!(id = %record.id, alias = %self.config.alias, "saved view");
                self.config.id = Some(record.id.clone());
                self.saved_at = self.config.metadata.updated_at.clone();
                SaveOutcome::saved(record.id)
            }
            Err(err) => {
                tracing::warn!(alias = %self.config.alias, error = %err, "saving view failed");
                SaveOutcome::failed(err)
            }
        }
    }

    /// Replace the session with a stored development view.
    pub async fn load_view(&mut self, id: &str) -> Result<(), BuilderError> {
        let record = self
            .views
            .get_development(id)
            .await?
            .ok_or_else(|| BuilderError::NotFound { id: id.to_string() })?;
        let mut config = record
            .config()
            .map_err(|err| BuilderError::InvalidConfig(err.to_string()))?;
        config.id = Some(record.id);

        self.saved_at = config.metadata.updated_at.clone();
        self.config = config;
        self.catalog.clear();
        self.selected = None;
        Ok(())
    }

    /// Start editing `config` as given, e.g. one read from a file. The
    /// session counts as changed until it is saved.
    pub fn load_config(&mut self, config: DynamicViewConfig) {
        self.config = config;
        self.selected = None;
        self.catalog.clear();
        self.touch();
        if self.config.metadata.updated_at == self.saved_at {
            self.saved_at.clear();
        }
    }

    /// Back to an empty draft.
    pub fn reset(&mut self) {
        self.config = DynamicViewConfig::draft(self.author.clone(), self.clock.now());
        self.saved_at = self.config.metadata.updated_at.clone();
        self.selected = None;
        self.catalog.clear();
    }
}

fn remove_from(components: &mut Vec<ViewComponent>, id: &str) -> Option<ViewComponent> {
    if let Some(index) = components.iter().position(|c| c.id == id) {
        return Some(components.remove(index));
    }
    components
        .iter_mut()
        .filter_map(|c| c.body.children_mut())
        .find_map(|children| remove_from(children, id))
}
