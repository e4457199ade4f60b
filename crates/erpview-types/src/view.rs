use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::clock::iso_timestamp;
use crate::component::ViewComponent;
use crate::query::QueryBuilder;

/// Version stamped on every new draft.
pub const INITIAL_VERSION: &str = "1.0.0";

pub const DEFAULT_GRID_COLS: u32 = 12;

/// Column count used on narrow viewports when the layout is responsive.
pub const NARROW_GRID_COLS: u32 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewLayout {
    #[serde(rename = "gridCols")]
    pub grid_cols: u32,
    pub responsive: bool,
    #[serde(rename = "className", default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Default for ViewLayout {
    fn default() -> Self {
        Self {
            grid_cols: DEFAULT_GRID_COLS,
            responsive: true,
            class_name: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewMetadata {
    pub version: String,
    pub created_by: String,
    /// ISO-8601
    pub created_at: String,
    /// ISO-8601; refreshed on every builder mutation.
    pub updated_at: String,
}

/// A whole screen: component tree, query definitions, layout, metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicViewConfig {
    /// Storage id; absent until the view is first saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Short human-facing key used for lookup and routing.
    pub alias: String,
    #[serde(default)]
    pub components: Vec<ViewComponent>,
    /// Ids of the data sources this view uses.
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub queries: Vec<QueryBuilder>,
    #[serde(default)]
    pub layout: ViewLayout,
    pub metadata: ViewMetadata,
}

impl DynamicViewConfig {
    /// Empty draft stamped at `now`.
    pub fn draft(created_by: impl Into<String>, now: DateTime<Utc>) -> Self {
        let ts = iso_timestamp(now);
        Self {
            id: None,
            name: String::new(),
            description: String::new(),
            alias: String::new(),
            components: Vec::new(),
            data_sources: Vec::new(),
            queries: Vec::new(),
            layout: ViewLayout::default(),
            metadata: ViewMetadata {
                version: INITIAL_VERSION.to_string(),
                created_by: created_by.into(),
                created_at: ts.clone(),
                updated_at: ts,
            },
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.metadata.updated_at = iso_timestamp(now);
    }

    pub fn find_component(&self, id: &str) -> Option<&ViewComponent> {
        self.components.iter().find_map(|c| c.find(id))
    }

    pub fn find_component_mut(&mut self, id: &str) -> Option<&mut ViewComponent> {
        self.components.iter_mut().find_map(|c| c.find_mut(id))
    }

    /// Number of components in the whole tree, nested ones included.
    pub fn total_components(&self) -> usize {
        let mut count = 0;
        for component in &self.components {
            component.walk(1, &mut |_, _| count += 1);
        }
        count
    }

    pub fn query(&self, id: &str) -> Option<&QueryBuilder> {
        self.queries.iter().find(|q| q.id == id)
    }

    pub fn query_ids(&self) -> Vec<&str> {
        self.queries.iter().map(|q| q.id.as_str()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    /// Static screen addressed by a stored component path.
    Database,
    /// Full JSON screen from the development-view store.
    Development,
    /// Compiled screen from the static alias allow-list.
    Hardcoded,
}

/// Outcome of resolving an alias. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRenderConfig {
    /// The alias that was looked up.
    pub view_id: String,
    pub view_type: ViewType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DynamicViewConfig>,
}

impl ViewRenderConfig {
    pub fn database(alias: impl Into<String>, component_path: impl Into<String>) -> Self {
        Self {
            view_id: alias.into(),
            view_type: ViewType::Database,
            component_path: Some(component_path.into()),
            config: None,
        }
    }

    pub fn development(alias: impl Into<String>, config: DynamicViewConfig) -> Self {
        Self {
            view_id: alias.into(),
            view_type: ViewType::Development,
            component_path: None,
            config: Some(config),
        }
    }

    pub fn hardcoded(alias: impl Into<String>) -> Self {
        Self {
            view_id: alias.into(),
            view_type: ViewType::Hardcoded,
            component_path: None,
            config: None,
        }
    }
}
