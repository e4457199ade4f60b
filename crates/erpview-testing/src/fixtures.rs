//! Sample views and data sources, and stores seeded with them.

use erpview_store::{Environment, MemoryStore, RecordStore, ViewConfigStore};
use erpview_types::{DataSource, DynamicViewConfig, NewPublishedView, PublishedStatus};
use std::path::PathBuf;
use std::sync::Arc;

const DEMO01: &str = include_str!("../fixtures/demo01.json");
const DATA_SOURCES: &str = include_str!("../fixtures/data_sources.json");

/// Directory holding the JSON fixtures, for tests that need file paths.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// The `demo01` screen: a card holding a paragraph and a button, next to a
/// data table bound to `q_materials`.
pub fn demo01() -> DynamicViewConfig {
    serde_json::from_str(DEMO01).expect("demo01 fixture should parse")
}

/// Catalog entries for `ds_materials` and `ds_categories`.
pub fn data_sources() -> Vec<DataSource> {
    serde_json::from_str(DATA_SOURCES).expect("data source fixture should parse")
}

/// Active published view pointing at a static screen.
pub fn published_view(alias: &str, component_path: &str, roles: &[&str]) -> NewPublishedView {
    NewPublishedView {
        module_id: "materials".to_string(),
        name: alias.to_uppercase(),
        description: String::new(),
        alias: alias.to_string(),
        component_path: component_path.to_string(),
        required_roles: roles.iter().map(|r| r.to_string()).collect(),
        required_permissions: Vec::new(),
        status: PublishedStatus::Active,
    }
}

/// An empty in-memory view store for the development environment.
pub fn memory_views() -> (Arc<MemoryStore>, ViewConfigStore) {
    let backend = Arc::new(MemoryStore::new());
    let records = RecordStore::new(backend.clone(), Environment::Development);
    (backend, ViewConfigStore::new(records))
}
