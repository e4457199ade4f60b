// Record store adapter and view configuration store
// Rows are flat JSON objects in environment-qualified collections

mod adapter;
mod db;
mod environment;
mod error;
mod filter;
mod memory;
mod promotion;
mod schema;
mod views;

// Public API
pub use adapter::{RecordBackend, RecordStore, apply_update, row_id, stamp_insert};
pub use db::SqliteStore;
pub use environment::Environment;
pub use error::{Error, Result, StoreResponse};
pub use filter::{Filter, Order, Row, Select};
pub use memory::MemoryStore;
pub use promotion::{PromoteOptions, PromotionError, PromotionReport};
pub use schema::SCHEMA_VERSION;
pub use views::{DEVELOPMENT_VIEWS, PUBLISHED_VIEWS, ViewConfigStore};
