//! Fault injection for record backends.
//!
//! `FaultyStore` wraps a real backend and fails chosen operations on chosen
//! collections, so tests can reach the error paths of the resolver, the
//! builder and promotion.

use async_trait::async_trait;
use erpview_store::{Error, RecordBackend, Result, Row, Select};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Select,
    Insert,
    Update,
    Delete,
}

impl Operation {
    pub fn is_write(&self) -> bool {
        !matches!(self, Operation::Select)
    }
}

pub struct FaultyStore {
    inner: Arc<dyn RecordBackend>,
    faults: Mutex<Vec<(Operation, String)>>,
    calls: Mutex<Vec<(Operation, String)>>,
}

impl FaultyStore {
    pub fn new(inner: Arc<dyn RecordBackend>) -> Self {
        Self {
            inner,
            faults: Mutex::new(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Fail `operation` on every physical collection starting with
    /// `collection_prefix` (e.g. `"published_views"`).
    pub fn fail(&self, operation: Operation, collection_prefix: &str) {
        self.faults
            .lock()
            .unwrap()
            .push((operation, collection_prefix.to_string()));
    }

    /// Remove every injected fault.
    pub fn heal(&self) {
        self.faults.lock().unwrap().clear();
    }

    /// Calls seen so far, failed ones included.
    pub fn calls(&self) -> Vec<(Operation, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| op.is_write())
            .count()
    }

    fn check(&self, operation: Operation, collection: &str) -> Result<()> {
        self.calls
            .lock()
            .unwrap()
            .push((operation, collection.to_string()));

        let failing = self
            .faults
            .lock()
            .unwrap()
            .iter()
            .any(|(op, prefix)| *op == operation && collection.starts_with(prefix.as_str()));
        if failing {
            return Err(Error::Backend(format!(
                "injected {:?} failure on {}",
                operation, collection
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordBackend for FaultyStore {
    async fn select(&self, collection: &str, query: &Select) -> Result<Vec<Row>> {
        self.check(Operation::Select, collection)?;
        self.inner.select(collection, query).await
    }

    async fn insert(&self, collection: &str, row: Row) -> Result<Row> {
        self.check(Operation::Insert, collection)?;
        self.inner.insert(collection, row).await
    }

    async fn update(&self, collection: &str, id: &str, changes: Row) -> Result<Row> {
        self.check(Operation::Update, collection)?;
        self.inner.update(collection, id, changes).await
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.check(Operation::Delete, collection)?;
        self.inner.delete(collection, id).await
    }
}
