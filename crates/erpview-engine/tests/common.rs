//! Common test utilities shared across integration tests.
//!
//! Clippy cannot track usage across integration test files, hence the
//! `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use erpview_engine::{ViewBuilder, ViewOpener, ViewResolver};
use erpview_store::{Environment, MemoryStore, RecordBackend, RecordStore, ViewConfigStore};
use erpview_testing::{FaultyStore, ManualClock};
use erpview_types::{
    DevelopmentViewPayload, DynamicViewConfig, Principal, StaticAliases,
};
use std::sync::Arc;

pub struct Harness {
    pub faults: Arc<FaultyStore>,
    pub views: ViewConfigStore,
    pub clock: Arc<ManualClock>,
}

impl Harness {
    /// In-memory store behind a fault injector, in the development
    /// environment.
    pub fn new() -> Self {
        let inner: Arc<dyn RecordBackend> = Arc::new(MemoryStore::new());
        let faults = Arc::new(FaultyStore::new(inner));
        let records = RecordStore::new(faults.clone(), Environment::Development);
        Self {
            faults,
            views: ViewConfigStore::new(records),
            clock: Arc::new(ManualClock::new()),
        }
    }

    pub fn resolver(&self) -> ViewResolver {
        ViewResolver::new(self.views.clone(), StaticAliases::builtin())
    }

    pub fn opener(&self) -> ViewOpener {
        ViewOpener::new(self.resolver())
    }

    pub fn builder(&self) -> ViewBuilder {
        ViewBuilder::new(self.views.clone(), self.clock.clone(), "user-1")
    }

    /// Store `config` as a development view and return its id.
    pub async fn save_draft(&self, config: &DynamicViewConfig) -> String {
        let payload = DevelopmentViewPayload::from_config(config, "user-1").unwrap();
        self.views.create_development(&payload).await.unwrap().id
    }
}

pub fn admin() -> Principal {
    Principal::new("admin")
}

pub fn seller() -> Principal {
    Principal::new("seller")
}
