use erpview_store::ViewConfigStore;
use erpview_types::{
    DevelopmentViewRecord, DynamicViewConfig, PublishedViewRecord, StaticAliases, ViewRenderConfig,
};

use crate::error::ResolveError;

/// Which tier answered, with the row that answered it.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Published(PublishedViewRecord),
    Development {
        record: DevelopmentViewRecord,
        config: DynamicViewConfig,
    },
    Hardcoded(String),
}

impl Resolution {
    pub fn into_render_config(self, alias: &str) -> ViewRenderConfig {
        match self {
            Resolution::Published(record) => {
                ViewRenderConfig::database(alias, record.component_path)
            }
            Resolution::Development { config, .. } => ViewRenderConfig::development(alias, config),
            Resolution::Hardcoded(_) => ViewRenderConfig::hardcoded(alias),
        }
    }
}

/// Looks an alias up across the published, development and static tiers, in
/// that order. The first tier that matches answers.
#[derive(Clone)]
pub struct ViewResolver {
    views: ViewConfigStore,
    aliases: StaticAliases,
}

impl ViewResolver {
    pub fn new(views: ViewConfigStore, aliases: StaticAliases) -> Self {
        Self { views, aliases }
    }

    pub fn views(&self) -> &ViewConfigStore {
        &self.views
    }

    pub fn aliases(&self) -> &StaticAliases {
        &self.aliases
    }

    pub async fn resolve(&self, alias: &str, role: &str) -> Result<ViewRenderConfig, ResolveError> {
        Ok(self
            .resolve_detailed(alias, role)
            .await?
            .into_render_config(alias))
    }

    /// Like [`resolve`](Self::resolve) but keeps the matching row.
    ///
    /// A tier whose store call fails is skipped. If no later tier matches, the
    /// first store failure is reported instead of `NotFound`.
    pub async fn resolve_detailed(
        &self,
        alias: &str,
        role: &str,
    ) -> Result<Resolution, ResolveError> {
        let mut failure: Option<String> = None;

        match self.views.find_active_published(alias, role).await {
            Ok(Some(record)) => {
                tracing::debug!(alias = %alias, id = %record.id, "resolved published view");
                return Ok(Resolution::Published(record));
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(alias = %alias, error = %err, "published view lookup failed");
                failure.get_or_insert(err.to_string());
            }
        }

        match self.views.find_resolvable_development(alias).await {
            Ok(Some(record)) => {
                let mut config = record
                    .config()
                    .map_err(|err| ResolveError::InvalidConfig {
                        alias: alias.to_string(),
                        reason: err.to_string(),
                    })?;
                // The stored schema is written before its row id exists.
                config.id.get_or_insert_with(|| record.id.clone());
                tracing::debug!(alias = %alias, id = %record.id, "resolved development view");
                return Ok(Resolution::Development { record, config });
            }
            Ok(None) => {}
            Err(err) => {
                tracing::warn!(alias = %alias, error = %err, "development view lookup failed");
                failure.get_or_insert(err.to_string());
            }
        }

        if self.aliases.contains(alias) {
            tracing::debug!(alias = %alias, "resolved hardcoded view");
            return Ok(Resolution::Hardcoded(alias.to_string()));
        }

        Err(match failure {
            Some(msg) => ResolveError::Store(msg),
            None => ResolveError::NotFound {
                alias: alias.to_string(),
            },
        })
    }
}
