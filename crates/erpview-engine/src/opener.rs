use erpview_types::{
    AccessDecision, ComponentPath, DynamicViewConfig, Principal, PublishedViewRecord, ViewType,
    authorize,
};
use serde::Serialize;

use crate::error::{OpenError, ResolveError};
use crate::resolver::{Resolution, ViewResolver};

/// A resolved view the principal is allowed to see.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OpenedView {
    /// Compiled screen at `component_path`.
    Static {
        alias: String,
        component_path: String,
    },
    /// JSON screen to hand to the renderer. `tier` says where it came from:
    /// `database` for a promoted view, `development` for a draft.
    Dynamic {
        alias: String,
        tier: ViewType,
        config: DynamicViewConfig,
    },
    /// Known static alias without a stored record.
    Hardcoded { alias: String },
}

impl OpenedView {
    pub fn alias(&self) -> &str {
        match self {
            OpenedView::Static { alias, .. }
            | OpenedView::Dynamic { alias, .. }
            | OpenedView::Hardcoded { alias } => alias,
        }
    }

    pub fn config(&self) -> Option<&DynamicViewConfig> {
        match self {
            OpenedView::Dynamic { config, .. } => Some(config),
            _ => None,
        }
    }
}

/// Resolution followed by the access check for the caller.
#[derive(Clone)]
pub struct ViewOpener {
    resolver: ViewResolver,
    development_roles: Vec<String>,
}

impl ViewOpener {
    pub fn new(resolver: ViewResolver) -> Self {
        Self {
            resolver,
            development_roles: vec!["admin".to_string()],
        }
    }

    /// Roles allowed to open views still in development.
    pub fn with_development_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.development_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn resolver(&self) -> &ViewResolver {
        &self.resolver
    }

    pub async fn open(&self, alias: &str, principal: &Principal) -> Result<OpenedView, OpenError> {
        let resolution = self.resolver.resolve_detailed(alias, &principal.role).await?;

        match resolution {
            Resolution::Published(record) => self.open_published(alias, principal, record).await,
            Resolution::Development { config, .. } => {
                if !self.development_roles.contains(&principal.role) {
                    return Err(OpenError::Forbidden {
                        alias: alias.to_string(),
                        reason: format!(
                            "role '{}' may not open views in development",
                            principal.role
                        ),
                    });
                }
                Ok(OpenedView::Dynamic {
                    alias: alias.to_string(),
                    tier: ViewType::Development,
                    config,
                })
            }
            Resolution::Hardcoded(alias) => Ok(OpenedView::Hardcoded { alias }),
        }
    }

    async fn open_published(
        &self,
        alias: &str,
        principal: &Principal,
        record: PublishedViewRecord,
    ) -> Result<OpenedView, OpenError> {
        if let AccessDecision::Deny { reason } = authorize(
            &principal.role,
            &record.required_roles,
            &principal.permissions,
            &record.required_permissions,
        ) {
            return Err(OpenError::Forbidden {
                alias: alias.to_string(),
                reason,
            });
        }

        match ComponentPath::parse(&record.component_path) {
            ComponentPath::Static(component_path) => Ok(OpenedView::Static {
                alias: alias.to_string(),
                component_path,
            }),
            ComponentPath::Dynamic(id) => {
                let source = self
                    .resolver
                    .views()
                    .get_development(&id)
                    .await
                    .map_err(|err| ResolveError::Store(err.to_string()))?
                    .ok_or_else(|| OpenError::MissingDynamicView { id: id.clone() })?;
                let mut config = source.config().map_err(|err| ResolveError::InvalidConfig {
                    alias: alias.to_string(),
                    reason: err.to_string(),
                })?;
                config.id.get_or_insert(source.id);
                Ok(OpenedView::Dynamic {
                    alias: alias.to_string(),
                    tier: ViewType::Database,
                    config,
                })
            }
        }
    }
}
