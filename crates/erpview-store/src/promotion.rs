use erpview_types::{
    ComponentPath, DevelopmentStatus, NewPublishedView, PublishedStatus, PublishedViewRecord,
};
use serde::Serialize;
use std::fmt;

use crate::Error;
use crate::views::ViewConfigStore;

/// Target of a promotion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromoteOptions {
    pub module_id: String,
    pub required_roles: Vec<String>,
    pub required_permissions: Vec<String>,
}

impl PromoteOptions {
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            required_roles: vec!["admin".to_string()],
            required_permissions: Vec::new(),
        }
    }

    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_permissions = permissions.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionReport {
    pub development_id: String,
    pub published: PublishedViewRecord,
}

#[derive(Debug)]
pub enum PromotionError {
    /// No development view with this id.
    NotFound { id: String },

    /// The development view was promoted before.
    AlreadyPublished { id: String },

    /// Phase 1 (reading the source or inserting the published row) failed.
    Store(Error),

    /// Phase 2 failed; the published row was removed again.
    Reverted { published_id: String, cause: Error },

    /// Phase 2 failed and so did removing the published row, which is now
    /// orphaned.
    Partial {
        published_id: String,
        cause: Error,
        compensation: Error,
    },
}

impl fmt::Display for PromotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromotionError::NotFound { id } => write!(f, "development view not found: {}", id),
            PromotionError::AlreadyPublished { id } => {
                write!(f, "development view {} is already published", id)
            }
            PromotionError::Store(err) => write!(f, "promotion failed: {}", err),
            PromotionError::Reverted {
                published_id,
                cause,
            } => write!(
                f,
                "promotion reverted (published row {} removed): {}",
                published_id, cause
            ),
            PromotionError::Partial {
                published_id,
                cause,
                compensation,
            } => write!(
                f,
                "promotion left published row {} behind: {} (cleanup failed: {})",
                published_id, cause, compensation
            ),
        }
    }
}

impl std::error::Error for PromotionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PromotionError::Store(err)
            | PromotionError::Reverted { cause: err, .. }
            | PromotionError::Partial { cause: err, .. } => Some(err),
            PromotionError::NotFound { .. } | PromotionError::AlreadyPublished { .. } => None,
        }
    }
}

impl From<Error> for PromotionError {
    fn from(err: Error) -> Self {
        PromotionError::Store(err)
    }
}

impl ViewConfigStore {
    /// Publish a development view under its alias.
    ///
    /// Phase 1 inserts an active published row pointing at `dynamic:<id>`;
    /// phase 2 marks the source `published`. A phase 2 failure deletes the
    /// inserted row again.
    pub async fn promote(
        &self,
        development_id: &str,
        options: &PromoteOptions,
    ) -> std::result::Result<PromotionReport, PromotionError> {
        let source = self
            .get_development(development_id)
            .await?
            .ok_or_else(|| PromotionError::NotFound {
                id: development_id.to_string(),
            })?;

        if source.status == DevelopmentStatus::Published {
            return Err(PromotionError::AlreadyPublished {
                id: development_id.to_string(),
            });
        }

        let published = self
            .insert_published(&NewPublishedView {
                module_id: options.module_id.clone(),
                name: source.name.clone(),
                description: source.description.clone(),
                alias: source.alias.clone(),
                component_path: ComponentPath::dynamic(&source.id),
                required_roles: options.required_roles.clone(),
                required_permissions: options.required_permissions.clone(),
                status: PublishedStatus::Active,
            })
            .await?;
        tracing::debug!(
            development_id = %development_id,
            published_id = %published.id,
            "promotion phase 1 complete"
        );

        if let Err(cause) = self
            .set_development_status(development_id, DevelopmentStatus::Published)
            .await
        {
            tracing::warn!(
                development_id = %development_id,
                error = %cause,
                "promotion phase 2 failed, removing published row"
            );
            return Err(match self.delete_published(&published.id).await {
                Ok(()) => PromotionError::Reverted {
                    published_id: published.id,
                    cause,
                },
                Err(compensation) => {
                    tracing::error!(
                        published_id = %published.id,
                        error = %compensation,
                        "could not remove published row after failed promotion"
                    );
                    PromotionError::Partial {
                        published_id: published.id,
                        cause,
                        compensation,
                    }
                }
            });
        }

        Ok(PromotionReport {
            development_id: development_id.to_string(),
            published,
        })
    }
}
