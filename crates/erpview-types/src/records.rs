use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::view::DynamicViewConfig;
use crate::Error;

/// Prefix of component paths that point back at a development view.
pub const DYNAMIC_PATH_PREFIX: &str = "dynamic:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishedStatus {
    Active,
    Inactive,
}

impl PublishedStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishedStatus::Active => "active",
            PublishedStatus::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevelopmentStatus {
    Development,
    Testing,
    Ready,
    Published,
}

impl DevelopmentStatus {
    pub const RESOLVABLE: [DevelopmentStatus; 2] =
        [DevelopmentStatus::Development, DevelopmentStatus::Testing];

    /// Statuses that hold an alias against other drafts.
    pub const ALIAS_HOLDING: [DevelopmentStatus; 3] = [
        DevelopmentStatus::Development,
        DevelopmentStatus::Testing,
        DevelopmentStatus::Ready,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DevelopmentStatus::Development => "development",
            DevelopmentStatus::Testing => "testing",
            DevelopmentStatus::Ready => "ready",
            DevelopmentStatus::Published => "published",
        }
    }

    /// Whether the resolver's development tier answers for this status.
    pub fn is_resolvable(&self) -> bool {
        Self::RESOLVABLE.contains(self)
    }
}

impl fmt::Display for DevelopmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DevelopmentStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(DevelopmentStatus::Development),
            "testing" => Ok(DevelopmentStatus::Testing),
            "ready" => Ok(DevelopmentStatus::Ready),
            "published" => Ok(DevelopmentStatus::Published),
            other => Err(Error::InvalidValue(format!(
                "unknown development status: {}",
                other
            ))),
        }
    }
}

/// Row of the published-view collection: a pointer to a screen by path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishedViewRecord {
    pub id: String,
    pub module_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub alias: String,
    pub component_path: String,
    #[serde(default)]
    pub required_roles: Vec<String>,
    #[serde(default)]
    pub required_permissions: Vec<String>,
    pub status: PublishedStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Insert payload for a published view; the store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPublishedView {
    pub module_id: String,
    pub name: String,
    pub description: String,
    pub alias: String,
    pub component_path: String,
    pub required_roles: Vec<String>,
    pub required_permissions: Vec<String>,
    pub status: PublishedStatus,
}

/// Row of the development-view collection: a full JSON screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentViewRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub alias: String,
    /// Stored screen. Kept raw so one malformed row cannot hide the others.
    pub schema_json: Value,
    pub created_by: String,
    pub status: DevelopmentStatus,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl DevelopmentViewRecord {
    pub fn config(&self) -> Result<DynamicViewConfig, serde_json::Error> {
        serde_json::from_value(self.schema_json.clone())
    }
}

/// Insert/update payload the builder sends when saving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentViewPayload {
    pub name: String,
    pub description: String,
    pub alias: String,
    pub schema_json: Value,
    pub created_by: String,
    pub status: DevelopmentStatus,
}

impl DevelopmentViewPayload {
    pub fn from_config(
        config: &DynamicViewConfig,
        actor_id: impl Into<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            name: config.name.clone(),
            description: config.description.clone(),
            alias: config.alias.clone(),
            schema_json: serde_json::to_value(config)?,
            created_by: actor_id.into(),
            status: DevelopmentStatus::Development,
        })
    }
}

/// Where a published view's screen lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentPath {
    /// Promoted development view, by id.
    Dynamic(String),
    /// Compiled screen path.
    Static(String),
}

impl ComponentPath {
    pub fn parse(path: &str) -> Self {
        match path.strip_prefix(DYNAMIC_PATH_PREFIX) {
            Some(id) => ComponentPath::Dynamic(id.to_string()),
            None => ComponentPath::Static(path.to_string()),
        }
    }

    pub fn dynamic(development_view_id: &str) -> String {
        format!("{}{}", DYNAMIC_PATH_PREFIX, development_view_id)
    }
}

impl fmt::Display for ComponentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentPath::Dynamic(id) => write!(f, "{}{}", DYNAMIC_PATH_PREFIX, id),
            ComponentPath::Static(path) => write!(f, "{}", path),
        }
    }
}
