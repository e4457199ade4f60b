use serde::Serialize;
use std::fmt;

/// Why an alias could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// Every tier answered cleanly and none matched.
    NotFound { alias: String },

    /// A development row matched but its stored screen does not parse.
    InvalidConfig { alias: String, reason: String },

    /// A tier could not be queried and no later tier matched.
    Store(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::NotFound { alias } => write!(f, "view not found: {}", alias),
            ResolveError::InvalidConfig { alias, reason } => {
                write!(f, "view {} has an invalid configuration: {}", alias, reason)
            }
            ResolveError::Store(msg) => write!(f, "could not look up view: {}", msg),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Why a view could not be opened for a principal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    Resolve(ResolveError),

    /// Resolved, but the principal may not see it.
    Forbidden { alias: String, reason: String },

    /// A published view points at a development view that is gone.
    MissingDynamicView { id: String },
}

impl OpenError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, OpenError::Resolve(ResolveError::NotFound { .. }))
    }
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Resolve(err) => write!(f, "{}", err),
            OpenError::Forbidden { alias, reason } => {
                write!(f, "access to view {} denied: {}", alias, reason)
            }
            OpenError::MissingDynamicView { id } => {
                write!(f, "published view points at missing development view {}", id)
            }
        }
    }
}

impl std::error::Error for OpenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OpenError::Resolve(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolveError> for OpenError {
    fn from(err: ResolveError) -> Self {
        OpenError::Resolve(err)
    }
}

/// Failures of builder operations that talk to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The view failed validation; nothing was written.
    Validation(String),

    NotFound { id: String },

    /// The stored screen could not be parsed.
    InvalidConfig(String),

    Store(String),
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::Validation(msg) => write!(f, "{}", msg),
            BuilderError::NotFound { id } => write!(f, "development view not found: {}", id),
            BuilderError::InvalidConfig(msg) => write!(f, "invalid view configuration: {}", msg),
            BuilderError::Store(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for BuilderError {}

impl From<erpview_store::Error> for BuilderError {
    fn from(err: erpview_store::Error) -> Self {
        BuilderError::Store(err.to_string())
    }
}

/// Result of a save: never an error past this boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    /// Storage id of the saved view.
    pub id: Option<String>,
    pub error: Option<String>,
}

impl SaveOutcome {
    pub fn saved(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: Some(id.into()),
            error: None,
        }
    }

    pub fn failed(err: impl fmt::Display) -> Self {
        Self {
            success: false,
            id: None,
            error: Some(err.to_string()),
        }
    }
}
