use serde::{Deserialize, Serialize};

/// Caller identity as far as view access is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Principal {
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Principal {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            permissions: Vec::new(),
        }
    }

    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions.extend(permissions.into_iter().map(Into::into));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum AccessDecision {
    Allow,
    Deny { reason: String },
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Allow)
    }
}

/// The single role/permission check used wherever a view is opened.
///
/// An empty `required_roles` admits every role; every entry of
/// `required_permissions` must be held.
pub fn authorize(
    role: &str,
    required_roles: &[String],
    permissions_held: &[String],
    required_permissions: &[String],
) -> AccessDecision {
    if !required_roles.is_empty() && !required_roles.iter().any(|r| r == role) {
        return AccessDecision::Deny {
            reason: format!(
                "role '{}' is not one of [{}]",
                role,
                required_roles.join(", ")
            ),
        };
    }

    let missing: Vec<&str> = required_permissions
        .iter()
        .filter(|p| !permissions_held.contains(*p))
        .map(String::as_str)
        .collect();

    if !missing.is_empty() {
        return AccessDecision::Deny {
            reason: format!("missing permissions: {}", missing.join(", ")),
        };
    }

    AccessDecision::Allow
}
