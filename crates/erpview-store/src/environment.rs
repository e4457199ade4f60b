use serde::{Deserialize, Serialize};
use std::fmt;

/// Deployment environment; selects which physical collections are used.
/// Deserializes leniently through [`Environment::from_tag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Lenient parse: anything unrecognized maps to development.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            _ => Environment::Development,
        }
    }

    /// Suffix appended to logical collection names.
    pub fn code(&self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::Staging => "stg",
            Environment::Production => "prod",
        }
    }

    pub fn collection(&self, logical: &str) -> String {
        format!("{}_{}", logical, self.code())
    }
}

impl From<String> for Environment {
    fn from(tag: String) -> Self {
        Environment::from_tag(&tag)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}
