use anyhow::{Context, Result, anyhow};
use erpview_engine::{Locale, Viewport};
use erpview_store::Environment;
use erpview_types::StaticAliases;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.toml";
pub const DATABASE_FILE: &str = "erpview.db";

/// Resolve the data directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. ERPVIEW_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.erpview (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("ERPVIEW_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("erpview"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".erpview"));
    }

    Err(anyhow!(
        "Could not determine data directory: no HOME directory or XDG data directory found"
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Selects the `_dev`, `_stg` or `_prod` collections.
    pub environment: Environment,
    pub locale: Locale,
    /// Where the not-found screen links back to.
    pub home_alias: String,
    /// Roles allowed to open views that are still in development.
    pub development_roles: Vec<String>,
    /// Compiled screens beyond the built-in list.
    pub extra_static_aliases: Vec<String>,
    pub viewport: Viewport,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: Environment::Development,
            locale: Locale::PtBr,
            home_alias: "home".to_string(),
            development_roles: vec!["admin".to_string()],
            extra_static_aliases: Vec::new(),
            viewport: Viewport::Wide,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn static_aliases(&self) -> StaticAliases {
        StaticAliases::builtin().with_extra(self.extra_static_aliases.iter().cloned())
    }
}
