use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MEEPLE_PATH environment variable (with tilde expansion)
/// 3. XDG data directory
/// 4. ~/.meeple (fallback for systems without XDG)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: MEEPLE_PATH environment variable
    if let Ok(env_path) = std::env::var("MEEPLE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG data directory
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("meeple"));
    }

    // Priority 4: Fallback to ~/.meeple (last resort for systems without XDG)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".meeple"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or XDG data directory found"
            .to_string(),
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

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Root of the read-only XML API
    pub api_root: String,
    /// Root of the site itself, used for authenticated writes
    pub site_root: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_root: meeple_client::DEFAULT_API_ROOT.to_string(),
            site_root: meeple_client::DEFAULT_SITE_ROOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Repeat picks of the same query before the interactive pick is
    /// skipped entirely.
    pub auto_select_threshold: u32,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            auto_select_threshold: 3,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub cache: CacheConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.service.api_root, meeple_client::DEFAULT_API_ROOT);
        assert_eq!(config.cache.auto_select_threshold, 3);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.service.api_root = "http://localhost:8080/xmlapi2".to_string();
        config.cache.auto_select_threshold = 5;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.service.api_root, "http://localhost:8080/xmlapi2");
        assert_eq!(loaded.cache.auto_select_threshold, 5);

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.cache.auto_select_threshold, 3);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "[cache]\nauto_select_threshold = 7\n")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.cache.auto_select_threshold, 7);
        assert_eq!(config.service.api_root, meeple_client::DEFAULT_API_ROOT);

        Ok(())
    }
}
