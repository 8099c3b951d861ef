use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{KanbanError, KanbanResult};

pub const DEFAULT_BOARD_NAME_PREFIX: &str = "New Board";

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV_VAR: &str = "KANBAN_CONFIG";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub board_name_prefix: Option<String>,
    #[serde(default)]
    pub default_statuses: Option<Vec<String>>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the config from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e)
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> KanbanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> KanbanResult<Self> {
        toml::from_str(content).map_err(|e| KanbanError::Config(e.to_string()))
    }

    pub fn effective_board_name_prefix(&self) -> &str {
        self.board_name_prefix
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_BOARD_NAME_PREFIX)
    }

    /// Status names configured for newly created boards, with blank entries
    /// skipped. `None` means the built-in columns should be used.
    pub fn configured_default_statuses(&self) -> Option<Vec<String>> {
        let configured: Vec<String> = self
            .default_statuses
            .iter()
            .flatten()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if configured.is_empty() {
            None
        } else {
            Some(configured)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_board_name_prefix(), "New Board");
        assert_eq!(config.configured_default_statuses(), None);
    }

    #[test]
    fn test_parse_overrides() {
        let config = AppConfig::parse(
            r#"
board_name_prefix = "Sprint"
default_statuses = ["Backlog", "  ", "Shipped"]
"#,
        )
        .unwrap();

        assert_eq!(config.effective_board_name_prefix(), "Sprint");
        assert_eq!(
            config.configured_default_statuses(),
            Some(vec!["Backlog".to_string(), "Shipped".to_string()])
        );
    }

    #[test]
    fn test_blank_prefix_falls_back() {
        let config = AppConfig {
            board_name_prefix: Some("   ".to_string()),
            default_statuses: Some(vec![]),
        };
        assert_eq!(config.effective_board_name_prefix(), "New Board");
        assert_eq!(config.configured_default_statuses(), None);
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        let err = AppConfig::parse("default_statuses = 3").unwrap_err();
        assert!(matches!(err, KanbanError::Config(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "board_name_prefix = \"Team\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_board_name_prefix(), "Team");
    }
}
