#[cfg(not(target_arch = "wasm32"))]
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
#[cfg(not(target_arch = "wasm32"))]
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::catalog::Catalog;
use crate::scroll::DEFAULT_DEBOUNCE_MS;

fn default_scroll_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// JSON catalog replacing the built-in dataset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Where navigation state is kept (native only)
    #[serde(default)]
    pub state_path: Option<PathBuf>,
    #[serde(default = "default_scroll_debounce_ms")]
    pub scroll_debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            state_path: None,
            scroll_debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn config_path() -> Option<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "catalog", "catalog-browser")?;
        Some(proj_dirs.config_dir().join("config.json"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = fs::read_to_string(config_path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(AppConfig::default())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, anyhow::Error> {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(json)) = storage.get_item("app_config") {
                    return serde_json::from_str(&json).map_err(|e| anyhow::anyhow!(e));
                }
            }
        }
        Ok(AppConfig::default())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) -> Result<(), anyhow::Error> {
        if let Some(config_path) = Self::config_path() {
            if let Some(config_dir) = config_path.parent() {
                fs::create_dir_all(config_dir)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(config_path, content)?;
        }
        Ok(())
    }

    /// The configured catalog file, or the built-in dataset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_catalog(&self) -> Result<Arc<Catalog>, anyhow::Error> {
        match &self.catalog_path {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .map_err(|e| anyhow::anyhow!("Cannot read catalog {}: {}", path.display(), e))?;
                let catalog = Catalog::from_json(&json)?;
                tracing::info!("Loaded catalog from {}", path.display());
                Ok(Arc::new(catalog))
            }
            None => Ok(Catalog::builtin()),
        }
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load_catalog(&self) -> Result<Arc<Catalog>, anyhow::Error> {
        Ok(Catalog::builtin())
    }

    /// State file location: configured path, else the platform data dir
    #[cfg(not(target_arch = "wasm32"))]
    pub fn state_file(&self) -> Option<PathBuf> {
        self.state_path
            .clone()
            .or_else(crate::storage::FileStore::default_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scroll_debounce_ms, 200);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn catalog_path_overrides_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, r#"{"movies": [{"title": "Only", "link": "x"}]}"#).unwrap();

        let config = AppConfig {
            catalog_path: Some(path),
            ..AppConfig::default()
        };
        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.items(crate::catalog::ContentType::Movie).len(), 1);
        assert!(catalog.items(crate::catalog::ContentType::Series).is_empty());
    }
}
