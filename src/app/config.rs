use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::parser::DEFAULT_API_URL;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Endpoint returning the JSON array of hotels
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// UI language ("es", "en"); `null` detects it from the system locale.
    /// Card and status texts keep their Spanish wording only with "es".
    #[serde(default = "default_language")]
    pub language: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_language() -> Option<String> {
    Some("es".to_string())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            language: default_language(),
        }
    }
}

lazy_static! {
    pub static ref APP_CONFIG: RwLock<AppConfig> = RwLock::new(AppConfig::default());
}

fn config_file_path() -> PathBuf {
    // Allow override for tests and packaging via env var
    if let Ok(p) = std::env::var("HOTEL_GRID_CONFIG_PATH") {
        return PathBuf::from(p);
    }
    PathBuf::from("hotel_grid.json")
}

impl AppConfig {
    pub fn load_from_file(path: &Path) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let cfg: AppConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(cfg)
    }
}

/// Read-only: the file is never written back.
pub fn load_config_from_disk() {
    let path = config_file_path();
    match AppConfig::load_from_file(&path) {
        Ok(cfg) => {
            if let Ok(mut current) = APP_CONFIG.write() {
                *current = cfg;
            }
            log::info!("Loaded config from {}", path.to_string_lossy());
        }
        Err(e) => {
            // Keep defaults if missing/unreadable
            log::info!(
                "Using default config; cannot load {}: {}",
                path.to_string_lossy(),
                e
            );
        }
    }
}

/// Snapshot of the current configuration.
pub fn current() -> AppConfig {
    APP_CONFIG
        .read()
        .map(|cfg| cfg.clone())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Temp file name carries the PID so parallel runs do not collide.
    fn temp_config_path(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("{}_{}.json", name, std::process::id()));
        p
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let path = temp_config_path("hotel_grid_partial");
        std::fs::write(&path, r#"{"api_url": "http://localhost:9000/hotels"}"#).unwrap();

        let cfg = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg.api_url, "http://localhost:9000/hotels");
        assert_eq!(cfg.language.as_deref(), Some("es"));

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn null_language_means_autodetect() {
        let path = temp_config_path("hotel_grid_auto_lang");
        std::fs::write(&path, r#"{"language": null}"#).unwrap();

        let cfg = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg.language, None);
        assert_eq!(cfg.api_url, DEFAULT_API_URL);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn invalid_json_is_invalid_data() {
        let path = temp_config_path("hotel_grid_broken");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load_from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = AppConfig::load_from_file(&temp_config_path("hotel_grid_absent")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
