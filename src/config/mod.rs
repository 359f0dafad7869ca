//! Configuration module for MAYA Search
//!
//! Handles loading settings from YAML files and environment variables.
//! Settings are read once at startup and handed to each component by value;
//! there is no global settings instance.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Load settings from the first file found, or use defaults.
///
/// `MAYA_SETTINGS_PATH` is checked first, then the usual locations.
/// Environment overrides are applied on top in every case.
pub fn load() -> Result<Settings> {
    if let Ok(path) = std::env::var("MAYA_SETTINGS_PATH") {
        let path = PathBuf::from(path);
        if path.exists() {
            return load_from(&path);
        }
    }

    for path in default_paths() {
        if path.exists() {
            return load_from(&path);
        }
    }

    info!("No settings file found, using defaults");
    let mut settings = Settings::default();
    settings.merge_env();
    Ok(settings)
}

fn load_from(path: &Path) -> Result<Settings> {
    info!("Loading settings from: {}", path.display());
    let mut settings = Settings::from_file(path)?;
    settings.merge_env();
    Ok(settings)
}

fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("maya-search/settings.yml"));
    }
    paths
}
