use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use wordpop_config::Config;

/// Default location of the settings record.
pub fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join("wordpop")
        .join("settings.json")
}

/// Load the settings record, falling back to built-in defaults when the
/// file is missing. A present-but-unreadable record is also a fallback,
/// with a warning; lookups should keep working on a corrupt settings file.
pub fn load(path: &Path) -> Config {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("settings file {} is unreadable ({e}), using defaults", path.display());
                Config::new()
            }
        },
        Err(_) => Config::new(),
    }
}

pub fn save(path: &Path, config: &Config) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    Ok(())
}

pub fn modified_at(path: &Path) -> Option<SystemTime> {
    fs::metadata(path).ok()?.modified().ok()
}
