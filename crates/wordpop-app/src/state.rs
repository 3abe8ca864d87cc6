use std::path::PathBuf;

use tokio::sync::RwLock;
use wordpop_config::Config;

pub struct AppState {
    pub config: RwLock<Config>,
    /// Where the settings record lives; the watcher polls it and the
    /// reload handler reads it back.
    pub settings_path: PathBuf,
}

impl AppState {
    pub fn new(config: Config, settings_path: PathBuf) -> Self {
        Self {
            config: RwLock::new(config),
            settings_path,
        }
    }
}
