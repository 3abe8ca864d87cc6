use std::env;

use serde::{Deserialize, Serialize};

use self::lookup::LookupConfig;
use self::shortcut::ShortcutConfig;
use self::ui::UiConfig;

pub mod lookup;
pub mod shortcut;
pub mod ui;

pub use shortcut::Modifier;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub lookup: LookupConfig,
    pub ui: UiConfig,
    pub shortcut: ShortcutConfig,

    /// Poll interval of the settings-file watcher
    pub watch_interval_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let watch_interval_ms = env::var("WATCH_INTERVAL_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500); // half a second default

        Config {
            lookup: LookupConfig::new(),
            ui: UiConfig::default(),
            shortcut: ShortcutConfig::default(),

            watch_interval_ms,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
