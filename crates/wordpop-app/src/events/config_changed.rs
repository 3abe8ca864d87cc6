use std::sync::Arc;

use crate::settings;
use crate::state::AppState;

/// Re-read the settings record so the next key press sees the new
/// shortcut. No restart, no listener re-attachment.
pub async fn handle_config_changed(state: &Arc<AppState>) -> anyhow::Result<()> {
    let config = settings::load(&state.settings_path);
    let shortcut = config.shortcut.clone();
    *state.config.write().await = config;
    tracing::info!(?shortcut, "configuration reloaded");
    Ok(())
}
