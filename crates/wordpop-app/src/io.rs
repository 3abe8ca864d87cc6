use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use wordpop_types::AppEvent;

use crate::settings;
use crate::state::AppState;

/// Watcher for the settings record: polls the file's mtime and emits
/// `ConfigChanged` so the event loop adopts edits without a restart.
pub async fn watcher_io(
    state: Arc<AppState>,
    cancel: CancellationToken,
    events_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let interval_ms = {
        let config = state.config.read().await;
        config.watch_interval_ms
    };

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms.max(1)));
    let mut last_modified = settings::modified_at(&state.settings_path);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("settings watcher stopped");
                return Ok(());
            }
            _ = interval.tick() => {
                let modified = settings::modified_at(&state.settings_path);
                if modified != last_modified {
                    last_modified = modified;
                    tracing::info!("settings file changed");
                    events_tx.send(AppEvent::ConfigChanged).await?;
                }
            }
        }
    }
}
