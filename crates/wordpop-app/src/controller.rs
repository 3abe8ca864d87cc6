use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordpop_core::surface::PageSurface;
use wordpop_dict::Definitions;
use wordpop_types::AppEvent;

use crate::events::event_loop;
use crate::io::watcher_io;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    /// Host surface, fetch tasks and the settings watcher all feed this.
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(256), // pointer-move burst capacity
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Input handle for the embedding host; pointer, click and key events
    /// go in here.
    pub fn event_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.events.0.clone()
    }

    pub fn spawn_tasks<S: PageSurface + 'static>(
        &self,
        surface: Arc<Mutex<S>>,
        definitions: Arc<dyn Definitions>,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            surface,
            self.channels.events.1.clone(),
            self.channels.events.0.clone(),
            definitions,
        ));

        // Settings-file watcher
        tasks.spawn(watcher_io(
            self.state.clone(),
            self.cancel_token.child_token(),
            self.channels.events.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
