use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::sync::Mutex;
use wordpop_core::session::Session;
use wordpop_core::surface::PageSurface;
use wordpop_dict::Definitions;
use wordpop_types::{AppEvent, Point};

use crate::state::AppState;

pub mod config_changed;
pub mod definition_ready;
pub mod trigger;

use config_changed::handle_config_changed;
use definition_ready::handle_definition_ready;
use trigger::{handle_key_press, handle_trigger};

/// App's main loop: the single owner of the lookup session. Every piece of
/// mutable lookup state is touched from here only.
pub async fn event_loop<S: PageSurface + 'static>(
    state: Arc<AppState>,
    surface: Arc<Mutex<S>>,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    definitions: Arc<dyn Definitions>,
) -> anyhow::Result<()> {
    let mut session = Session::new();

    tracing::info!("event loop started");
    loop {
        let event = events_rx.recv().await?;
        handle_event(
            &state,
            &surface,
            &events_tx,
            &definitions,
            &mut session,
            event,
        )
        .await?;
    }
}

async fn handle_event<S: PageSurface + 'static>(
    state: &Arc<AppState>,
    surface: &Arc<Mutex<S>>,
    events_tx: &AsyncSender<AppEvent>,
    definitions: &Arc<dyn Definitions>,
    session: &mut Session,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::ConfigChanged => {
            handle_config_changed(state).await?;
        }
        AppEvent::PointerMoved { x, y } => {
            let mut surface = surface.lock().await;
            session.pointer_moved(&mut *surface, Point::new(x, y));
        }
        AppEvent::DoubleClick { x, y } => {
            handle_trigger(surface, events_tx, definitions, session, Point::new(x, y)).await;
        }
        AppEvent::KeyPressed(press) => {
            handle_key_press(state, surface, events_tx, definitions, session, press).await?;
        }
        AppEvent::DefinitionReady {
            generation,
            word,
            outcome,
        } => {
            handle_definition_ready(surface, session, generation, &word, &outcome).await;
        }
    }

    Ok(())
}
