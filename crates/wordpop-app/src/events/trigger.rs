use std::sync::Arc;

use kanal::AsyncSender;
use tokio::sync::Mutex;
use wordpop_core::session::Session;
use wordpop_core::surface::PageSurface;
use wordpop_core::trigger::{Platform, shortcut_matches};
use wordpop_dict::preprocess::{DefaultPreprocessor, Preprocessor};
use wordpop_dict::Definitions;
use wordpop_page::render;
use wordpop_types::{AppEvent, FetchOutcome, KeyPress, Point};

use crate::state::AppState;

/// Keyboard gesture: match against the configured shortcut and, on a hit,
/// look up at the last known pointer position.
pub async fn handle_key_press<S: PageSurface + 'static>(
    state: &Arc<AppState>,
    surface: &Arc<Mutex<S>>,
    events_tx: &AsyncSender<AppEvent>,
    definitions: &Arc<dyn Definitions>,
    session: &mut Session,
    press: KeyPress,
) -> anyhow::Result<()> {
    let shortcut = {
        let config = state.config.read().await;
        config.shortcut.clone()
    };

    if !shortcut_matches(&shortcut, &press, Platform::current()) {
        return Ok(());
    }

    let point = session.pointer();
    handle_trigger(surface, events_tx, definitions, session, point).await;
    Ok(())
}

/// Start a lookup cycle at `point` and spawn the fetch. The session hands
/// back the generation that ties the response to this cycle; the fetch task
/// reports through the event channel so the loop stays single-owner.
pub async fn handle_trigger<S: PageSurface + 'static>(
    surface: &Arc<Mutex<S>>,
    events_tx: &AsyncSender<AppEvent>,
    definitions: &Arc<dyn Definitions>,
    session: &mut Session,
    point: Point,
) {
    let start = {
        let mut surface = surface.lock().await;
        session.begin_lookup(&mut *surface, point, render::LOADING_TEXT)
    };

    let Some(start) = start else {
        tracing::debug!(?point, "nothing lookupable under trigger");
        return;
    };

    tracing::info!(word = %start.word, generation = start.generation, "lookup started");

    let term = DefaultPreprocessor.process(&start.word);
    let definitions = definitions.clone();
    let tx = events_tx.clone();

    tokio::spawn(async move {
        let outcome = match definitions.define(&term).await {
            Ok(entries) => FetchOutcome::Entries(entries),
            Err(e) => {
                tracing::error!("definition fetch for '{term}' failed: {e}");
                FetchOutcome::Failed(e.to_string())
            }
        };

        let event = AppEvent::DefinitionReady {
            generation: start.generation,
            word: start.word,
            outcome,
        };
        if tx.send(event).await.is_err() {
            tracing::warn!("event loop gone before definition arrived");
        }
    });
}
