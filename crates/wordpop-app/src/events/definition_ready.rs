use std::sync::Arc;

use tokio::sync::Mutex;
use wordpop_core::session::Session;
use wordpop_core::surface::PageSurface;
use wordpop_page::render;
use wordpop_types::FetchOutcome;

/// Project a completed fetch into the popup. The session drops responses
/// whose generation no longer matches the active lookup, so a late answer
/// for a superseded word never lands in an unrelated popup.
pub async fn handle_definition_ready<S: PageSurface + 'static>(
    surface: &Arc<Mutex<S>>,
    session: &mut Session,
    generation: u64,
    word: &str,
    outcome: &FetchOutcome,
) {
    let content = render::render_outcome(word, outcome);

    let mut surface = surface.lock().await;
    if !session.render_result(&mut *surface, generation, &content) {
        tracing::debug!(word, generation, "dropping superseded definition");
    }
}
