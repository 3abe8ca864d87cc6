use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, timeout};
use wordpop_dict::DictionaryClient;
use wordpop_page::{MemoryPage, render};
use wordpop_types::{AppEvent, Point, Rgb, Size};

use crate::controller::AppController;
use crate::settings;
use crate::state::AppState;

const SAMPLE_TEXT: &str = "The tide rises and the tide falls";

/// One scripted end-to-end lookup: double-click "tide" on a sample
/// in-memory page and print what the popup ends up showing.
pub async fn run() -> anyhow::Result<()> {
    let settings_path = settings::default_settings_path();
    let config = settings::load(&settings_path);
    let endpoint = config.lookup.endpoint.clone();
    let fetch_timeout = Duration::from_secs(config.lookup.timeout_seconds);
    let (max_width, max_height) = (config.ui.popup_max_width, config.ui.popup_max_height);

    let state = Arc::new(AppState::new(config, settings_path));
    let controller = AppController::new(state);

    let mut page = MemoryPage::new(Size::new(1280.0, 720.0), Rgb::new(255, 255, 255))
        .with_popup_measure(move |content| {
            // ~7px glyphs, wrapped and scroll-capped at the configured bounds.
            let text_width = content.chars().count() as f64 * 7.0;
            if text_width <= max_width {
                Size::new(text_width.max(40.0), 18.0)
            } else {
                let lines = (text_width / max_width).ceil();
                Size::new(max_width, (lines * 18.0).min(max_height))
            }
        });
    let node = page.add_text(SAMPLE_TEXT, Point::new(100.0, 100.0));
    let surface = Arc::new(Mutex::new(page));

    let client = DictionaryClient::new(endpoint, fetch_timeout);
    let tasks = controller.spawn_tasks(surface.clone(), Arc::new(client));

    let target = {
        let page = surface.lock().await;
        page.char_point(node, 5) // inside the first "tide"
    };
    controller
        .event_sender()
        .send(AppEvent::DoubleClick {
            x: target.x,
            y: target.y,
        })
        .await?;

    let content = timeout(Duration::from_secs(30), async {
        loop {
            {
                let page = surface.lock().await;
                if let Some(popup) = page.only_popup()
                    && let Some(content) = page.popup_content(popup)
                    && content != render::LOADING_TEXT
                {
                    break content.to_string();
                }
            }
            sleep(Duration::from_millis(100)).await;
        }
    })
    .await
    .map_err(|_| anyhow::anyhow!("lookup did not complete in time"))?;

    println!("{content}");

    controller.shutdown();
    drop(tasks);
    Ok(())
}
