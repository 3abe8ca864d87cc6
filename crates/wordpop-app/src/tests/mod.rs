use std::path::PathBuf;
use std::sync::Arc;
use std::sync::Mutex as StdMutex;
use std::time::Duration;

use async_trait::async_trait;
use kanal::AsyncSender;
use tokio::sync::Mutex;
use tokio::task::JoinSet;
use tokio::time::{sleep, timeout};
use wordpop_config::Config;
use wordpop_dict::{Definitions, DictError};
use wordpop_page::MemoryPage;
use wordpop_types::{AppEvent, Definition, DictEntry, Meaning, Point, Rgb, Size};

use crate::controller::AppController;
use crate::state::AppState;


/// Scripted definition provider, recording every word it gets asked about.
pub struct FakeDefinitions {
    pub calls: StdMutex<Vec<String>>,
    mode: Mode,
}

pub enum Mode {
    Entries(Vec<DictEntry>),
    Empty,
    Fail,
    /// Never answers; for superseded-fetch scenarios.
    Pending,
}

impl FakeDefinitions {
    pub fn new(mode: Mode) -> Arc<Self> {
        Arc::new(Self {
            calls: StdMutex::new(Vec::new()),
            mode,
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Definitions for FakeDefinitions {
    async fn define(&self, word: &str) -> Result<Vec<DictEntry>, DictError> {
        self.calls.lock().unwrap().push(word.to_string());
        match &self.mode {
            Mode::Entries(entries) => Ok(entries.clone()),
            Mode::Empty => Ok(Vec::new()),
            Mode::Fail => Err(DictError::Api("HTTP 500 Internal Server Error".to_string())),
            Mode::Pending => std::future::pending::<Result<Vec<DictEntry>, DictError>>().await,
        }
    }
}

pub fn sample_entry(word: &str) -> DictEntry {
    DictEntry {
        word: word.to_string(),
        phonetics: vec![],
        meanings: vec![
            Meaning {
                part_of_speech: "noun".to_string(),
                definitions: vec![Definition {
                    definition: format!("the {word} itself"),
                    example: None,
                }],
                synonyms: vec![],
                antonyms: vec![],
            },
            Meaning {
                part_of_speech: "verb".to_string(),
                definitions: vec![Definition {
                    definition: format!("to {word}"),
                    example: Some(format!("please {word} here")),
                }],
                synonyms: vec![],
                antonyms: vec![],
            },
        ],
    }
}

pub fn blank_page() -> MemoryPage {
    MemoryPage::new(Size::new(1280.0, 720.0), Rgb::new(255, 255, 255))
}

pub fn scratch_settings_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wordpop-test-{}-{name}.json", std::process::id()))
}

pub struct Harness {
    pub state: Arc<AppState>,
    pub controller: AppController,
    pub surface: Arc<Mutex<MemoryPage>>,
    pub events: AsyncSender<AppEvent>,
    pub tasks: JoinSet<anyhow::Result<()>>,
}

pub fn spawn_runtime(
    page: MemoryPage,
    definitions: Arc<dyn Definitions>,
    settings_path: PathBuf,
) -> Harness {
    let state = Arc::new(AppState::new(Config::new(), settings_path));
    let controller = AppController::new(state.clone());
    let surface = Arc::new(Mutex::new(page));
    let tasks = controller.spawn_tasks(surface.clone(), definitions);
    let events = controller.event_sender();

    Harness {
        state,
        controller,
        surface,
        events,
        tasks,
    }
}

/// Poll the surface until `cond` holds, failing the test after two seconds.
pub async fn wait_for(surface: &Arc<Mutex<MemoryPage>>, cond: impl Fn(&MemoryPage) -> bool) {
    let result = timeout(Duration::from_secs(2), async {
        loop {
            {
                let page = surface.lock().await;
                if cond(&page) {
                    return;
                }
            }
            sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    result.expect("condition not reached in time");
}

pub async fn double_click(events: &AsyncSender<AppEvent>, at: Point) {
    events
        .send(AppEvent::DoubleClick { x: at.x, y: at.y })
        .await
        .expect("send failed");
}
