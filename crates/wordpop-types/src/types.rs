use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub enum AppEvent {
    ConfigChanged,
    PointerMoved {
        x: f64,
        y: f64,
    },
    DoubleClick {
        x: f64,
        y: f64,
    },
    KeyPressed(KeyPress),
    DefinitionReady {
        generation: u64,
        word: String,
        outcome: FetchOutcome,
    },
}

/// One key-down as reported by the host surface: the character key plus
/// the physical modifier state at the time of the press.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn character(key: &str) -> Self {
        Self {
            key: key.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub enum FetchOutcome {
    /// Well-formed response; may be empty, which renders as not-found.
    Entries(Vec<DictEntry>),
    /// Network or decode failure, carried as the display string of the error.
    Failed(String),
}

/// One entry of the remote dictionary response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    pub word: String,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
}

/// The API reports `audio` as an empty string when no recording exists,
/// so both fields need a non-empty check before use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

impl Phonetic {
    pub fn playable(&self) -> Option<(&str, &str)> {
        match (self.text.as_deref(), self.audio.as_deref()) {
            (Some(text), Some(audio)) if !text.is_empty() && !audio.is_empty() => {
                Some((text, audio))
            }
            _ => None,
        }
    }
}
