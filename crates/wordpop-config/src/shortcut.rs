use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Ctrl,
    Alt,
    Shift,
    Meta,
}

/// The trigger shortcut: one character key plus a set of required modifiers.
///
/// Persisted records have drifted across releases; older shapes carried a
/// single `modifier` string or boolean `ctrl`/`alt`/`shift` flags. All of
/// them deserialize into this canonical shape and get rewritten canonically
/// on the next save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutConfig {
    pub key: String,
    pub modifiers: BTreeSet<Modifier>,
}

impl Default for ShortcutConfig {
    fn default() -> Self {
        Self {
            key: "q".to_string(),
            modifiers: BTreeSet::from([Modifier::Ctrl]),
        }
    }
}

impl ShortcutConfig {
    pub fn new(key: &str, modifiers: impl IntoIterator<Item = Modifier>) -> Self {
        Self {
            key: key.to_lowercase(),
            modifiers: modifiers.into_iter().collect(),
        }
    }
}

/// Union of every persisted shape, oldest last. Order matters: `Flags`
/// ignores unknown fields and would otherwise swallow the other shapes.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredShortcut {
    Canonical {
        key: String,
        modifiers: BTreeSet<Modifier>,
    },
    Single {
        key: String,
        modifier: Modifier,
    },
    Flags {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
    },
}

impl From<StoredShortcut> for ShortcutConfig {
    fn from(stored: StoredShortcut) -> Self {
        match stored {
            StoredShortcut::Canonical { key, modifiers } => Self {
                key: key.to_lowercase(),
                modifiers,
            },
            StoredShortcut::Single { key, modifier } => Self {
                key: key.to_lowercase(),
                modifiers: BTreeSet::from([modifier]),
            },
            StoredShortcut::Flags {
                key,
                ctrl,
                alt,
                shift,
                meta,
            } => {
                let mut modifiers = BTreeSet::new();
                if ctrl {
                    modifiers.insert(Modifier::Ctrl);
                }
                if alt {
                    modifiers.insert(Modifier::Alt);
                }
                if shift {
                    modifiers.insert(Modifier::Shift);
                }
                if meta {
                    modifiers.insert(Modifier::Meta);
                }
                Self {
                    key: key.to_lowercase(),
                    modifiers,
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for ShortcutConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        StoredShortcut::deserialize(deserializer).map(Into::into)
    }
}
