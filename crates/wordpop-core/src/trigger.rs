use wordpop_config::shortcut::{Modifier, ShortcutConfig};
use wordpop_types::KeyPress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Whether a key press satisfies the configured shortcut: the character key
/// (case-insensitive) plus every required modifier. Extra held modifiers do
/// not disqualify. On macOS the command key counts for a `ctrl` requirement
/// alongside the physical control key.
pub fn shortcut_matches(shortcut: &ShortcutConfig, press: &KeyPress, platform: Platform) -> bool {
    if !press.key.eq_ignore_ascii_case(&shortcut.key) {
        return false;
    }

    shortcut.modifiers.iter().all(|modifier| match modifier {
        Modifier::Ctrl => press.ctrl || (platform == Platform::MacOs && press.meta),
        Modifier::Alt => press.alt,
        Modifier::Shift => press.shift,
        Modifier::Meta => press.meta,
    })
}
