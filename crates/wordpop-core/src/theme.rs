use wordpop_types::Rgb;

/// Channel-sum threshold below which a background counts as dark.
/// Half of the 765 maximum, rounded toward dark.
pub const DARK_THEME_THRESHOLD: u16 = 382;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

pub fn classify_theme(background: Rgb) -> Theme {
    if background.channel_sum() < DARK_THEME_THRESHOLD {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Visual treatment of the highlight wrapper, applied by the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightStyle {
    pub background: &'static str,
    pub color: &'static str,
    pub outline: &'static str,
    pub border_radius: &'static str,
}

/// Popup chrome colors. Scrollbar colors are part of the palette so the
/// popup stays visually consistent with the highlight on both themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupStyle {
    pub background: &'static str,
    pub color: &'static str,
    pub border: &'static str,
    pub scrollbar_thumb: &'static str,
    pub scrollbar_track: &'static str,
}

pub fn highlight_style(theme: Theme) -> HighlightStyle {
    match theme {
        Theme::Dark => HighlightStyle {
            // Semi-transparent warm tint, readable against dark pages.
            background: "rgba(80, 80, 0, 0.5)",
            color: "#fff",
            outline: "1px solid rgba(255, 255, 0, 0.5)",
            border_radius: "2px",
        },
        Theme::Light => HighlightStyle {
            background: "rgba(255, 255, 0, 0.3)",
            color: "inherit",
            outline: "1px solid rgba(0, 0, 0, 0.2)",
            border_radius: "2px",
        },
    }
}

pub fn popup_style(theme: Theme) -> PopupStyle {
    match theme {
        Theme::Dark => PopupStyle {
            background: "rgba(40, 40, 40, 0.95)",
            color: "#e0e0e0",
            border: "1px solid #555",
            scrollbar_thumb: "#666",
            scrollbar_track: "#333",
        },
        Theme::Light => PopupStyle {
            background: "rgba(255, 255, 255, 0.95)",
            color: "#333",
            border: "1px solid #ccc",
            scrollbar_thumb: "#ccc",
            scrollbar_track: "#f1f1f1",
        },
    }
}
