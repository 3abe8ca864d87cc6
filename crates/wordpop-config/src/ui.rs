use serde::{Deserialize, Serialize};

fn default_popup_max_width() -> f64 {
    500.0
}

fn default_popup_max_height() -> f64 {
    300.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_popup_max_width")]
    pub popup_max_width: f64,
    #[serde(default = "default_popup_max_height")]
    pub popup_max_height: f64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            popup_max_width: default_popup_max_width(),
            popup_max_height: default_popup_max_height(),
        }
    }
}
