use std::env;

use serde::{Deserialize, Serialize};

fn default_endpoint() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Dictionary endpoint; the lowercased word is appended as a path segment.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl LookupConfig {
    pub fn new() -> Self {
        let endpoint = env::var("LOOKUP_ENDPOINT").unwrap_or_else(|_| default_endpoint());

        Self {
            endpoint,
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}
