use wordpop_types::DictEntry;

pub mod client;
pub mod preprocess;

pub use client::DictionaryClient;

/// Definition provider interface
#[async_trait::async_trait]
pub trait Definitions: Send + Sync {
    /// Look a word up. `Ok` with an empty vec is a well-formed "no entry"
    /// answer, distinct from a failed request.
    async fn define(&self, word: &str) -> Result<Vec<DictEntry>, DictError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}
