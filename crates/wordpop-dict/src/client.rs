use std::time::Duration;

use wordpop_types::DictEntry;

use crate::{Definitions, DictError};

/// Client for the free dictionary REST API. One GET per lookup, no retries;
/// a failed request is terminal for that lookup cycle. Callers hand in an
/// already-normalized term (see [`crate::preprocess`]); the client appends
/// it to the endpoint as a path segment verbatim.
#[derive(Clone)]
pub struct DictionaryClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl DictionaryClient {
    pub fn new(endpoint: String, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            timeout,
        }
    }
}

#[async_trait::async_trait]
impl Definitions for DictionaryClient {
    async fn define(&self, word: &str) -> Result<Vec<DictEntry>, DictError> {
        let response = self
            .client
            .get(format!("{}/{}", self.endpoint, word))
            .timeout(self.timeout)
            .send()
            .await?;

        // The API answers unknown words with a 404 and a JSON apology;
        // that is a well-formed empty result, not a failure.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        if !response.status().is_success() {
            return Err(DictError::Api(format!("HTTP {}", response.status())));
        }

        let entries: Vec<DictEntry> = response
            .json()
            .await
            .map_err(|e| DictError::Api(format!("failed to decode response: {e}")))?;

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use wordpop_types::DictEntry;

    // Trimmed capture of a real response for "hello".
    const HELLO_FIXTURE: &str = r#"[
      {
        "word": "hello",
        "phonetics": [
          { "audio": "" },
          { "text": "/həˈləʊ/", "audio": "https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3" }
        ],
        "meanings": [
          {
            "partOfSpeech": "noun",
            "definitions": [
              { "definition": "\"Hello!\" or an equivalent greeting.", "synonyms": [], "antonyms": [] }
            ],
            "synonyms": ["greeting"],
            "antonyms": []
          },
          {
            "partOfSpeech": "interjection",
            "definitions": [
              { "definition": "A greeting used when answering the telephone.", "example": "Hello? How may I help you?" }
            ],
            "synonyms": [],
            "antonyms": ["bye"]
          }
        ]
      }
    ]"#;

    #[test]
    fn decodes_real_api_shape() {
        let entries: Vec<DictEntry> = serde_json::from_str(HELLO_FIXTURE).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word, "hello");
        assert_eq!(entry.meanings.len(), 2);
        assert_eq!(entry.meanings[0].part_of_speech, "noun");
        assert_eq!(entry.meanings[0].synonyms, ["greeting"]);
        assert_eq!(entry.meanings[1].antonyms, ["bye"]);
        assert_eq!(
            entry.meanings[1].definitions[0].example.as_deref(),
            Some("Hello? How may I help you?")
        );
    }

    #[test]
    fn playable_phonetic_needs_text_and_audio() {
        let entries: Vec<DictEntry> = serde_json::from_str(HELLO_FIXTURE).unwrap();
        let playable: Vec<_> = entries[0]
            .phonetics
            .iter()
            .filter_map(|p| p.playable())
            .collect();
        assert_eq!(playable.len(), 1);
        assert_eq!(playable[0].0, "/həˈləʊ/");
    }

    #[test]
    fn empty_array_decodes_to_no_entries() {
        let entries: Vec<DictEntry> = serde_json::from_str("[]").unwrap();
        assert!(entries.is_empty());
    }
}
