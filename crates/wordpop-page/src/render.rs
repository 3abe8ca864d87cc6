use std::fmt::Write;

use wordpop_types::{DictEntry, FetchOutcome};

pub const LOADING_TEXT: &str = "Loading definition...";
pub const NOT_FOUND_TEXT: &str = "Definition not found.";
pub const FETCH_ERROR_TEXT: &str = "Error fetching definition.";

/// Popup content for a completed fetch. Only the first entry of a
/// multi-entry response is rendered.
pub fn render_outcome(word: &str, outcome: &FetchOutcome) -> String {
    match outcome {
        FetchOutcome::Entries(entries) => match entries.first() {
            Some(entry) => render_definition(word, entry),
            None => NOT_FOUND_TEXT.to_string(),
        },
        FetchOutcome::Failed(_) => FETCH_ERROR_TEXT.to_string(),
    }
}

/// HTML for one dictionary entry: the word as heading, a numbered
/// part-of-speech block per meaning with its ordered definitions (plus
/// optional usage example), trailing synonym/antonym lists when non-empty,
/// and a pronunciation line with audio control when the entry carries one.
pub fn render_definition(word: &str, entry: &DictEntry) -> String {
    let mut html = format!("<h2>{}</h2>", esc(word));

    for (index, meaning) in entry.meanings.iter().enumerate() {
        let _ = write!(
            html,
            "<h3>{}. {}</h3>",
            index + 1,
            esc(&meaning.part_of_speech)
        );

        html.push_str("<ul>");
        for def in &meaning.definitions {
            let _ = write!(html, "<li><strong>Definition:</strong> {}", esc(&def.definition));
            if let Some(example) = &def.example {
                let _ = write!(html, "<br><em>Example:</em> \"{}\"", esc(example));
            }
            html.push_str("</li>");
        }
        html.push_str("</ul>");

        if !meaning.synonyms.is_empty() {
            let _ = write!(
                html,
                "<p><strong>Synonyms:</strong> {}</p>",
                esc(&meaning.synonyms.join(", "))
            );
        }
        if !meaning.antonyms.is_empty() {
            let _ = write!(
                html,
                "<p><strong>Antonyms:</strong> {}</p>",
                esc(&meaning.antonyms.join(", "))
            );
        }
    }

    if let Some((text, audio)) = entry.phonetics.iter().find_map(|p| p.playable()) {
        let _ = write!(
            html,
            "<p><strong>Pronunciation:</strong> {} \
             <audio controls src=\"{}\">Your browser does not support the audio element.</audio></p>",
            esc(text),
            esc(audio)
        );
    }

    html
}

/// Minimal HTML escape for text interpolated from the API.
fn esc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
