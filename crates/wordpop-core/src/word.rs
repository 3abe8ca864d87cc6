use std::ops::Range;

/// Token boundary class: alphanumeric or underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Expand from a byte offset to the maximal contiguous run of word
/// characters containing it. `offset` must lie on a char boundary (caret
/// offsets always do); the caret may sit before, inside, or after the run.
/// Returns an empty range at `offset` when no word character is adjacent.
pub fn word_span(text: &str, offset: usize) -> Range<usize> {
    let offset = offset.min(text.len());

    let mut start = offset;
    for (i, c) in text[..offset].char_indices().rev() {
        if !is_word_char(c) {
            break;
        }
        start = i;
    }

    let mut end = offset;
    for (i, c) in text[offset..].char_indices() {
        if !is_word_char(c) {
            break;
        }
        end = offset + i + c.len_utf8();
    }

    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_to_maximal_run() {
        let text = "the quick_brown fox";
        // Anywhere inside "quick_brown" resolves the whole token.
        for offset in 4..=15 {
            let span = word_span(text, offset);
            assert_eq!(&text[span], "quick_brown", "offset {offset}");
        }
    }

    #[test]
    fn caret_at_word_edges_still_resolves() {
        let text = "one two";
        assert_eq!(&text[word_span(text, 0)], "one");
        assert_eq!(&text[word_span(text, 3)], "one");
        assert_eq!(&text[word_span(text, 4)], "two");
        assert_eq!(&text[word_span(text, 7)], "two");
    }

    #[test]
    fn no_adjacent_word_chars_yields_empty_span() {
        let text = "a -- b";
        let span = word_span(text, 3);
        assert!(span.is_empty());
        assert_eq!(span, 3..3);
    }

    #[test]
    fn digits_and_underscore_are_word_chars() {
        let text = "x len_2 y";
        assert_eq!(&text[word_span(text, 5)], "len_2");
    }

    #[test]
    fn non_ascii_words_expand_on_char_boundaries() {
        let text = "voilà déjà";
        let span = word_span(text, 1);
        assert_eq!(&text[span], "voilà");
        let span = word_span(text, text.len());
        assert_eq!(&text[span], "déjà");
    }

    #[test]
    fn offset_past_end_is_clamped() {
        let text = "end";
        assert_eq!(&text[word_span(text, 100)], "end");
    }
}
