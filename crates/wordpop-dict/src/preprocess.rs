use unicode_normalization::UnicodeNormalization;

/// Normalization applied to a resolved word before it becomes a URL path
/// segment: trim, NFKC-fold, lowercase.
pub trait Preprocessor {
    fn process(&self, word: &str) -> String {
        let word = word.trim();

        if word.is_empty() {
            return String::new();
        }

        let folded: String = word.nfkc().collect();
        folded.to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(DefaultPreprocessor.process(" Hello "), "hello");
    }

    #[test]
    fn folds_fullwidth_forms() {
        // NFKC maps fullwidth latin to ASCII.
        assert_eq!(DefaultPreprocessor.process("Ｗｏｒｄ"), "word");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(DefaultPreprocessor.process("   "), "");
    }
}
