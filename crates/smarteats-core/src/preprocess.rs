use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default dish name preprocessor, applied before keyword matching
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC), folds full-width letters to ASCII
        text = text.nfkc().collect();

        // Line breaks become spaces so words on either side stay separate
        text = text.replace(['\n', '\r'], " ").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
