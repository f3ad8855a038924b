//! Word normalization shared by the hitbox decoder and the snippet tokenizer.

/// Strips leading and trailing punctuation and lowercases.
///
/// Returns an empty string for tokens made only of punctuation.
pub fn normalize_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}
