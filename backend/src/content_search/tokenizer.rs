//! Turns a highlighted snippet into a flat stream of normalized words.

use crate::db_utils::decompose_spans::decompose_text_into_spans;

use super::normalize::normalize_word;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetToken {
    pub word: String,
    pub matched: bool,
}

impl SnippetToken {
    pub fn new(word: impl Into<String>, matched: bool) -> Self {
        Self { word: word.into(), matched }
    }
}

/// Tokenizes a snippet in document order.
///
/// Words are split on whitespace across span boundaries, so a word only
/// partly wrapped in emphasis (`<em>fox</em>es`) is one matched token.
/// Punctuation-only words become empty tokens, mirroring the hitbox decoder.
pub fn tokenize_snippet(snippet: &str) -> Vec<SnippetToken> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    let mut matched = false;

    let mut flush = |word: &mut String, matched: &mut bool| {
        if !word.is_empty() {
            tokens.push(SnippetToken { word: normalize_word(word), matched: *matched });
        }
        word.clear();
        *matched = false;
    };

    for span in decompose_text_into_spans(snippet) {
        for c in span.text.chars() {
            if c.is_whitespace() {
                flush(&mut word, &mut matched);
            } else {
                word.push(c);
                matched |= span.is_highlighted;
            }
        }
    }
    flush(&mut word, &mut matched);

    tokens
}
