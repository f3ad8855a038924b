use super::tokenizer::SnippetToken;


/// A maximal run of consecutive matched words; never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseSpan {
    pub words: Vec<String>,
}

impl PhraseSpan {
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Space-joined normalized words.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Groups consecutive matched tokens into phrases, in order of appearance.
pub fn extract_phrase_spans(tokens: &[SnippetToken]) -> Vec<PhraseSpan> {
    let mut spans = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for token in tokens {
        if token.matched {
            current.push(token.word.clone());
        } else if !current.is_empty() {
            spans.push(PhraseSpan { words: std::mem::take(&mut current) });
        }
    }
    if !current.is_empty() {
        spans.push(PhraseSpan { words: current });
    }

    spans
}
