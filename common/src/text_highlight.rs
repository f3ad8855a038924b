//! Utilities for highlighting text spans in search results.

use serde::{Deserialize, Serialize};


/// A run of snippet text that is either entirely inside or entirely outside
/// the highlighter's emphasis markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightTextSpan {
    pub text: String,
    pub is_highlighted: bool,
}

impl HighlightTextSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_highlighted: false }
    }

    pub fn highlighted(text: impl Into<String>) -> Self {
        Self { text: text.into(), is_highlighted: true }
    }
}
