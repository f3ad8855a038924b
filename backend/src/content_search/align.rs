//! Locating matched phrases inside a document's hitbox sequence.
//!
//! Matching is exact and contiguous over normalized words, and the earliest
//! occurrence always wins. Later repeats of the same phrase in one document
//! resolve to that same first occurrence.

use common::search_result::BoundingBox;

use super::hitbox::HitboxEntry;
use super::phrase::PhraseSpan;


/// A phrase located in the hitbox sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseAlignment {
    /// Index into the decoded (filtered) hitbox sequence.
    pub start: usize,
    /// Exclusive end index into the decoded sequence.
    pub end: usize,
    /// Raw input position of the first matched hitbox.
    pub first_position: usize,
    /// Raw input position of the last matched hitbox.
    pub last_position: usize,
    pub bounding_box: BoundingBox,
}

/// Finds the earliest `i` with `hitboxes[i..i + L]` equal to the phrase words.
///
/// Returns `None` for an empty phrase, a phrase longer than the sequence,
/// or a phrase that does not occur.
pub fn align_phrase(phrase: &PhraseSpan, hitboxes: &[HitboxEntry]) -> Option<PhraseAlignment> {
    let len = phrase.len();
    if len == 0 || len > hitboxes.len() {
        return None;
    }

    let start = hitboxes
        .windows(len)
        .position(|window| window.iter().zip(&phrase.words).all(|(entry, word)| entry.word == *word))?;
    let matched = &hitboxes[start..start + len];

    Some(PhraseAlignment {
        start,
        end: start + len,
        first_position: matched[0].position,
        last_position: matched[len - 1].position,
        bounding_box: union_bounding_box(matched)?,
    })
}

/// Smallest box enclosing every entry.
///
/// `None` when there are no entries or the union is too wide to measure.
pub fn union_bounding_box(entries: &[HitboxEntry]) -> Option<BoundingBox> {
    let first = entries.first()?;
    let (mut x1, mut y1, mut x2, mut y2) = (first.x1, first.y1, first.x2, first.y2);
    for entry in &entries[1..] {
        x1 = x1.min(entry.x1);
        y1 = y1.min(entry.y1);
        x2 = x2.max(entry.x2);
        y2 = y2.max(entry.y2);
    }
    Some(BoundingBox::new(x1, y1, x2.checked_sub(x1)?, y2.checked_sub(y1)?))
}
