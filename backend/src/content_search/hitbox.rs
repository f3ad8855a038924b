//! Decoding of the per-word OCR hitbox field.

use tracing::debug;

use super::normalize::normalize_word;


/// One OCR-detected word with its pixel box, corners inclusive of `x1 <= x2`, `y1 <= y2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitboxEntry {
    pub word: String,
    pub x1: i64,
    pub y1: i64,
    pub x2: i64,
    pub y2: i64,
    /// Index of the record in the raw field, before malformed records were dropped.
    pub position: usize,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum HitboxRecordError {
    #[error("missing '|' separator")]
    MissingSeparator,
    #[error("expected 4 coordinates, found {0}")]
    WrongCoordinateCount(usize),
    #[error("coordinate is not an integer: {0:?}")]
    BadCoordinate(String),
    #[error("inverted box ({x1} {y1} {x2} {y2})")]
    InvertedBox { x1: i64, y1: i64, x2: i64, y2: i64 },
    #[error("box size overflows ({x1} {y1} {x2} {y2})")]
    OversizedBox { x1: i64, y1: i64, x2: i64, y2: i64 },
}

/// Parses one `word|x1 y1 x2 y2` record.
pub fn parse_hitbox_record(raw: &str, position: usize) -> Result<HitboxEntry, HitboxRecordError> {
    let (word, coords) = raw.split_once('|').ok_or(HitboxRecordError::MissingSeparator)?;

    let parts = coords.split_whitespace().collect::<Vec<_>>();
    if parts.len() != 4 {
        return Err(HitboxRecordError::WrongCoordinateCount(parts.len()));
    }
    let mut values = [0_i64; 4];
    for (slot, part) in values.iter_mut().zip(parts.iter()) {
        *slot = part.parse().map_err(|_| HitboxRecordError::BadCoordinate(part.to_string()))?;
    }
    let [x1, y1, x2, y2] = values;
    if x2 < x1 || y2 < y1 {
        return Err(HitboxRecordError::InvertedBox { x1, y1, x2, y2 });
    }
    if x2.checked_sub(x1).is_none() || y2.checked_sub(y1).is_none() {
        return Err(HitboxRecordError::OversizedBox { x1, y1, x2, y2 });
    }

    // punctuation-only words stay in the sequence with an empty word
    Ok(HitboxEntry { word: normalize_word(word), x1, y1, x2, y2, position })
}

/// Decodes a document's hitbox field, silently dropping malformed records.
///
/// Surviving entries keep their reading order and their raw input position.
pub fn decode_hitboxes<S: AsRef<str>>(raw_records: &[S]) -> Vec<HitboxEntry> {
    raw_records
        .iter()
        .enumerate()
        .filter_map(|(position, raw)| {
            let record: &str = raw.as_ref();
            match parse_hitbox_record(record, position) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(position, record, error = %e, "dropping hitbox record");
                    None
                }
            }
        })
        .collect()
}
