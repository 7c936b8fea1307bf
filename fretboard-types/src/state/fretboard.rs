//! Fret-position queries: which frets of a string land on notes of a key.

use std::collections::BTreeMap;

use serde::Serialize;

use super::instrument::Tuning;
use super::key::Key;
use super::music::PitchClass;

/// A marker position: the pitch at a fret and whether it is the key's root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretNote {
    pub pitch: PitchClass,
    pub is_root: bool,
}

/// In-key frets of one string, keyed by fret number (0 = open string).
/// A missing fret means no marker is drawn there.
pub type FretMap = BTreeMap<u8, FretNote>;

/// Error from a fretboard query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FretboardError {
    /// The string index is outside `[0, string_count)`.
    StringOutOfRange { index: i32, string_count: usize },
}

impl std::fmt::Display for FretboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FretboardError::StringOutOfRange { index, string_count } => write!(
                f,
                "string index {} is out of range [0 - {})",
                index, string_count
            ),
        }
    }
}

impl std::error::Error for FretboardError {}

/// In-key frets `0..=fret_count` on string `string_index`.
///
/// Only the first `string_count` strings of `tuning` are active; any index outside
/// that range (negative included) is an error.
pub fn fret_notes(
    tuning: &Tuning,
    string_count: usize,
    string_index: i32,
    fret_count: u8,
    key: &Key,
) -> Result<FretMap, FretboardError> {
    let open_notes = tuning.open_notes(string_count);
    let open_note = usize::try_from(string_index)
        .ok()
        .and_then(|i| open_notes.get(i))
        .copied()
        .ok_or(FretboardError::StringOutOfRange {
            index: string_index,
            string_count: open_notes.len(),
        })?;

    Ok(string_fret_notes(open_note, fret_count, key))
}

/// In-key frets for every active string, lowest string first.
pub fn fretboard(tuning: &Tuning, string_count: usize, fret_count: u8, key: &Key) -> Vec<FretMap> {
    tuning
        .open_notes(string_count)
        .iter()
        .map(|&open| string_fret_notes(open, fret_count, key))
        .collect()
}

fn string_fret_notes(open_note: PitchClass, fret_count: u8, key: &Key) -> FretMap {
    (0..=fret_count)
        .filter_map(|fret| {
            let pitch = open_note.transpose(i32::from(fret));
            key.contains(pitch).then(|| {
                (
                    fret,
                    FretNote {
                        pitch,
                        is_root: key.is_root(pitch),
                    },
                )
            })
        })
        .collect()
}
