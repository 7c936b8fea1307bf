pub mod fretboard;
pub mod instrument;
pub mod key;
pub mod music;

pub use fretboard::{fret_notes, fretboard, FretMap, FretNote, FretboardError};
pub use instrument::{Instrument, Tuning};
pub use key::{derive_notes, Key, KeySpec};
pub use music::{InvalidPitchClass, PitchClass, PITCH_CLASS_COUNT};

use serde::Serialize;

/// Current selections of one trainer session.
///
/// Every field is replaced wholesale; any combination of values is valid. The state
/// holds no derived data, so fret maps computed before a change must be recomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainerState {
    pub instrument: Instrument,
    pub root: PitchClass,
    pub key_spec: KeySpec,
    pub tuning: Tuning,
}

impl TrainerState {
    pub fn new() -> Self {
        Self {
            instrument: Instrument::Guitar,
            root: PitchClass::C,
            key_spec: KeySpec::MAJOR,
            tuning: Tuning::STANDARD,
        }
    }

    /// The key selected by `root` and `key_spec`.
    pub fn key(&self) -> Key {
        Key::new(self.root, self.key_spec)
    }

    /// Strings consulted for fret queries.
    pub fn string_count(&self) -> usize {
        self.instrument.string_count()
    }

    /// In-key frets `0..=fret_count` on one string of the current instrument.
    pub fn fret_notes(&self, string_index: i32, fret_count: u8) -> Result<FretMap, FretboardError> {
        fret_notes(
            &self.tuning,
            self.string_count(),
            string_index,
            fret_count,
            &self.key(),
        )
    }

    /// In-key frets for every active string.
    pub fn fretboard(&self, fret_count: u8) -> Vec<FretMap> {
        fretboard(&self.tuning, self.string_count(), fret_count, &self.key())
    }

    pub fn set_instrument(&mut self, instrument: Instrument) {
        self.instrument = instrument;
    }

    pub fn set_root_note(&mut self, root: PitchClass) {
        self.root = root;
    }

    pub fn set_key_spec(&mut self, key_spec: KeySpec) {
        self.key_spec = key_spec;
    }

    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
    }
}

impl Default for TrainerState {
    fn default() -> Self {
        Self::new()
    }
}
