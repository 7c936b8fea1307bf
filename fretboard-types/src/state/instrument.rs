//! Fretted instruments and their open-string tunings.

use serde::{Deserialize, Serialize};

use super::music::PitchClass;

/// A fretted instrument. Determines how many strings are active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Instrument {
    #[default]
    Guitar,
    Bass,
}

impl Instrument {
    pub const ALL: [Instrument; 2] = [Instrument::Guitar, Instrument::Bass];

    pub fn name(&self) -> &'static str {
        match self {
            Instrument::Guitar => "Guitar",
            Instrument::Bass => "Bass",
        }
    }

    pub fn string_count(&self) -> usize {
        match self {
            Instrument::Guitar => 6,
            Instrument::Bass => 4,
        }
    }

    pub fn from_name(s: &str) -> Option<Instrument> {
        Self::ALL.iter().copied().find(|i| i.name().eq_ignore_ascii_case(s.trim()))
    }
}

impl std::fmt::Display for Instrument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A named set of open-string pitch classes.
///
/// Index 0 is the lowest string, which the presentation layer draws nearest the
/// top edge of the neck. Instruments with fewer strings use a prefix of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Tuning {
    pub name: &'static str,
    pub notes: &'static [PitchClass],
}

impl Tuning {
    pub const STANDARD: Tuning = Tuning::new(
        "Standard",
        &[
            PitchClass::E,
            PitchClass::A,
            PitchClass::D,
            PitchClass::G,
            PitchClass::B,
            PitchClass::E,
        ],
    );
    pub const DROP_D: Tuning = Tuning::new(
        "Drop D",
        &[
            PitchClass::D,
            PitchClass::A,
            PitchClass::D,
            PitchClass::G,
            PitchClass::B,
            PitchClass::E,
        ],
    );
    pub const HALF_STEP_DOWN: Tuning = Tuning::new(
        "Half Step Down",
        &[
            PitchClass::DS,
            PitchClass::GS,
            PitchClass::CS,
            PitchClass::FS,
            PitchClass::AS,
            PitchClass::DS,
        ],
    );
    pub const OPEN_G: Tuning = Tuning::new(
        "Open G",
        &[
            PitchClass::D,
            PitchClass::G,
            PitchClass::D,
            PitchClass::G,
            PitchClass::B,
            PitchClass::D,
        ],
    );
    pub const DADGAD: Tuning = Tuning::new(
        "DADGAD",
        &[
            PitchClass::D,
            PitchClass::A,
            PitchClass::D,
            PitchClass::G,
            PitchClass::A,
            PitchClass::D,
        ],
    );

    /// Built-in presets, in selector order.
    pub const ALL: [Tuning; 5] = [
        Tuning::STANDARD,
        Tuning::DROP_D,
        Tuning::HALF_STEP_DOWN,
        Tuning::OPEN_G,
        Tuning::DADGAD,
    ];

    pub const fn new(name: &'static str, notes: &'static [PitchClass]) -> Self {
        Self { name, notes }
    }

    pub fn by_name(name: &str) -> Option<Tuning> {
        Self::ALL.iter().copied().find(|t| t.name.eq_ignore_ascii_case(name.trim()))
    }

    /// Open notes of the first `string_count` strings (fewer if the tuning is shorter).
    pub fn open_notes(&self, string_count: usize) -> &'static [PitchClass] {
        &self.notes[..string_count.min(self.notes.len())]
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Tuning::STANDARD
    }
}

impl std::fmt::Display for Tuning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}
