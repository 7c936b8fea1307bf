//! Pitch space: the twelve equal-tempered pitch classes.

use serde::{Deserialize, Serialize};

/// Number of pitch classes in an octave.
pub const PITCH_CLASS_COUNT: u8 = 12;

/// One of the twelve pitch classes, octave-independent.
///
/// Numbered from A: `0 = A`, `1 = A#`, ... `11 = G#`. Values are always in `0..12`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PitchClass(u8);

impl PitchClass {
    pub const A: PitchClass = PitchClass(0);
    pub const AS: PitchClass = PitchClass(1);
    pub const B: PitchClass = PitchClass(2);
    pub const C: PitchClass = PitchClass(3);
    pub const CS: PitchClass = PitchClass(4);
    pub const D: PitchClass = PitchClass(5);
    pub const DS: PitchClass = PitchClass(6);
    pub const E: PitchClass = PitchClass(7);
    pub const F: PitchClass = PitchClass(8);
    pub const FS: PitchClass = PitchClass(9);
    pub const G: PitchClass = PitchClass(10);
    pub const GS: PitchClass = PitchClass(11);

    pub const ALL: [PitchClass; 12] = [
        PitchClass::A,
        PitchClass::AS,
        PitchClass::B,
        PitchClass::C,
        PitchClass::CS,
        PitchClass::D,
        PitchClass::DS,
        PitchClass::E,
        PitchClass::F,
        PitchClass::FS,
        PitchClass::G,
        PitchClass::GS,
    ];

    /// Create a pitch class from its index. Returns None if `index >= 12`.
    pub const fn new(index: u8) -> Option<Self> {
        if index < PITCH_CLASS_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Extract the raw index (0 = A).
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Move up (or down, for negative values) by `semitones`, wrapping at the octave.
    pub fn transpose(self, semitones: i32) -> Self {
        // rem_euclid keeps the offset in 0..12, so the sum cannot overflow
        let offset = semitones.rem_euclid(i32::from(PITCH_CLASS_COUNT)) as u8;
        Self((self.0 + offset) % PITCH_CLASS_COUNT)
    }

    /// Ascending semitone distance from `self` up to `other`, in `0..12`.
    pub fn interval_to(self, other: PitchClass) -> u8 {
        (other.0 + PITCH_CLASS_COUNT - self.0) % PITCH_CLASS_COUNT
    }

    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "A",
            1 => "A#",
            2 => "B",
            3 => "C",
            4 => "C#",
            5 => "D",
            6 => "D#",
            7 => "E",
            8 => "F",
            9 => "F#",
            10 => "G",
            _ => "G#",
        }
    }

    /// Parse a display name. Accepts `"C#"` and the ASCII alias `"Cs"`; the letter is
    /// case-insensitive.
    pub fn from_name(s: &str) -> Option<Self> {
        let mut chars = s.trim().chars();
        let letter = chars.next()?.to_ascii_uppercase();
        let sharp = match chars.as_str() {
            "" => false,
            "#" | "s" => true,
            _ => return None,
        };
        let natural = match letter {
            'A' => PitchClass::A,
            'B' => PitchClass::B,
            'C' => PitchClass::C,
            'D' => PitchClass::D,
            'E' => PitchClass::E,
            'F' => PitchClass::F,
            'G' => PitchClass::G,
            _ => return None,
        };
        if !sharp {
            return Some(natural);
        }
        // No sharp spelling exists for B or E in the canonical name set
        match natural {
            PitchClass::B | PitchClass::E => None,
            n => Some(n.transpose(1)),
        }
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for integer values outside `0..12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPitchClass(pub u8);

impl std::fmt::Display for InvalidPitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pitch class {} is out of range [0 - {}]", self.0, PITCH_CLASS_COUNT - 1)
    }
}

impl std::error::Error for InvalidPitchClass {}

impl TryFrom<u8> for PitchClass {
    type Error = InvalidPitchClass;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PitchClass::new(value).ok_or(InvalidPitchClass(value))
    }
}

impl From<PitchClass> for u8 {
    fn from(p: PitchClass) -> u8 {
        p.0
    }
}
