//! Keys: a root pitch class plus an interval-step pattern.

use serde::Serialize;

use super::music::PitchClass;

/// A named interval-step pattern (semitone deltas between successive notes).
///
/// Adding a key is one more `KeySpec` record; nothing else needs to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct KeySpec {
    pub name: &'static str,
    pub steps: &'static [u8],
}

impl KeySpec {
    pub const MAJOR: KeySpec = KeySpec::new("Major", &[2, 2, 1, 2, 2, 2]);
    pub const MINOR: KeySpec = KeySpec::new("Minor", &[2, 1, 2, 2, 1, 2]);
    pub const CHROMATIC: KeySpec =
        KeySpec::new("Chromatic", &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1]);

    /// Built-in registry, in selector order.
    pub const ALL: [KeySpec; 3] = [KeySpec::MAJOR, KeySpec::MINOR, KeySpec::CHROMATIC];

    pub const fn new(name: &'static str, steps: &'static [u8]) -> Self {
        Self { name, steps }
    }

    pub fn by_name(name: &str) -> Option<KeySpec> {
        let name = name.trim();
        Self::ALL.iter().copied().find(|k| k.name.eq_ignore_ascii_case(name))
    }

    /// Number of notes a key built from this spec holds (root included).
    pub fn note_count(&self) -> usize {
        self.steps.len() + 1
    }
}

impl Default for KeySpec {
    fn default() -> Self {
        KeySpec::MAJOR
    }
}

impl std::fmt::Display for KeySpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Notes of the key rooted at `root`: the root, then the root transposed by each
/// cumulative step offset.
pub fn derive_notes(root: PitchClass, steps: &[u8]) -> Vec<PitchClass> {
    let mut notes = Vec::with_capacity(steps.len() + 1);
    notes.push(root);
    let mut offset = 0i32;
    for &step in steps {
        offset += i32::from(step);
        notes.push(root.transpose(offset));
    }
    notes
}

/// A concrete key: root + spec, with its derived notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Key {
    root: PitchClass,
    spec: KeySpec,
    notes: Vec<PitchClass>,
    /// Bit `i` set when pitch class `i` is in the key
    #[serde(skip)]
    mask: u16,
}

impl Key {
    pub fn new(root: PitchClass, spec: KeySpec) -> Self {
        let notes = derive_notes(root, spec.steps);
        let mask = notes.iter().fold(0u16, |m, p| m | (1 << p.index()));
        Self {
            root,
            spec,
            notes,
            mask,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn spec(&self) -> KeySpec {
        self.spec
    }

    /// Derived notes, root first.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.mask & (1 << pitch.index()) != 0
    }

    pub fn is_root(&self, pitch: PitchClass) -> bool {
        pitch == self.root
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.spec)
    }
}
