//! Query-surface tests: fret maps under selection changes, listings, and config.

use std::io::Write;

use fretboard_core::config::Config;
use fretboard_core::state::{
    derive_notes, FretboardError, Instrument, Key, KeySpec, PitchClass, TrainerState, Tuning,
};
use fretboard_core::trainer::{
    list_available_key_specs, list_available_tunings, list_instruments, list_pitch_class_names,
    Trainer,
};

fn names(pitches: &[PitchClass]) -> Vec<&'static str> {
    pitches.iter().map(|p| p.name()).collect()
}

// --- Scenarios ---

#[test]
fn test_low_e_string_in_c_major() {
    let trainer = Trainer::default();
    let frets = trainer.get_fret_notes(0, 12).expect("string 0 is valid");

    let expected: [(u8, PitchClass); 8] = [
        (0, PitchClass::E),
        (1, PitchClass::F),
        (3, PitchClass::G),
        (5, PitchClass::A),
        (7, PitchClass::B),
        (8, PitchClass::C),
        (10, PitchClass::D),
        (12, PitchClass::E),
    ];
    assert_eq!(frets.len(), expected.len());
    for (fret, pitch) in expected {
        let note = frets[&fret];
        assert_eq!(note.pitch, pitch, "fret {}", fret);
        assert_eq!(note.is_root, pitch == PitchClass::C, "fret {}", fret);
    }
}

#[test]
fn test_c_minor_notes() {
    let key = Key::new(PitchClass::C, KeySpec::MINOR);
    assert_eq!(names(key.notes()), ["C", "D", "D#", "F", "G", "G#", "A#"]);
}

#[test]
fn test_bass_uses_first_four_strings() {
    let mut trainer = Trainer::default();
    trainer.set_instrument(Instrument::Bass);

    assert_eq!(trainer.get_string_count(trainer.state().instrument), 4);
    assert_eq!(trainer.fretboard().len(), 4);
    for string in 0..4 {
        let frets = trainer.get_fret_notes(string, 12).unwrap();
        let open = Tuning::STANDARD.notes[string as usize];
        if let Some(note) = frets.get(&0u8) {
            assert_eq!(note.pitch, open);
        }
    }
    assert_eq!(
        trainer.get_fret_notes(4, 12),
        Err(FretboardError::StringOutOfRange { index: 4, string_count: 4 })
    );
}

#[test]
fn test_chromatic_marks_every_fret() {
    let mut trainer = Trainer::default();
    trainer.set_key_spec(KeySpec::CHROMATIC);
    for root in PitchClass::ALL {
        trainer.set_root_note(root);
        for string in 0..6 {
            let frets = trainer.get_fret_notes(string, 17).unwrap();
            assert_eq!(frets.len(), 18);
            assert!(frets.keys().copied().eq(0..=17u8));
        }
    }
}

// --- Errors ---

#[test]
fn test_out_of_range_indices() {
    let trainer = Trainer::default();
    let count = trainer.get_string_count(Instrument::Guitar) as i32;
    for index in [count, -1, i32::MIN, i32::MAX] {
        match trainer.get_fret_notes(index, 12) {
            Err(FretboardError::StringOutOfRange { index: i, string_count }) => {
                assert_eq!(i, index);
                assert_eq!(string_count, 6);
            }
            other => panic!("expected OutOfRange for {}, got {:?}", index, other),
        }
    }
}

// --- Properties ---

#[test]
fn test_fret_maps_match_membership_exhaustively() {
    let mut trainer = Trainer::default();
    for tuning in Tuning::ALL {
        trainer.set_tuning(tuning);
        for spec in KeySpec::ALL {
            trainer.set_key_spec(spec);
            for root in PitchClass::ALL {
                trainer.set_root_note(root);
                let key = trainer.state().key();
                let notes = derive_notes(root, spec.steps);
                for (string, &open) in tuning.notes.iter().enumerate() {
                    let frets = trainer.get_fret_notes(string as i32, 24).unwrap();
                    let expected = (0..=24u8)
                        .filter(|&f| notes.contains(&open.transpose(i32::from(f))))
                        .count();
                    assert_eq!(frets.len(), expected);
                    assert!(frets.values().all(|n| key.contains(n.pitch)));
                }
            }
        }
    }
}

#[test]
fn test_setters_idempotent() {
    let mut once = Trainer::default();
    once.set_root_note(PitchClass::B);
    once.set_key_spec(KeySpec::MINOR);

    let mut twice = Trainer::default();
    for _ in 0..2 {
        twice.set_root_note(PitchClass::B);
        twice.set_key_spec(KeySpec::MINOR);
    }

    assert_eq!(once.state(), twice.state());
    for string in 0..6 {
        assert_eq!(
            once.get_fret_notes(string, 14).unwrap(),
            twice.get_fret_notes(string, 14).unwrap()
        );
    }
}

#[test]
fn test_sessions_are_independent() {
    let mut a = Trainer::default();
    let b = Trainer::default();
    a.set_root_note(PitchClass::FS);
    assert_eq!(b.state().root, PitchClass::C);
    assert_ne!(a.fretboard(), b.fretboard());
}

#[test]
fn test_changes_reflected_immediately() {
    let mut trainer = Trainer::default();
    let before = trainer.get_fret_notes(2, 12).unwrap();
    let result = trainer.set_root_note(PitchClass::D);
    assert!(result.redraw);
    let after = trainer.get_fret_notes(2, 12).unwrap();
    assert_ne!(before, after);
    // Open D string, D major: open string is the root
    assert!(after[&0u8].is_root);
}

// --- Listings ---

#[test]
fn test_listings_follow_registry_order() {
    assert_eq!(
        list_pitch_class_names(),
        ["A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#"]
    );
    assert_eq!(list_available_key_specs(), ["Major", "Minor", "Chromatic"]);
    assert_eq!(list_instruments(), ["Guitar", "Bass"]);
    assert_eq!(
        list_available_tunings(),
        ["Standard", "Drop D", "Half Step Down", "Open G", "DADGAD"]
    );
}

// --- Config ---

#[test]
fn test_user_config_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[defaults]\ninstrument = \"bass\"\nroot = \"F#\"\nfret_count = 20"
    )
    .unwrap();

    let config = Config::load_from(Some(file.path()));
    let state = config.defaults();
    assert_eq!(state.instrument, Instrument::Bass);
    assert_eq!(state.root, PitchClass::FS);
    assert_eq!(state.key_spec, KeySpec::MAJOR);
    assert_eq!(state.tuning, Tuning::STANDARD);
    assert_eq!(config.fret_count(), 20);

    let trainer = Trainer::from_config(&config);
    assert_eq!(trainer.fretboard().len(), 4);
    assert!(trainer.fretboard().iter().all(|m| m.keys().all(|&f| f <= 20)));
}

#[test]
fn test_oversized_fret_count_keeps_other_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[defaults]\ninstrument = \"Bass\"\nroot = \"G\"\nfret_count = 300"
    )
    .unwrap();

    let config = Config::load_from(Some(file.path()));
    let state = config.defaults();
    assert_eq!(state.instrument, Instrument::Bass);
    assert_eq!(state.root, PitchClass::G);
    assert_eq!(config.fret_count(), 24);
}

#[test]
fn test_negative_fret_count_clamps_to_one() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults]\nkey = \"Minor\"\nfret_count = -1").unwrap();

    let config = Config::load_from(Some(file.path()));
    assert_eq!(config.defaults().key_spec, KeySpec::MINOR);
    assert_eq!(config.fret_count(), 1);
}

#[test]
fn test_malformed_user_config_ignored() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[defaults\nroot = ").unwrap();

    let config = Config::load_from(Some(file.path()));
    assert_eq!(config.defaults(), TrainerState::default());
    assert_eq!(config.fret_count(), 14);
}

#[test]
fn test_unknown_names_fall_back() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[defaults]\nkey = \"Lydian\"\ntuning = \"Minor Third\"\nroot = \"D\""
    )
    .unwrap();

    let state = Config::load_from(Some(file.path())).defaults();
    assert_eq!(state.key_spec, KeySpec::MAJOR);
    assert_eq!(state.tuning, Tuning::STANDARD);
    assert_eq!(state.root, PitchClass::D);
}

#[test]
fn test_missing_user_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_from(Some(&dir.path().join("absent.toml")));
    assert_eq!(config.defaults(), TrainerState::default());
}
