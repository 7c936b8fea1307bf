//! Query surface for the presentation layer.
//!
//! A `Trainer` is one session: it owns its `TrainerState` and nothing is shared
//! between trainers. Queries compute fret maps from the current state on every
//! call; there is no cache to invalidate.

use crate::action::{DispatchResult, TrainerAction};
use crate::config::Config;
use crate::dispatch::dispatch_action;
use crate::state::{
    FretMap, FretboardError, Instrument, KeySpec, PitchClass, TrainerState, Tuning,
};
use fretboard_types::Dispatcher;

/// One trainer session.
#[derive(Debug, Clone)]
pub struct Trainer {
    state: TrainerState,
    fret_count: u8,
}

impl Trainer {
    pub fn new(state: TrainerState, fret_count: u8) -> Self {
        Self { state, fret_count }
    }

    /// Start a session from configured defaults.
    pub fn from_config(config: &Config) -> Self {
        let trainer = Self::new(config.defaults(), config.fret_count());
        log::info!(
            "new session: {} on {} ({}), {} frets",
            trainer.state.key(),
            trainer.state.instrument,
            trainer.state.tuning,
            trainer.fret_count
        );
        trainer
    }

    pub fn state(&self) -> &TrainerState {
        &self.state
    }

    /// Frets shown per string by `fretboard()`.
    pub fn fret_count(&self) -> u8 {
        self.fret_count
    }

    pub fn get_string_count(&self, instrument: Instrument) -> usize {
        instrument.string_count()
    }

    /// In-key frets `0..=fret_count` on one string, using the current selections.
    pub fn get_fret_notes(
        &self,
        string_index: i32,
        fret_count: u8,
    ) -> Result<FretMap, FretboardError> {
        self.state.fret_notes(string_index, fret_count)
    }

    /// In-key frets for every active string at the session's fret count.
    pub fn fretboard(&self) -> Vec<FretMap> {
        self.state.fretboard(self.fret_count)
    }

    pub fn set_instrument(&mut self, instrument: Instrument) -> DispatchResult {
        self.dispatch(&TrainerAction::SetInstrument(instrument))
    }

    pub fn set_root_note(&mut self, root: PitchClass) -> DispatchResult {
        self.dispatch(&TrainerAction::SetRootNote(root))
    }

    pub fn set_tuning(&mut self, tuning: Tuning) -> DispatchResult {
        self.dispatch(&TrainerAction::SetTuning(tuning))
    }

    pub fn set_key_spec(&mut self, spec: KeySpec) -> DispatchResult {
        self.dispatch(&TrainerAction::SetKeySpec(spec))
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(TrainerState::default(), crate::config::DEFAULT_FRET_COUNT)
    }
}

impl Dispatcher for Trainer {
    fn dispatch(&mut self, action: &TrainerAction) -> DispatchResult {
        dispatch_action(action, &mut self.state)
    }
}

/// Tuning preset names, in selector order.
pub fn list_available_tunings() -> Vec<&'static str> {
    Tuning::ALL.iter().map(|t| t.name).collect()
}

/// Key spec names, in selector order.
pub fn list_available_key_specs() -> Vec<&'static str> {
    KeySpec::ALL.iter().map(|k| k.name).collect()
}

/// The twelve pitch class names, starting at A.
pub fn list_pitch_class_names() -> Vec<&'static str> {
    PitchClass::ALL.iter().map(|p| p.name()).collect()
}

pub fn list_instruments() -> Vec<&'static str> {
    Instrument::ALL.iter().map(|i| i.name()).collect()
}
