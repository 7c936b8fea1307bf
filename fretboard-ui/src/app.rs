//! Selector state and the event handlers that feed selections into the trainer.
//!
//! Each selector has one handler taking the trainer and the newly chosen value.
//! Key presses only decide *which* value is chosen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use fretboard_core::action::DispatchResult;
use fretboard_core::state::{Instrument, KeySpec, PitchClass, Tuning};
use fretboard_core::trainer::Trainer;

/// The drop-down-like selectors shown above the fretboard, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Root,
    Key,
    Tuning,
    Instrument,
}

impl Selector {
    pub const ALL: [Selector; 4] = [
        Selector::Root,
        Selector::Key,
        Selector::Tuning,
        Selector::Instrument,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Selector::Root => "Root",
            Selector::Key => "Key",
            Selector::Tuning => "Tuning",
            Selector::Instrument => "Instrument",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

pub fn handle_root_change(trainer: &mut Trainer, root: PitchClass) -> DispatchResult {
    trainer.set_root_note(root)
}

pub fn handle_key_change(trainer: &mut Trainer, spec: KeySpec) -> DispatchResult {
    trainer.set_key_spec(spec)
}

pub fn handle_tuning_change(trainer: &mut Trainer, tuning: Tuning) -> DispatchResult {
    trainer.set_tuning(tuning)
}

pub fn handle_instrument_change(trainer: &mut Trainer, instrument: Instrument) -> DispatchResult {
    trainer.set_instrument(instrument)
}

/// Next (or previous) entry after `current` in a fixed enumeration, wrapping.
fn cycle<T: Copy + PartialEq>(items: &[T], current: T, forward: bool) -> T {
    let len = items.len();
    let pos = items.iter().position(|&i| i == current).unwrap_or(0);
    let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
    items[next]
}

pub struct App {
    pub trainer: Trainer,
    pub focus: Selector,
    pub status: Option<(String, StatusLevel)>,
    pub quit: bool,
}

impl App {
    pub fn new(trainer: Trainer) -> Self {
        Self {
            trainer,
            focus: Selector::Root,
            status: None,
            quit: false,
        }
    }

    /// Current display value of a selector.
    pub fn selection(&self, selector: Selector) -> &'static str {
        let state = self.trainer.state();
        match selector {
            Selector::Root => state.root.name(),
            Selector::Key => state.key_spec.name,
            Selector::Tuning => state.tuning.name,
            Selector::Instrument => state.instrument.name(),
        }
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), StatusLevel::Error));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Tab | KeyCode::Down => self.focus = cycle(&Selector::ALL, self.focus, true),
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = cycle(&Selector::ALL, self.focus, false)
            }
            KeyCode::Right | KeyCode::Char('l') => self.step_selection(true),
            KeyCode::Left | KeyCode::Char('h') => self.step_selection(false),
            _ => {}
        }
    }

    /// Move the focused selector to its next/previous value.
    fn step_selection(&mut self, forward: bool) {
        let state = self.trainer.state().clone();
        let result = match self.focus {
            Selector::Root => {
                let root = cycle(&PitchClass::ALL, state.root, forward);
                handle_root_change(&mut self.trainer, root)
            }
            Selector::Key => {
                let spec = cycle(&KeySpec::ALL, state.key_spec, forward);
                handle_key_change(&mut self.trainer, spec)
            }
            Selector::Tuning => {
                let tuning = cycle(&Tuning::ALL, state.tuning, forward);
                handle_tuning_change(&mut self.trainer, tuning)
            }
            Selector::Instrument => {
                let instrument = cycle(&Instrument::ALL, state.instrument, forward);
                handle_instrument_change(&mut self.trainer, instrument)
            }
        };
        if let Some(message) = result.status {
            self.status = Some((message, StatusLevel::Info));
        }
    }
}
