//! # fretboard-core
//!
//! Session layer for the fretboard trainer. Provides configuration, action
//! dispatch, and the query surface a presentation layer calls into, independent
//! of any UI framework.
//!
//! ## Quick Start
//!
//! ```rust
//! use fretboard_core::config::Config;
//! use fretboard_core::state::{KeySpec, PitchClass};
//! use fretboard_core::trainer::Trainer;
//!
//! // 1. Create a session with defaults from config
//! let config = Config::load_from(None);
//! let mut trainer = Trainer::from_config(&config);
//!
//! // 2. Change selections; a `redraw` result means earlier fret maps are stale
//! let result = trainer.set_root_note(PitchClass::A);
//! assert!(result.redraw);
//! trainer.set_key_spec(KeySpec::MINOR);
//!
//! // 3. Query in-key frets for a string
//! let frets = trainer.get_fret_notes(0, 12).unwrap();
//! assert!(frets[&5u8].is_root);
//! ```
//!
//! ## Module Overview
//!
//! - [`state`] — Pitch classes, keys, instruments, tunings, fret queries, `TrainerState`
//! - [`action`] — `TrainerAction` and `DispatchResult`
//! - [`dispatch`] — `dispatch_action()`, the single entry point for state mutation
//! - [`trainer`] — `Trainer` session and the `list_*` enumerations
//! - [`config`] — TOML configuration loading (embedded defaults + user override)

pub mod action;
pub mod config;
pub mod dispatch;
pub mod state;
pub mod trainer;

pub use fretboard_types::Dispatcher;
