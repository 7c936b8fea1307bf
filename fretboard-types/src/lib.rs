//! # fretboard-types
//!
//! Music-theory model for the fretboard trainer: pitch classes, keys, instruments,
//! tunings, and fret-position queries, plus the session state and its reducers.
//!
//! Everything here is pure data and logic. No I/O, no logging, no global state.

pub mod action;
mod dispatch;
pub mod reduce;
pub mod state;

pub use action::*;
pub use dispatch::Dispatcher;

// Re-export all state types at crate root for convenience
pub use state::*;
