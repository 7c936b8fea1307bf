//! Action types for the dispatch system.
//!
//! Re-exported from fretboard-types so callers only need this crate.

pub use fretboard_types::{DispatchResult, TrainerAction};
