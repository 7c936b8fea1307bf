//! Session state and the music-theory model it is built from.

pub use fretboard_types::state::*;
pub use fretboard_types::reduce::reduce_action;
