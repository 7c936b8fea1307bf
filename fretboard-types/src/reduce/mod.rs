//! Pure state-mutation reducers for trainer sessions.
//!
//! These functions are the single source of truth for action → state mutations.
//! They do not log, cache fret maps, or notify anyone; callers decide what to redraw
//! from the returned flag.

use crate::{TrainerAction, TrainerState};

/// Apply an action to the state.
/// Returns true if the state changed, false if the new value equals the current one.
pub fn reduce_action(action: &TrainerAction, state: &mut TrainerState) -> bool {
    let before = state.clone();
    match *action {
        TrainerAction::SetInstrument(instrument) => state.set_instrument(instrument),
        TrainerAction::SetRootNote(root) => state.set_root_note(root),
        TrainerAction::SetKeySpec(spec) => state.set_key_spec(spec),
        TrainerAction::SetTuning(tuning) => state.set_tuning(tuning),
    }
    *state != before
}
