use crate::action::{DispatchResult, TrainerAction};
use crate::state::{reduce_action, TrainerState};

/// Dispatch an action. Returns a DispatchResult telling the presentation layer
/// whether its fret maps are stale.
///
/// Dispatch operates purely on the given state; it holds nothing between calls.
pub fn dispatch_action(action: &TrainerAction, state: &mut TrainerState) -> DispatchResult {
    if reduce_action(action, state) {
        log::debug!(target: "dispatch", "{}", action.describe());
        DispatchResult::with_redraw(format!("{} ({})", state.key(), state.tuning))
    } else {
        log::trace!(target: "dispatch", "no change: {}", action.describe());
        DispatchResult::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Instrument, KeySpec, PitchClass};

    #[test]
    fn change_requests_redraw() {
        let mut state = TrainerState::new();
        let result = dispatch_action(&TrainerAction::SetRootNote(PitchClass::E), &mut state);
        assert!(result.redraw);
        assert_eq!(result.status.as_deref(), Some("E Major (Standard)"));
        assert_eq!(state.root, PitchClass::E);
    }

    #[test]
    fn unchanged_value_is_quiet() {
        let mut state = TrainerState::new();
        let result = dispatch_action(&TrainerAction::SetKeySpec(KeySpec::MAJOR), &mut state);
        assert_eq!(result, DispatchResult::none());
    }

    #[test]
    fn instrument_change_redraws() {
        let mut state = TrainerState::new();
        let result =
            dispatch_action(&TrainerAction::SetInstrument(Instrument::Bass), &mut state);
        assert!(result.redraw);
        assert_eq!(state.string_count(), 4);
    }
}
