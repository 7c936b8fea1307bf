//! Action types for the dispatch system.
//!
//! Actions represent user selections that flow through dispatch. Each one carries a
//! fully-formed replacement value, so no action can leave the state invalid.

use serde::Serialize;

use crate::{Instrument, KeySpec, PitchClass, Tuning};

/// Selection changes for a trainer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrainerAction {
    SetInstrument(Instrument),
    SetRootNote(PitchClass),
    SetKeySpec(KeySpec),
    SetTuning(Tuning),
}

impl TrainerAction {
    /// Short label for logs and status lines.
    pub fn describe(&self) -> String {
        match self {
            TrainerAction::SetInstrument(i) => format!("instrument -> {}", i),
            TrainerAction::SetRootNote(p) => format!("root -> {}", p),
            TrainerAction::SetKeySpec(k) => format!("key -> {}", k),
            TrainerAction::SetTuning(t) => format!("tuning -> {}", t),
        }
    }
}

/// Result of dispatching an action. The presentation layer reads it to decide
/// whether previously computed fret maps are stale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchResult {
    /// State changed; fret maps must be recomputed before the next render
    pub redraw: bool,
    /// Status line text describing the change
    pub status: Option<String>,
}

impl DispatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_redraw(message: impl Into<String>) -> Self {
        Self {
            redraw: true,
            status: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_names_the_new_value() {
        assert_eq!(
            TrainerAction::SetRootNote(PitchClass::FS).describe(),
            "root -> F#"
        );
        assert_eq!(
            TrainerAction::SetTuning(Tuning::DADGAD).describe(),
            "tuning -> DADGAD"
        );
    }

    #[test]
    fn dispatch_result_none_is_quiet() {
        let r = DispatchResult::none();
        assert!(!r.redraw);
        assert!(r.status.is_none());
        assert!(DispatchResult::with_redraw("x").redraw);
    }
}
