use crate::{DispatchResult, TrainerAction};

/// Trait for dispatching selection changes to a trainer session.
///
/// The presentation layer only depends on this trait; the core crate's `Trainer`
/// applies actions to its own in-process state.
pub trait Dispatcher {
    /// Dispatch an action and return the result.
    fn dispatch(&mut self, action: &TrainerAction) -> DispatchResult;
}
