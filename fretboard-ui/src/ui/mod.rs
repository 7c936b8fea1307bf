pub mod fretboard_view;
pub mod ratatui_impl;
pub mod style;

pub use fretboard_view::{render, FretboardView};
pub use ratatui_impl::{install_panic_hook, with_session, RatatuiBackend};
