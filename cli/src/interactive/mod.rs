//! Interactive terminal mode
//!
//! An iocraft application rendering the portfolio, driven by the
//! navigation state machine from the core crate.

pub mod animation;
pub mod app;
pub mod components;
pub mod document;
pub mod keys;
pub mod palette;

pub use app::run_interactive;
pub use document::{TerminalDocument, UiEvent};
