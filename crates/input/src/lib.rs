//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`], asks for a
//! yes/no answer before shuffle, restart and tile removal, and watches typed
//! characters for the tile-removal phrase.

pub mod handler;
pub mod map;
pub mod phrase;

pub use tui_2048_types as types;

pub use handler::{needs_confirmation, InputCommand, InputHandler};
pub use map::{handle_key_event, should_quit};
pub use phrase::PhraseMatcher;
