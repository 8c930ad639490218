//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The game itself never
//! sees key codes, only actions.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
