//! Terminal rendering for the 2048 grid.
//!
//! A small rendering layer that reads a [`core::GameSnapshot`] and never touches game
//! rules. Drawing happens into a plain framebuffer first, which keeps the view pure and
//! unit-testable; [`TerminalRenderer`] is the only part that talks to the terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
