//! Terminal output for the cube animation.
//!
//! A deliberately thin layer: the framebuffer is already a grid of glyphs,
//! so all that is left is turning it into bytes for a terminal. No raw mode,
//! no alternate screen. The process is stopped by a signal, and nothing has
//! to be restored afterwards.

pub mod renderer;

pub use ascii_cube_core as core;
pub use ascii_cube_engine as engine;
pub use ascii_cube_types as types;

pub use renderer::{encode_clear_into, encode_rows_into, TerminalRenderer};
