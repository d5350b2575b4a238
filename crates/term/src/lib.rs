//! Terminal rendering module.
//!
//! Renders a session snapshot into a simple styled framebuffer and flushes
//! it to a raw-mode terminal with changed-run diffing. No widget toolkit;
//! the card grid wants precise tile control.

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use memory_match_core as core;
pub use memory_match_types as types;

pub use board_view::{BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
