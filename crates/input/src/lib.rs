//! Terminal input module.
//!
//! Maps `crossterm` key events into [`types::GameAction`] values. The
//! mapping is pure and UI-independent; the binary decides what each action
//! does to the session and the cursor.

pub mod map;

pub use memory_match_types as types;

pub use map::{handle_key_event, should_quit};
