//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::KeyAction`]. The session
//! reacts to key presses only, so there is no key state to track here.

pub mod map;

pub use blockdrop_types as types;

pub use map::{handle_key_event, should_quit};
