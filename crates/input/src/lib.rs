//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! soft-drop latch for terminals that do not report key releases.

pub mod handler;
pub mod map;

pub use falling_blocks_types as types;

pub use handler::SoftDropLatch;
pub use map::{handle_key_event, map_key_press, map_key_release, should_quit};
