//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (latched key state)
//! - Storage (see `crate::highscores` for the LocalStorage backend)

pub mod input;

pub use input::{InputState, KeyAction};
