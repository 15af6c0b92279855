//! Input handling
//!
//! Provides an action-based input system over mouse, touch and keyboard,
//! so desktop and mobile browsers drive the game the same way.

mod actions;
mod state;

pub use actions::*;
pub use state::*;
