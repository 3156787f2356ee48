//! Platform-agnostic window input.
//!
//! The runtime translates window-system events into [`InputEvent`]s, folds
//! them into an [`InputState`] and hands the frame's events to the app.

pub(crate) mod platform;
mod state;
mod types;

pub use state::{InputFrame, InputState};
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseButton, TouchPhase};
