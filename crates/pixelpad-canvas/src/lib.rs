//! Pixelpad canvas crate.
//!
//! The input-to-render core of the drawing surface:
//! - [`PixelGrid`]: fixed-size grid of optional colors
//! - [`gesture`]: two-contact pan / rotate / zoom classification
//! - [`CanvasSession`]: tool state machine routing pointer and touch input
//! - [`PixelMesh`] / [`CanvasRenderer`]: full vertex + color rebuild and GPU submission
//!
//! Everything runs on the UI thread; handlers run to completion, so no state
//! here is shared or locked.

mod config;
mod contacts;
pub mod gesture;
mod grid;
mod mapper;
mod mesh;
mod pixel;
mod renderer;
mod session;
mod tool;
mod view;

pub use config::{CanvasConfig, ConfigError};
pub use contacts::{Contact, ContactId, ContactTable, MAX_CONTACTS};
pub use gesture::{Gesture, GestureResult, GestureThresholds};
pub use grid::{GridPos, PixelGrid};
pub use mapper::{canvas_bounds, screen_to_grid};
pub use mesh::{PixelMesh, VERTICES_PER_CELL};
pub use pixel::Pixel;
pub use renderer::CanvasRenderer;
pub use session::{CanvasSession, PointerKind, PointerSample, Response};
pub use tool::Tool;
pub use view::ViewTransform;
