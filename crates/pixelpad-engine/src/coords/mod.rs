//! Coordinate and geometry types shared across the renderer and the canvas.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles are in degrees. A positive angle turns clockwise on screen, which is
//! the usual rotation matrix applied in a +Y-down space.

mod color;
mod rect;
mod vec2;
mod viewport;

pub use color::ColorRgba;
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
