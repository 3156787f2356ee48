//! Platform and GPU runtime for pixelpad.
//!
//! Geometry, window input, the wgpu device, the winit loop and the triangle
//! batch rasterizer the canvas draws with.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod window;
