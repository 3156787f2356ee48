//! wgpu device and window surface.
//!
//! [`Gpu`] opens the adapter, device and queue for one window and hands out a
//! [`Frame`] per redraw.

mod gpu;
mod init;
mod surface;

pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::{Frame, SurfaceErrorAction};
