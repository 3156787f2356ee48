//! The winit event loop and the single canvas window it drives.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig, RuntimeCtx};
