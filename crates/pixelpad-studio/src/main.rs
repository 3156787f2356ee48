mod app;
mod palette;

use anyhow::Result;
use pixelpad_canvas::{CanvasConfig, CanvasSession};
use pixelpad_engine::device::GpuInit;
use pixelpad_engine::logging::{init_logging, LoggingConfig};
use pixelpad_engine::window::{Runtime, RuntimeConfig};

use crate::app::StudioApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = CanvasConfig::default();
    log::info!(
        "pixelpad studio: {}x{} grid, D/E/M/R/Z tools, 1-9/0 colors, Delete clears, Esc quits",
        config.width,
        config.height
    );

    let session = CanvasSession::new(config)?;
    Runtime::run(RuntimeConfig::default(), GpuInit::default(), StudioApp::new(session))
}
