//! Logger setup.
//!
//! Library code logs through the `log` facade only; binaries call
//! [`init_logging`] once to install `env_logger`.

use std::sync::Once;

use log::LevelFilter;

/// GPU stack modules that are noisy at `info`.
const GPU_MODULES: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. `"pixelpad_canvas=debug"`. Falls back to
    /// `RUST_LOG`, then to `info`.
    pub env_filter: Option<String>,
    /// Level for the GPU stack unless the filter names those modules itself.
    pub gpu_level: LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            gpu_level: LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(LevelFilter::Info);
        for module in GPU_MODULES {
            builder.filter_module(module, config.gpu_level);
        }

        // Parsed last so explicit directives override the defaults above.
        if let Some(filter) = config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            builder.parse_filters(&filter);
        }

        builder.write_style(config.write_style).init();
        log::debug!("logging initialized");
    });
}
