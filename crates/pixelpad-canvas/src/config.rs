use std::fmt;

use pixelpad_engine::coords::Vec2;

use crate::gesture::GestureThresholds;

/// Construction-time settings of a canvas session.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasConfig {
    /// Grid size in cells.
    pub width: u32,
    pub height: u32,

    /// Unscaled on-screen canvas size, logical px.
    pub display_size: Vec2,
    pub initial_scale: f32,

    /// Clamp range and per-event step of the Zoom tool.
    pub zoom_min: f32,
    pub zoom_max: f32,
    pub zoom_step: f32,

    /// Degrees of rotation per logical px of horizontal drag (Rotation tool).
    pub rotate_drag_factor: f32,

    /// Two-contact pan deltas are divided by this.
    pub pan_damping: f32,
    /// Two-contact rotate deltas are multiplied by this.
    pub rotate_damping: f32,

    pub thresholds: GestureThresholds,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            display_size: Vec2::new(300.0, 300.0),
            initial_scale: 500.0 / 300.0,
            zoom_min: 0.5,
            zoom_max: 5.0,
            zoom_step: 0.01,
            rotate_drag_factor: 0.01,
            pan_damping: 3.0,
            rotate_damping: 1.0,
            thresholds: GestureThresholds::default(),
        }
    }
}

impl CanvasConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.display_size.is_finite() && self.display_size.x > 0.0 && self.display_size.y > 0.0) {
            return Err(ConfigError::InvalidDisplaySize(self.display_size));
        }
        let zoom_ok = self.zoom_min > 0.0
            && self.zoom_min <= self.initial_scale
            && self.initial_scale <= self.zoom_max
            && self.zoom_max.is_finite();
        if !zoom_ok {
            return Err(ConfigError::InvalidZoomRange {
                min: self.zoom_min,
                initial: self.initial_scale,
                max: self.zoom_max,
            });
        }
        if !(self.zoom_step > 0.0 && self.zoom_step.is_finite()) {
            return Err(ConfigError::InvalidZoomStep(self.zoom_step));
        }
        if !(self.pan_damping > 0.0 && self.pan_damping.is_finite()) {
            return Err(ConfigError::InvalidDamping(self.pan_damping));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    EmptyGrid { width: u32, height: u32 },
    InvalidDisplaySize(Vec2),
    InvalidZoomRange { min: f32, initial: f32, max: f32 },
    InvalidZoomStep(f32),
    InvalidDamping(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "grid must have at least one cell, got {width}x{height}")
            }
            ConfigError::InvalidDisplaySize(s) => {
                write!(f, "display size must be positive, got {}x{}", s.x, s.y)
            }
            ConfigError::InvalidZoomRange { min, initial, max } => write!(
                f,
                "zoom range must satisfy 0 < min <= initial <= max, got {min} <= {initial} <= {max}"
            ),
            ConfigError::InvalidZoomStep(s) => write!(f, "zoom step must be positive, got {s}"),
            ConfigError::InvalidDamping(d) => write!(f, "pan damping must be positive, got {d}"),
        }
    }
}

impl std::error::Error for ConfigError {}
