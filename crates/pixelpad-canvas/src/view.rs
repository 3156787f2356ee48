use pixelpad_engine::coords::Vec2;

use crate::config::CanvasConfig;
use crate::gesture::Gesture;

/// Pan, rotation and zoom of the on-screen canvas.
///
/// Independent of grid contents. `offset` displaces the canvas center from the
/// window center; `rotation_deg` is clockwise about that center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewTransform {
    pub offset: Vec2,
    pub rotation_deg: f32,
    pub scale: f32,
}

impl ViewTransform {
    pub fn new(scale: f32) -> Self {
        Self {
            offset: Vec2::zero(),
            rotation_deg: 0.0,
            scale,
        }
    }

    /// One Zoom-tool step, clamped to `[zoom_min, zoom_max]`.
    pub fn step_zoom(&mut self, zoom_in: bool, cfg: &CanvasConfig) {
        self.scale = if zoom_in {
            (self.scale + cfg.zoom_step).min(cfg.zoom_max)
        } else {
            (self.scale - cfg.zoom_step).max(cfg.zoom_min)
        };
    }

    /// Applies a two-contact gesture delta.
    ///
    /// Pan is divided by `pan_damping`, rotation scaled by `rotate_damping`,
    /// zoom multiplies the scale without clamping. A zoom factor that is not
    /// positive and finite (contacts collapsed onto one point) is dropped.
    /// Returns whether the view changed.
    pub fn apply_gesture(&mut self, gesture: Gesture, cfg: &CanvasConfig) -> bool {
        let before = *self;
        match gesture {
            Gesture::Pan(delta) => {
                self.offset = self.offset + delta / cfg.pan_damping;
            }
            Gesture::Rotate(deg) => {
                self.rotation_deg += deg * cfg.rotate_damping;
            }
            Gesture::Zoom(factor) => {
                if factor.is_finite() && factor > 0.0 {
                    self.scale *= factor;
                }
            }
        }
        *self != before
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
