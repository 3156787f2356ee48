use super::Vec2;

/// Window size in logical pixels; the basis for logical px to NDC conversion.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(self) -> Vec2 {
        self.size() * 0.5
    }
}
