use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        Self {
            origin: center - size * 0.5,
            size,
        }
    }

    /// Axis-aligned bounds of a `size` rectangle scaled by `scale` and rotated by
    /// `deg` degrees about `center`.
    ///
    /// This is what a layout engine reports as the on-screen bounding box of a
    /// transformed element. Its center is always `center`.
    pub fn bounding_rotated_scaled(center: Vec2, size: Vec2, deg: f32, scale: f32) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let w = size.x * scale;
        let h = size.y * scale;
        Self::from_center_size(center, Vec2::new(w * cos + h * sin, w * sin + h * cos))
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        self.origin
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Midpoint of the two opposite corners.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.min().midpoint(self.max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    // ── center ────────────────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(10.0, 20.0, 100.0, 40.0).center(), Vec2::new(60.0, 40.0));
    }

    #[test]
    fn from_center_size_round_trips_center() {
        let c = Vec2::new(-5.0, 7.5);
        let rect = Rect::from_center_size(c, Vec2::new(30.0, 12.0));
        assert_eq!(rect.center(), c);
        assert_eq!(rect.origin, Vec2::new(-20.0, 1.5));
    }

    // ── bounding box of a transformed rect ────────────────────────────────

    #[test]
    fn bounding_unrotated_is_scaled_size() {
        let b = Rect::bounding_rotated_scaled(Vec2::new(0.0, 0.0), Vec2::new(300.0, 200.0), 0.0, 2.0);
        assert!(approx(b.size.x, 600.0));
        assert!(approx(b.size.y, 400.0));
    }

    #[test]
    fn bounding_quarter_turn_swaps_axes() {
        let b = Rect::bounding_rotated_scaled(Vec2::new(50.0, 50.0), Vec2::new(300.0, 100.0), 90.0, 1.0);
        assert!(approx(b.size.x, 100.0));
        assert!(approx(b.size.y, 300.0));
        assert!(approx(b.center().x, 50.0));
        assert!(approx(b.center().y, 50.0));
    }

    #[test]
    fn bounding_45_degrees_grows() {
        let b = Rect::bounding_rotated_scaled(Vec2::zero(), Vec2::new(100.0, 100.0), 45.0, 1.0);
        assert!(approx(b.size.x, 100.0 * std::f32::consts::SQRT_2));
    }
}
