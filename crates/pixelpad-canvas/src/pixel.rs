/// Straight RGBA color of one grid cell.
///
/// RGB channels are 8-bit; alpha is 8-bit too so that equality is exact and
/// cheap. Equality is by value.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::rgba(0, 0, 0, 255);
    pub const WHITE: Pixel = Pixel::rgba(255, 255, 255, 255);

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Color-picker style input: 0–255 RGB with a `[0, 1]` alpha.
    pub fn with_alpha(r: u8, g: u8, b: u8, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self::rgba(r, g, b, a)
    }

    /// Normalized `[r, g, b, a]` floats for the rasterizer.
    #[inline]
    pub fn to_f32(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

impl Default for Pixel {
    fn default() -> Self {
        Pixel::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_alpha_maps_unit_range() {
        assert_eq!(Pixel::with_alpha(1, 2, 3, 1.0).a, 255);
        assert_eq!(Pixel::with_alpha(1, 2, 3, 0.0).a, 0);
        assert_eq!(Pixel::with_alpha(1, 2, 3, 7.0).a, 255);
    }

    #[test]
    fn to_f32_normalizes_channels() {
        assert_eq!(Pixel::rgb(255, 0, 51).to_f32(), [1.0, 0.0, 0.2, 1.0]);
    }
}
