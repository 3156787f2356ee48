use core::ops::{Add, Div, Mul, Neg, Sub};

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn dot(self, rhs: Vec2) -> f32 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Z component of the 3D cross product. Positive when `rhs` lies clockwise
    /// of `self` on screen (+Y down).
    #[inline]
    pub fn cross(self, rhs: Vec2) -> f32 {
        self.x * rhs.y - self.y * rhs.x
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    #[inline]
    pub fn normalized(self) -> Vec2 {
        let len = self.length();
        if len == 0.0 { Vec2::zero() } else { self / len }
    }

    #[inline]
    pub fn midpoint(self, other: Vec2) -> Vec2 {
        (self + other) * 0.5
    }

    /// Unsigned angle between two vectors, in radians.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, so rounding noise and
    /// zero-length inputs never produce NaN.
    pub fn angle_between(self, other: Vec2) -> f32 {
        let cos = self.normalized().dot(other.normalized());
        cos.clamp(-1.0, 1.0).acos()
    }

    /// Angle from `self` to `other` in degrees, signed by the cross product.
    pub fn signed_angle_deg(self, other: Vec2) -> f32 {
        let sign = signum_or_zero(self.cross(other));
        self.angle_between(other).to_degrees() * sign
    }

    /// Rotates `self` about `center` by `deg` degrees.
    pub fn rotate_about(self, center: Vec2, deg: f32) -> Vec2 {
        let (sin, cos) = deg.to_radians().sin_cos();
        let rel = self - center;
        center + Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos)
    }
}

// `f32::signum` maps 0.0 to 1.0; a zero cross product must not pick a side.
#[inline]
fn signum_or_zero(v: f32) -> f32 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}
