//! 3D vector and axis rotations.

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Sum of componentwise products.
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Rotate around the x axis by `angle` radians (affects y and z).
    #[inline]
    pub fn rotate_x(self, angle: f32) -> Self {
        self.rotate_x_by(SinCos::new(angle))
    }

    /// Rotate around the y axis by `angle` radians (affects x and z).
    #[inline]
    pub fn rotate_y(self, angle: f32) -> Self {
        self.rotate_y_by(SinCos::new(angle))
    }

    /// Rotate around the z axis by `angle` radians (affects x and y).
    #[inline]
    pub fn rotate_z(self, angle: f32) -> Self {
        self.rotate_z_by(SinCos::new(angle))
    }

    // `self` is a copy, so every component below reads the pre-rotation value.

    #[inline(always)]
    fn rotate_x_by(self, r: SinCos) -> Self {
        Self {
            x: self.x,
            y: self.y * r.cos - self.z * r.sin,
            z: self.y * r.sin + self.z * r.cos,
        }
    }

    #[inline(always)]
    fn rotate_y_by(self, r: SinCos) -> Self {
        Self {
            x: self.x * r.cos + self.z * r.sin,
            y: self.y,
            z: -self.x * r.sin + self.z * r.cos,
        }
    }

    #[inline(always)]
    fn rotate_z_by(self, r: SinCos) -> Self {
        Self {
            x: self.x * r.cos - self.y * r.sin,
            y: self.x * r.sin + self.y * r.cos,
            z: self.z,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct SinCos {
    sin: f32,
    cos: f32,
}

impl SinCos {
    #[inline(always)]
    fn new(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { sin, cos }
    }

    #[inline(always)]
    fn inverse(self) -> Self {
        Self {
            sin: -self.sin,
            cos: self.cos,
        }
    }
}

/// The same angle applied around Y, then Z, then X.
///
/// sin/cos are evaluated once on construction, so a frame pays for the
/// trigonometry once instead of once per sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerRotation {
    angle: f32,
    sc: SinCos,
}

impl EulerRotation {
    pub fn new(angle: f32) -> Self {
        Self {
            angle,
            sc: SinCos::new(angle),
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Y, then Z, then X.
    #[inline]
    pub fn apply(&self, v: Vec3) -> Vec3 {
        v.rotate_y_by(self.sc).rotate_z_by(self.sc).rotate_x_by(self.sc)
    }

    /// Inverse of [`apply`](Self::apply): X, then Z, then Y, each by `-angle`.
    #[inline]
    pub fn undo(&self, v: Vec3) -> Vec3 {
        let inv = self.sc.inverse();
        v.rotate_x_by(inv).rotate_z_by(inv).rotate_y_by(inv)
    }
}
