//! Flattening rotated points onto the screen plane.
//!
//! Only x and y are reshaped. z is passed through untouched so the depth test
//! orders samples by their pre-division depth.

use crate::types::{ProjectionMode, RenderConfig};
use crate::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Screen position is x, y as-is.
    Orthographic,
    /// `x' = x / (z - offset)`, `y' = y / (z - offset)`.
    ///
    /// `offset` must exceed every |z| the scene produces so the divisor stays
    /// negative.
    Perspective { offset: f32 },
}

impl Projection {
    pub fn from_config(config: &RenderConfig) -> Self {
        match config.projection {
            ProjectionMode::Orthographic => Projection::Orthographic,
            ProjectionMode::Perspective => Projection::Perspective {
                offset: config.perspective_offset,
            },
        }
    }

    pub fn mode(&self) -> ProjectionMode {
        match self {
            Projection::Orthographic => ProjectionMode::Orthographic,
            Projection::Perspective { .. } => ProjectionMode::Perspective,
        }
    }

    #[inline]
    pub fn project(&self, p: Vec3) -> Vec3 {
        match *self {
            Projection::Orthographic => p,
            Projection::Perspective { offset } => {
                let w = p.z - offset;
                Vec3::new(p.x / w, p.y / w, p.z)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orthographic_is_pass_through() {
        let p = Vec3::new(0.25, -0.4, 0.3);
        assert_eq!(Projection::Orthographic.project(p), p);
    }

    #[test]
    fn perspective_divides_xy_and_keeps_depth() {
        let proj = Projection::Perspective { offset: 1.5 };
        let p = proj.project(Vec3::new(0.5, -0.25, 0.5));
        // z - k = -1.0
        assert_eq!(p, Vec3::new(-0.5, 0.25, 0.5));
    }

    #[test]
    fn perspective_shrinks_far_points_more() {
        let proj = Projection::Perspective { offset: 1.5 };
        let near = proj.project(Vec3::new(0.5, 0.0, 0.5));
        let far = proj.project(Vec3::new(0.5, 0.0, -0.5));
        assert!(near.x.abs() > far.x.abs());
    }

    #[test]
    fn from_config_picks_mode() {
        let a = Projection::from_config(&RenderConfig::orthographic());
        assert_eq!(a, Projection::Orthographic);
        assert_eq!(a.mode(), ProjectionMode::Orthographic);

        let b = Projection::from_config(&RenderConfig::perspective());
        assert_eq!(b, Projection::Perspective { offset: 1.5 });
        assert_eq!(b.mode(), ProjectionMode::Perspective);
    }
}
