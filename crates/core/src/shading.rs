//! Lambertian shading onto a character ramp.

use crate::vec3::Vec3;

/// Fixed light direction: straight at the viewer.
pub const LIGHT_DIR: Vec3 = Vec3::Z;

/// Ramp index for a surface with `normal` lit from `light`.
///
/// `floor(ramp_len * max(dot, 0))`, capped at the last index so a fully lit
/// face (dot == 1.0) lands on the brightest glyph. Returns 0 for an empty ramp.
#[inline]
pub fn shade_index(normal: Vec3, light: Vec3, ramp_len: usize) -> usize {
    // f32::max drops NaN in favour of 0.0
    let lit = normal.dot(light).max(0.0);
    let idx = (ramp_len as f32 * lit) as usize;
    idx.min(ramp_len.saturating_sub(1))
}

/// Glyph for a surface with `normal` lit from `light`.
///
/// # Panics
///
/// Panics if `ramp` is empty.
#[inline]
pub fn shade(normal: Vec3, light: Vec3, ramp: &[char]) -> char {
    ramp[shade_index(normal, light, ramp.len())]
}
