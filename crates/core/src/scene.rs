//! Scene generator: samples the six cube faces and plants them into a
//! [`FrameBuffer`].
//!
//! Faces are processed in opposite pairs. Within a pair, both faces are
//! sampled at the same (outer, inner) coordinate before moving on, so ties in
//! the depth test resolve the same way every frame.

use tracing::debug;

use crate::frame::{FrameBuffer, PlantOutcome};
use crate::projection::Projection;
use crate::shading::{shade, LIGHT_DIR};
use crate::types::{RenderConfig, CUBE_HALF_EXTENT, LUMINANCE_RAMP, MIN_SAMPLE_STEP, SAMPLE_STEP};
use crate::vec3::{EulerRotation, Vec3};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Unit vector along this axis, pointing towards `sign`.
    fn unit(self, sign: f32) -> Vec3 {
        with_axis(Vec3::ZERO, self, sign.signum())
    }
}

#[inline(always)]
fn with_axis(mut v: Vec3, axis: Axis, value: f32) -> Vec3 {
    match axis {
        Axis::X => v.x = value,
        Axis::Y => v.y = value,
        Axis::Z => v.z = value,
    }
    v
}

/// Two opposite faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacePair {
    /// Axis the faces are perpendicular to.
    pub fixed: Axis,
    /// Free axis of the outer sampling loop.
    pub outer: Axis,
    /// Free axis of the inner sampling loop.
    pub inner: Axis,
    /// Fixed-axis coordinate of each face, in planting order. The outward
    /// normal points the same way as the coordinate's sign.
    pub sides: [f32; 2],
}

impl FacePair {
    #[inline(always)]
    fn point(&self, side: f32, u: f32, v: f32) -> Vec3 {
        let p = with_axis(Vec3::ZERO, self.fixed, side);
        let p = with_axis(p, self.outer, u);
        with_axis(p, self.inner, v)
    }

    fn normal(&self, side: f32) -> Vec3 {
        self.fixed.unit(side)
    }
}

const H: f32 = CUBE_HALF_EXTENT;

/// Upper bound on [`Scene::samples_per_axis`], reached at [`MIN_SAMPLE_STEP`].
pub const MAX_SAMPLES_PER_AXIS: usize = 10_001;

/// back/front, left/right, up/down
pub const FACE_PAIRS: [FacePair; 3] = [
    FacePair {
        fixed: Axis::Z,
        outer: Axis::Y,
        inner: Axis::X,
        sides: [-H, H],
    },
    FacePair {
        fixed: Axis::X,
        outer: Axis::Y,
        inner: Axis::Z,
        sides: [-H, H],
    },
    FacePair {
        fixed: Axis::Y,
        outer: Axis::X,
        inner: Axis::Z,
        sides: [H, -H],
    },
];

/// Per-frame counts of [`PlantOutcome`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub samples: u64,
    pub written: u64,
    pub occluded: u64,
    pub clipped: u64,
}

impl FrameStats {
    #[inline(always)]
    fn record(&mut self, outcome: PlantOutcome) {
        self.samples += 1;
        match outcome {
            PlantOutcome::Written => self.written += 1,
            PlantOutcome::Occluded => self.occluded += 1,
            PlantOutcome::Clipped => self.clipped += 1,
        }
    }
}

/// Everything a frame needs besides the angle and the target buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    light: Vec3,
    ramp: &'static [char],
    projection: Projection,
    samples_per_axis: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(Projection::Orthographic, SAMPLE_STEP)
    }
}

impl Scene {
    /// A scene sampling each face every `sample_step` units.
    ///
    /// The step is not validated here. Steps finer than [`MIN_SAMPLE_STEP`]
    /// (zero included) are capped at [`MAX_SAMPLES_PER_AXIS`], and negative or
    /// NaN steps fall back to the two face edges.
    pub fn new(projection: Projection, sample_step: f32) -> Self {
        let span = 2.0 * H;
        // Float-to-int casts saturate: NaN and negatives give 0, zero gives usize::MAX.
        let steps = (span / sample_step).round() as usize;
        Self {
            light: LIGHT_DIR,
            ramp: &LUMINANCE_RAMP,
            projection,
            samples_per_axis: steps.clamp(1, MAX_SAMPLES_PER_AXIS - 1) + 1,
        }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(Projection::from_config(config), config.sample_step)
    }

    pub fn with_light(mut self, light: Vec3) -> Self {
        self.light = light;
        self
    }

    pub fn light(&self) -> Vec3 {
        self.light
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Samples along each free axis of a face, both edges included.
    pub fn samples_per_axis(&self) -> usize {
        self.samples_per_axis
    }

    /// i-th coordinate in [-0.5, 0.5]. Derived from the index rather than
    /// accumulated, so the last sample is exactly +0.5.
    #[inline(always)]
    fn coord(&self, i: usize) -> f32 {
        let t = i as f32 / (self.samples_per_axis - 1) as f32;
        -H + 2.0 * H * t
    }

    /// Clear `fb` and render the whole cube rotated by `angle`.
    ///
    /// Does not allocate; callers reuse one buffer across frames.
    pub fn render_into(&self, angle: f32, fb: &mut FrameBuffer) -> FrameStats {
        fb.clear();

        let rotation = EulerRotation::new(angle);
        let mut stats = FrameStats::default();
        for pair in &FACE_PAIRS {
            self.render_face_pair(pair, &rotation, fb, &mut stats);
        }

        debug!(
            angle,
            samples = stats.samples,
            written = stats.written,
            occluded = stats.occluded,
            clipped = stats.clipped,
            "frame rendered"
        );
        stats
    }

    /// Plant both faces of `pair` without clearing `fb` first.
    pub fn render_face_pair(
        &self,
        pair: &FacePair,
        rotation: &EulerRotation,
        fb: &mut FrameBuffer,
        stats: &mut FrameStats,
    ) {
        // Normals are constant across a face, so shading is too.
        let glyphs = pair
            .sides
            .map(|side| shade(rotation.apply(pair.normal(side)), self.light, self.ramp));

        for i in 0..self.samples_per_axis {
            let u = self.coord(i);
            for j in 0..self.samples_per_axis {
                let v = self.coord(j);
                for (side, glyph) in pair.sides.into_iter().zip(glyphs) {
                    let p = rotation.apply(pair.point(side, u, v));
                    let outcome = fb.plant(self.projection.project(p), glyph);
                    stats.record(outcome);
                }
            }
        }
    }
}
