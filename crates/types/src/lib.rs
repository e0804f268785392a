//! Shared constants and configuration for the ASCII cube renderer.
//!
//! Everything here is plain data: no terminal, no clock, no trigonometry.
//! The rendering crates read these values; nothing in this crate reads them back.
//!
//! # Screen
//!
//! The character grid is a fixed 165x42 cells. Terminal glyphs are taller than
//! they are wide, so horizontal placement is scaled by [`ASPECT_CORRECTION`] to
//! keep the cube visually square.
//!
//! # Configurations
//!
//! Two configurations of the same renderer exist:
//!
//! | Preset | Projection | FPS | Angle step (rad/frame) |
//! |--------|------------|-----|------------------------|
//! | [`RenderConfig::orthographic`] | orthographic | 25 | 0.06 |
//! | [`RenderConfig::perspective`] | perspective (k = 1.5) | 60 | 0.02 |
//!
//! # Examples
//!
//! ```
//! use ascii_cube_types::{ProjectionMode, RenderConfig, LUMINANCE_RAMP};
//!
//! let config = RenderConfig::orthographic();
//! assert_eq!(config.projection, ProjectionMode::Orthographic);
//! assert!(config.validate().is_ok());
//!
//! // 25 FPS => 40ms per frame
//! assert_eq!(config.frame_interval().as_millis(), 40);
//!
//! // Dimmest to brightest
//! assert_eq!(LUMINANCE_RAMP[0], '.');
//! assert_eq!(LUMINANCE_RAMP[LUMINANCE_RAMP.len() - 1], '@');
//! ```

use std::time::Duration;

use thiserror::Error;

/// Character grid width in columns (165)
pub const SCREEN_WIDTH: u16 = 165;

/// Character grid height in rows (42)
pub const SCREEN_HEIGHT: u16 = 42;

/// Horizontal scale applied when mapping x to a column.
pub const ASPECT_CORRECTION: f32 = 0.6;

/// Half the cube's edge length. The cube spans [-0.5, 0.5] on every axis.
pub const CUBE_HALF_EXTENT: f32 = 0.5;

/// Distance between neighbouring surface samples on a face.
pub const SAMPLE_STEP: f32 = 0.005;

/// Finest accepted sample step. Gives 10,001 samples per axis.
pub const MIN_SAMPLE_STEP: f32 = 1e-4;

/// Depth offset `k` used by the perspective divide `x / (z - k)`.
pub const PERSPECTIVE_OFFSET: f32 = 1.5;

/// Glyph of an empty cell.
pub const BLANK_GLYPH: char = ' ';

/// Depth of an empty cell; below any depth a cube sample can have.
pub const DEPTH_SENTINEL: f32 = -10.0;

/// Shading characters, dimmest first.
pub const LUMINANCE_RAMP: [char; 12] = ['.', ',', '-', '~', ':', ';', '=', '!', '*', '#', '$', '@'];

/// Frame rate of the orthographic configuration.
pub const ORTHOGRAPHIC_FPS: u32 = 25;

/// Rotation advance per frame of the orthographic configuration (radians).
pub const ORTHOGRAPHIC_ANGLE_STEP: f32 = 0.06;

/// Frame rate of the perspective configuration.
pub const PERSPECTIVE_FPS: u32 = 60;

/// Rotation advance per frame of the perspective configuration (radians).
pub const PERSPECTIVE_ANGLE_STEP: f32 = 0.02;

/// How rotated points are flattened onto the screen plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectionMode {
    /// x and y pass through unchanged.
    Orthographic,
    /// x and y are divided by `z - k`.
    Perspective,
}

impl ProjectionMode {
    /// Convert to lowercase string
    ///
    /// # Examples
    ///
    /// ```
    /// use ascii_cube_types::ProjectionMode;
    ///
    /// assert_eq!(ProjectionMode::Orthographic.as_str(), "orthographic");
    /// assert_eq!(ProjectionMode::Perspective.as_str(), "perspective");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectionMode::Orthographic => "orthographic",
            ProjectionMode::Perspective => "perspective",
        }
    }
}

/// Rejected [`RenderConfig`] values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport { width: u16, height: u16 },

    #[error("fps must be greater than zero")]
    ZeroFps,

    #[error("sample step must be in [{min}, {max}], got {step}")]
    InvalidSampleStep { step: f32, min: f32, max: f32 },

    #[error("angle step must be finite, got {0}")]
    InvalidAngleStep(f32),

    #[error("perspective offset {offset} must exceed the cube's circumradius {min}")]
    PerspectiveOffsetTooSmall { offset: f32, min: f32 },
}

/// Tunables of one renderer configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub width: u16,
    pub height: u16,
    pub fps: u32,
    /// Radians added to the rotation angle after every frame.
    pub angle_step: f32,
    pub projection: ProjectionMode,
    /// Only read when `projection` is [`ProjectionMode::Perspective`].
    pub perspective_offset: f32,
    pub sample_step: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::orthographic()
    }
}

impl RenderConfig {
    /// Orthographic projection, 25 FPS, 0.06 rad per frame.
    pub fn orthographic() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            fps: ORTHOGRAPHIC_FPS,
            angle_step: ORTHOGRAPHIC_ANGLE_STEP,
            projection: ProjectionMode::Orthographic,
            perspective_offset: PERSPECTIVE_OFFSET,
            sample_step: SAMPLE_STEP,
        }
    }

    /// Perspective projection, 60 FPS, 0.02 rad per frame.
    pub fn perspective() -> Self {
        Self {
            fps: PERSPECTIVE_FPS,
            angle_step: PERSPECTIVE_ANGLE_STEP,
            projection: ProjectionMode::Perspective,
            ..Self::orthographic()
        }
    }

    /// Check every field against the ranges the renderer relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }

        if self.fps == 0 {
            return Err(ConfigError::ZeroFps);
        }

        // A face must get at least two samples per axis.
        let max_step = 2.0 * CUBE_HALF_EXTENT;
        if !(MIN_SAMPLE_STEP..=max_step).contains(&self.sample_step) {
            return Err(ConfigError::InvalidSampleStep {
                step: self.sample_step,
                min: MIN_SAMPLE_STEP,
                max: max_step,
            });
        }

        if !self.angle_step.is_finite() {
            return Err(ConfigError::InvalidAngleStep(self.angle_step));
        }

        if self.projection == ProjectionMode::Perspective {
            // A rotated corner can sit anywhere on the circumscribed sphere.
            let min = CUBE_HALF_EXTENT * 3.0_f32.sqrt();
            if !(self.perspective_offset > min) {
                return Err(ConfigError::PerspectiveOffsetTooSmall {
                    offset: self.perspective_offset,
                    min,
                });
            }
        }

        Ok(())
    }

    /// Delay between two frames.
    pub fn frame_interval(&self) -> Duration {
        let micros = 1_000_000u64.checked_div(self.fps as u64).unwrap_or(0);
        Duration::from_micros(micros)
    }
}
