//! Presentation loop.
//!
//! [`Animation`] owns the per-frame state (angle, framebuffer) and drives one
//! frame at a time: render the scene, clear the screen, present the grid,
//! sleep, advance the angle. The screen and the clock are reached through the
//! [`Surface`] trait so the loop runs headless in tests.

pub mod animation;
pub mod surface;

pub use ascii_cube_core as core;
pub use ascii_cube_types as types;

pub use animation::Animation;
pub use surface::Surface;
