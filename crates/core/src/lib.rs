//! Rendering core: pure, deterministic, and testable.
//!
//! This crate turns a rotation angle into a filled character grid. It has
//! **no dependencies** on a terminal or a clock, so every stage of the frame
//! pipeline can be exercised headless.
//!
//! # Module Structure
//!
//! - [`vec3`]: 3D vector, dot product and single-axis rotations
//! - [`projection`]: orthographic or perspective flattening of rotated points
//! - [`shading`]: normal/light dot product mapped onto the luminance ramp
//! - [`frame`]: character grid with a parallel depth grid and depth-tested plants
//! - [`scene`]: samples the six cube faces and drives the stages above
//!
//! # Frame pipeline
//!
//! For every surface sample: rotate (Y, then Z, then X), project, shade,
//! plant. A plant only lands if the sample is nearer (larger z) than what the
//! cell already holds.
//!
//! # Example
//!
//! ```
//! use ascii_cube_core::{FrameBuffer, Scene};
//! use ascii_cube_core::types::RenderConfig;
//!
//! let config = RenderConfig::orthographic();
//! let scene = Scene::from_config(&config);
//! let mut fb = FrameBuffer::new(config.width, config.height);
//!
//! let stats = scene.render_into(0.0, &mut fb);
//! assert_eq!(stats.clipped, 0);
//!
//! // Unrotated, the front face looks straight at the light.
//! assert!(fb.count('@') > 0);
//! ```

pub mod frame;
pub mod projection;
pub mod scene;
pub mod shading;
pub mod vec3;

pub use ascii_cube_types as types;

pub use frame::{FrameBuffer, PlantOutcome};
pub use projection::Projection;
pub use scene::{Axis, FacePair, FrameStats, Scene, FACE_PAIRS, MAX_SAMPLES_PER_AXIS};
pub use shading::{shade, shade_index, LIGHT_DIR};
pub use vec3::{EulerRotation, Vec3};
