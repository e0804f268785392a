//! Rotating ASCII cube (default binary).
//!
//! Orthographic projection, 25 FPS. Runs until interrupted.

use anyhow::Result;

use ascii_cube::types::RenderConfig;

fn main() -> Result<()> {
    ascii_cube::init_tracing();
    ascii_cube::run(RenderConfig::orthographic())
}
