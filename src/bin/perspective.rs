//! Rotating ASCII cube with perspective foreshortening.
//!
//! 60 FPS, slower spin. Runs until interrupted.

use anyhow::Result;

use ascii_cube::types::RenderConfig;

fn main() -> Result<()> {
    ascii_cube::init_tracing();
    ascii_cube::run(RenderConfig::perspective())
}
