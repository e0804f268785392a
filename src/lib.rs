//! ASCII cube (workspace facade crate).
//!
//! Re-exports the `ascii_cube::{types,core,engine,term}` API from the crates
//! under `crates/` and provides the [`run`] entry shared by both binaries.

pub mod app;

pub use ascii_cube_core as core;
pub use ascii_cube_engine as engine;
pub use ascii_cube_term as term;
pub use ascii_cube_types as types;

pub use app::{init_tracing, run};
