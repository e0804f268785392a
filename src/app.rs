//! Process-level glue: logging setup and the run loop on a real terminal.

use std::io;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::engine::Animation;
use crate::term::TerminalRenderer;
use crate::types::RenderConfig;

/// Log to stderr so records never land inside a frame on stdout.
///
/// Defaults to `warn`; `RUST_LOG` overrides.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Animate on stdout until the process is killed.
///
/// Returns `Ok(())` only if stdout goes away (e.g. piped into `head`).
pub fn run(config: RenderConfig) -> Result<()> {
    let mut animation = Animation::new(&config)?;
    let mut terminal = TerminalRenderer::new();

    match animation.run(&mut terminal) {
        Ok(never) => match never {},
        Err(err) if is_broken_pipe(&err) => {
            info!(frames = animation.frames(), "stdout closed");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
