//! The outside world as seen by the presentation loop.

use std::time::Duration;

use anyhow::Result;

use crate::core::FrameBuffer;

/// Where frames go, and how the loop waits between them.
pub trait Surface {
    /// Wipe whatever the previous frame left on screen.
    fn clear_screen(&mut self) -> Result<()>;

    /// Emit the character grid, one line per row.
    fn present(&mut self, fb: &FrameBuffer) -> Result<()>;

    /// Block for one frame interval.
    fn sleep(&mut self, interval: Duration);
}
