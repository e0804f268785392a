//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every frame is a full redraw: clear, home the cursor, print each row
//! followed by a line break. Output is encoded into a reusable byte buffer
//! and written with a single flush per frame.

use std::io::{self, Write};
use std::time::Duration;

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::FrameBuffer;
use crate::engine::Surface;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn into_writer(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl<W: Write> Surface for TerminalRenderer<W> {
    /// Queued, not written: the clear goes out together with the next frame.
    fn clear_screen(&mut self) -> Result<()> {
        encode_clear_into(&mut self.buf)
    }

    fn present(&mut self, fb: &FrameBuffer) -> Result<()> {
        encode_rows_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn sleep(&mut self, interval: Duration) {
        std::thread::sleep(interval);
    }
}

/// Encode "clear screen, cursor home" into `out`.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode every row of `fb`, each followed by a line break, into `out`.
pub fn encode_rows_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if fb.width() == 0 {
        return Ok(());
    }
    for row in fb.rows() {
        for &ch in row {
            out.queue(Print(ch))?;
        }
        out.queue(Print('\n'))?;
    }
    Ok(())
}
