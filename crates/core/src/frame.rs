//! Depth-tested character framebuffer.

use crate::types::{ASPECT_CORRECTION, BLANK_GLYPH, DEPTH_SENTINEL};
use crate::vec3::Vec3;

/// What a [`FrameBuffer::plant`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantOutcome {
    /// The sample was nearer than the cell's stored depth and replaced it.
    Written,
    /// Something at least as near already owns the cell.
    Occluded,
    /// The sample mapped outside the grid (or to NaN) and was skipped.
    Clipped,
}

/// 2D grid of glyphs with a parallel grid of depths.
///
/// Both grids are row-major, share one shape and are only ever written
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<char>,
    depth: Vec<f32>,
}

impl FrameBuffer {
    /// A cleared buffer.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            glyphs: vec![BLANK_GLYPH; len],
            depth: vec![DEPTH_SENTINEL; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank every glyph and push every depth back to the sentinel.
    pub fn clear(&mut self) {
        self.glyphs.fill(BLANK_GLYPH);
        self.depth.fill(DEPTH_SENTINEL);
    }

    #[inline(always)]
    fn idx(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        self.idx(col, row).map(|i| self.glyphs[i])
    }

    pub fn depth(&self, col: u16, row: u16) -> Option<f32> {
        self.idx(col, row).map(|i| self.depth[i])
    }

    /// One row of glyphs, left to right.
    pub fn row(&self, row: u16) -> Option<&[char]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (row as usize) * w;
        Some(&self.glyphs[start..start + w])
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // chunks() rejects a zero chunk size
        self.glyphs.chunks(self.width.max(1) as usize)
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Grid cell `(col, row)` for a projected point, if it lands on the grid.
    ///
    /// `row = (y + 1) / 2 * height`, `col = 0.6 * (x + 1) / 2 * width`.
    #[inline]
    pub fn cell_of(&self, p: Vec3) -> Option<(u16, u16)> {
        let row = (p.y + 1.0) / 2.0 * self.height as f32;
        let col = ASPECT_CORRECTION * (p.x + 1.0) / 2.0 * self.width as f32;

        // Written as `contains` so NaN falls out too.
        if !(0.0..self.height as f32).contains(&row) || !(0.0..self.width as f32).contains(&col) {
            return None;
        }
        Some((col as u16, row as u16))
    }

    /// Depth-tested write of `glyph` at the cell `p` projects to, using `p.z`
    /// as depth. Larger z is nearer to the viewer.
    #[inline]
    pub fn plant(&mut self, p: Vec3, glyph: char) -> PlantOutcome {
        let Some(i) = self.cell_of(p).and_then(|(col, row)| self.idx(col, row)) else {
            return PlantOutcome::Clipped;
        };

        if p.z > self.depth[i] {
            self.glyphs[i] = glyph;
            self.depth[i] = p.z;
            PlantOutcome::Written
        } else {
            PlantOutcome::Occluded
        }
    }

    /// Number of cells currently showing `glyph`.
    pub fn count(&self, glyph: char) -> usize {
        self.glyphs.iter().filter(|&&g| g == glyph).count()
    }
}
