//! Grid rendering.
//!
//! A [`Renderer`] turns a filled [`Grid`] into one of two encodings:
//!
//! 1. **Text** - rows of two-digit hex cells (`--` for empty), optionally
//!    wrapped in truecolor escapes ([`ColorMode::Heat`] or
//!    [`ColorMode::Grayscale`])
//! 2. **Image** - a binary PGM stream
//!
//! Both paths share [`cell_value`], so thresholding and clamping behave the
//! same regardless of output.

pub mod ansi;
pub mod color;
mod image;
mod text;

use std::io::{self, Write};

use crate::config::{ColorMode, OutputMode, ScopeConfig};
use crate::histogram::Grid;

pub use image::{write_pgm, MAX_SAMPLE};
pub use text::{write_grid, EMPTY_CELL};

/// Displayable intensity of a raw count.
///
/// With a threshold, counts above it become 255 and everything else 0.
/// Without one, counts are clamped to 255.
#[inline]
pub fn cell_value(count: u32, threshold: Option<u32>) -> u8 {
    match threshold {
        Some(t) if count > t => u8::MAX,
        Some(_) => 0,
        None => count.min(u32::from(u8::MAX)) as u8,
    }
}

/// Writes grids according to a fixed configuration.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    output: OutputMode,
    color: ColorMode,
    threshold: Option<u32>,
}

impl Renderer {
    pub fn new(config: &ScopeConfig) -> Self {
        Self {
            output: config.output,
            color: config.color,
            threshold: config.threshold,
        }
    }

    /// Render `grid` to `out`.
    ///
    /// `rewind` asks the text renderer to return the cursor to the top of the
    /// grid afterwards; it has no effect on image output.
    pub fn render(&self, grid: &Grid, out: &mut impl Write, rewind: bool) -> io::Result<()> {
        match self.output {
            OutputMode::Text => write_grid(grid, self.color, self.threshold, rewind, out),
            OutputMode::Image => write_pgm(grid, self.threshold, out),
        }
    }
}
