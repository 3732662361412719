//! Binary PGM (P5) output.

use std::io::{self, Write};

use super::cell_value;
use crate::histogram::Grid;

/// Maximum sample value written to the PGM header.
pub const MAX_SAMPLE: u8 = 255;

/// Write the grid as a `size`×`size` 8-bit grayscale PGM image.
///
/// Pixels are emitted row-major with row 0 being `y = 0`. Nothing is written
/// after the last pixel.
pub fn write_pgm(grid: &Grid, threshold: Option<u32>, out: &mut impl Write) -> io::Result<()> {
    let size = grid.size();
    write!(out, "P5\n{size} {size}\n{MAX_SAMPLE}\n")?;

    let mut row = Vec::with_capacity(usize::from(size));
    for y in 0..size {
        row.clear();
        row.extend(grid.row(y).iter().map(|&c| cell_value(c, threshold)));
        out.write_all(&row)?;
    }

    Ok(())
}
