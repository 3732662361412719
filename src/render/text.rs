//! Hex grid text output with optional truecolor cells.

use std::io::{self, Write};

use super::{ansi, cell_value, color};
use crate::config::ColorMode;
use crate::histogram::Grid;

/// Glyph printed for cells whose rendered value is zero.
pub const EMPTY_CELL: &str = "--";

/// Write the grid as rows of two-character cells.
///
/// Each row ends with a color reset (when coloring) and a newline, and the
/// grid is followed by one blank line. With `rewind`, the cursor is moved back
/// up over the grid and the blank line so the next frame overwrites it.
pub fn write_grid(
    grid: &Grid,
    color: ColorMode,
    threshold: Option<u32>,
    rewind: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    for y in 0..grid.size() {
        for &count in grid.row(y) {
            let v = cell_value(count, threshold);
            write_cell_color(out, color, v)?;
            if v == 0 {
                out.write_all(EMPTY_CELL.as_bytes())?;
            } else {
                write!(out, "{v:02x}")?;
            }
        }

        if color != ColorMode::None {
            ansi::reset(out)?;
        }
        out.write_all(b"\n")?;
    }

    out.write_all(b"\n")?;

    if rewind {
        ansi::cursor_up(out, u32::from(grid.size()) + 1)?;
    }

    Ok(())
}

fn write_cell_color(out: &mut impl Write, mode: ColorMode, v: u8) -> io::Result<()> {
    match mode {
        ColorMode::None => Ok(()),
        ColorMode::Heat => ansi::bg(out, color::heat(v)),
        ColorMode::Grayscale => {
            let (fg, bg) = color::grayscale(v);
            ansi::fg(out, fg)?;
            ansi::bg(out, bg)
        }
    }
}
