//! Terminal size probing for the default grid size.

use crate::histogram::MAX_GRID_SIZE;

/// Rows reserved below the grid (blank spacer line plus the shell prompt).
const RESERVED_ROWS: u16 = 4;

/// Terminal dimensions in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermSize {
    pub cols: u16,
    pub rows: u16,
}

/// Query the size of the terminal attached to stdout via `ioctl(TIOCGWINSZ)`.
///
/// Returns `None` if stdout is not a terminal or the query fails.
#[cfg(unix)]
pub fn size() -> Option<TermSize> {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let result = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some(TermSize {
            cols: ws.ws_col,
            rows: ws.ws_row,
        })
    } else {
        None
    }
}

#[cfg(not(unix))]
pub fn size() -> Option<TermSize> {
    None
}

/// Largest grid that fits the terminal.
///
/// Each cell is two columns wide, and a few rows are left free below the
/// grid. The result is clamped to `1..=256`; without a terminal the full
/// 256×256 resolution is used.
pub fn default_grid_size(term: Option<TermSize>) -> u16 {
    match term {
        Some(t) => t
            .rows
            .saturating_sub(RESERVED_ROWS)
            .min(t.cols / 2)
            .clamp(1, MAX_GRID_SIZE),
        None => MAX_GRID_SIZE,
    }
}
