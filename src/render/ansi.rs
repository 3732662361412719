//! ANSI escape sequences used by the text renderer.
//!
//! Plain writers over any `impl Write`; they hold no state.

use std::io::{self, Write};

use super::color::Rgb;

/// Set a 24-bit foreground color (`ESC[38;2;R;G;Bm`).
#[inline]
pub fn fg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b)
}

/// Set a 24-bit background color (`ESC[48;2;R;G;Bm`).
#[inline]
pub fn bg(w: &mut impl Write, c: Rgb) -> io::Result<()> {
    write!(w, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b)
}

/// Reset all SGR attributes.
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

/// Move the cursor up `n` lines (CUU).
#[inline]
pub fn cursor_up(w: &mut impl Write, n: u32) -> io::Result<()> {
    write!(w, "\x1b[{n}A")
}
