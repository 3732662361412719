//! Intensity to RGB color mapping.

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::gray(0);
    pub const WHITE: Rgb = Rgb::gray(255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// Diverging heat ramp: blue at 0, green around the middle, red at 255.
///
/// With `d = 2v - 255`: `r = max(d, 0)`, `g = 255 - |d|`, `b = max(-d, 0)`.
pub fn heat(v: u8) -> Rgb {
    let d = 2 * i16::from(v) - 255;
    Rgb {
        r: d.max(0) as u8,
        g: (255 - d.abs()) as u8,
        b: (-d).max(0) as u8,
    }
}

/// Grayscale cell colors as `(foreground, background)`.
///
/// The glyph is white on dark backgrounds (`v < 128`) and black otherwise.
pub fn grayscale(v: u8) -> (Rgb, Rgb) {
    let fg = if v < 128 { Rgb::WHITE } else { Rgb::BLACK };
    (fg, Rgb::gray(v))
}
