//! Colours used by the field.
//!
//! The field is specified in HSLA (hue in degrees, saturation, lightness
//! and alpha as fractions in `[0, 1]`), while renderers consume 8-bit
//! straight-alpha RGBA. [`Hsla::to_rgba`] does the conversion.

use serde::{Deserialize, Serialize};

/// A straight (unmultiplied) 8-bit RGBA colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Hue/saturation/lightness colour with alpha.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsla {
    /// Hue in degrees; wrapped into `[0, 360)`.
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Hsla {
    pub const fn new(h: f32, s: f32, l: f32, a: f32) -> Self {
        Self { h, s, l, a }
    }

    /// Returns the same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Converts to 8-bit RGBA.
    ///
    /// Saturation, lightness and alpha are clamped to `[0, 1]` first, so
    /// out-of-range values saturate instead of wrapping.
    ///
    /// ### Returns
    /// The equivalent [`Rgba`], each channel rounded to the nearest integer.
    pub fn to_rgba(self) -> Rgba {
        let h = self.h.rem_euclid(360.0) / 60.0;
        let s = self.s.clamp(0.0, 1.0);
        let l = self.l.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let m = l - chroma / 2.0;

        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgba {
            r: to_u8(r + m),
            g: to_u8(g + m),
            b: to_u8(b + m),
            a: to_u8(self.a),
        }
    }
}

fn to_u8(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
