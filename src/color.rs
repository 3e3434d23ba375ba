//! Rgb and Hsl value types.
//!
//! Both are plain `Copy` triples. Conversions delegate to [`crate::math`] and
//! `Display` renders the CSS-like `rgb(...)` and `hsl(...)` notations.

use std::fmt;

use crate::math;

/// RGB color with 0–255 channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB`, with or without `#`. Shorthand and alpha forms are not
    /// accepted here; see [`crate::palette::parse_color`].
    pub fn from_hex(hex: &str) -> Option<Self> {
        math::hex_to_rgb(hex)
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        math::rgb_to_hex(*self)
    }

    pub fn to_hsl(&self) -> Hsl {
        math::rgb_to_hsl(*self)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// HSL color.
///
/// - `h`: hue in degrees, 0.0–360.0
/// - `s`: saturation, 0.0–1.0
/// - `l`: lightness, 0.0–1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Same hue and saturation, different lightness.
    pub fn with_lightness(self, l: f64) -> Self {
        Self { l, ..self }
    }

    pub fn to_rgb(&self) -> Rgb {
        math::hsl_to_rgb(*self)
    }

    pub fn to_hex(&self) -> String {
        math::hsl_to_hex(*self)
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}, {})", self.h, self.s, self.l)
    }
}
