//! Color math: hex, RGB and HSL conversions.
//!
//! Every function here is pure. HSL values leaving this module carry the
//! codec rounding: hue to whole degrees, saturation and lightness to
//! [`DEFAULT_PRECISION`] decimals.

use crate::color::{Hsl, Rgb};
use crate::constants::DEFAULT_PRECISION;

/// Round half away from zero to `decimals` places.
pub fn round(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Parse `RRGGBB` (leading `#` optional) into channels.
///
/// Returns `None` for anything other than exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    let stripped = hex.strip_prefix('#').unwrap_or(hex);
    if stripped.len() != 6 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&stripped[0..2], 16).ok()?;
    let g = u8::from_str_radix(&stripped[2..4], 16).ok()?;
    let b = u8::from_str_radix(&stripped[4..6], 16).ok()?;
    Some(Rgb::new(r, g, b))
}

/// Format as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = rgb.r as f64 / 255.0;
    let g = rgb.g as f64 / 255.0;
    let b = rgb.b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        let wrap = if g < b { 6.0 } else { 0.0 };
        ((g - b) / delta + wrap) * 60.0
    } else if max == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    Hsl::new(
        round(h, 0),
        round(s, DEFAULT_PRECISION),
        round(l, DEFAULT_PRECISION),
    )
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let Hsl { h, s, l } = hsl;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

fn to_channel(value: f64) -> u8 {
    round(value * 255.0, 0).clamp(0.0, 255.0) as u8
}

pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    hex_to_rgb(hex).map(rgb_to_hsl)
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    rgb_to_hex(hsl_to_rgb(hsl))
}

/// `rgb(r, g, b)`
pub fn hsl_to_rgb_string(hsl: Hsl) -> String {
    hsl_to_rgb(hsl).to_string()
}

/// `hsl(h, s, l)` with the raw component numbers.
pub fn hsl_to_hsl_string(hsl: Hsl) -> String {
    hsl.to_string()
}
