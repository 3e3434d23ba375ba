//! Palette generation: validate the input color, find its anchor on the
//! ladder, then walk lightness toward white and black from there.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::color::Hsl;
use crate::constants::{DEFAULT_PRECISION, LIGHTNESS_SCALE, RAMP_SPAN};
use crate::error::PaletteError;
use crate::format::OutputFormat;
use crate::math::{self, round};
use crate::shade::{Shade, LADDER};

/// Everything [`generate_palette`] needs.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteRequest<'a> {
    /// `#rgb` or `#rrggbb`.
    pub color: Option<&'a str>,
    pub format: OutputFormat,
    /// Forces the input color onto this shade instead of the nearest one.
    pub shade: Option<Shade>,
}

impl<'a> PaletteRequest<'a> {
    pub fn new(color: &'a str) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn shade(mut self, shade: Shade) -> Self {
        self.shade = Some(shade);
        self
    }
}

/// Validate a hex color and convert it to HSL.
pub fn parse_color(color: Option<&str>) -> Result<Hsl, PaletteError> {
    let color = match color {
        Some(c) if !c.is_empty() => c,
        _ => return Err(PaletteError::MissingColor),
    };
    let invalid = || PaletteError::InvalidHexColor(color.to_string());

    let digits = color.strip_prefix('#').ok_or_else(invalid)?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }
    match digits.len() {
        4 | 8 => Err(PaletteError::OpaqueValueRequired),
        3 => math::hex_to_hsl(&expand_shorthand(digits)).ok_or_else(invalid),
        6 => math::hex_to_hsl(digits).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

/// `#abc` → `#aabbcc`. The leading `#` is optional on input.
pub fn expand_shorthand(hex: &str) -> String {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let mut out = String::with_capacity(1 + digits.len() * 2);
    out.push('#');
    for c in digits.chars() {
        out.push(c);
        out.push(c);
    }
    out
}

/// Where the input color sits on the ladder.
///
/// `steps_to_white + steps_to_black` is always 11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub shade: Shade,
    pub steps_to_white: u32,
    pub steps_to_black: u32,
}

impl Anchor {
    /// Anchor declared by the caller.
    pub fn at_shade(shade: Shade) -> Self {
        let index = shade.index() as u32;
        Self {
            shade,
            steps_to_white: index + 1,
            steps_to_black: RAMP_SPAN - index,
        }
    }

    /// The ladder entry closest to `lightness` (0.0–1.0).
    ///
    /// Ladder entries are scanned lightest first and only a strictly closer
    /// entry replaces the current best, so ties go to the lighter shade.
    /// `steps_to_white` counts the replacements made along the way.
    pub fn nearest(lightness: f64) -> Self {
        let target = (lightness * f64::from(LIGHTNESS_SCALE)).round() as i32;
        let distance = |shade: Shade| (shade.closeness() - target).abs();

        let mut best = (LADDER[0], distance(LADDER[0]));
        let mut steps_to_white = 1;
        for &shade in &LADDER[1..] {
            let d = distance(shade);
            if d < best.1 {
                best = (shade, d);
                steps_to_white += 1;
            }
        }

        Self {
            shade: best.0,
            steps_to_white,
            steps_to_black: RAMP_SPAN - steps_to_white,
        }
    }

    pub fn index(&self) -> usize {
        self.shade.index()
    }
}

/// Lightness for every ladder entry, lightest first.
///
/// The anchor entry keeps `lightness` (after rounding). Lighter entries gain
/// a rounded `(1 - l) / steps_to_white` per step, darker ones lose
/// `l / steps_to_black` per step.
pub fn lightness_ramp(lightness: f64, anchor: Anchor) -> [f64; 10] {
    let a = anchor.index();
    let step_to_black = lightness / f64::from(anchor.steps_to_black);
    let step_to_white = round(
        (1.0 - lightness) / f64::from(anchor.steps_to_white),
        DEFAULT_PRECISION,
    );

    std::array::from_fn(|i| {
        let l = if i <= a {
            lightness + (a - i) as f64 * step_to_white
        } else {
            lightness - (i - a) as f64 * step_to_black
        };
        round(l, DEFAULT_PRECISION).clamp(0.0, 1.0)
    })
}

/// Shade label → formatted color, iterated 50 to 900.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Palette {
    entries: BTreeMap<Shade, String>,
}

impl Palette {
    pub fn get(&self, shade: Shade) -> Option<&str> {
        self.entries.get(&shade).map(String::as_str)
    }

    /// Lookup by raw label (`50`, `100`, …).
    pub fn get_label(&self, label: u16) -> Option<&str> {
        Shade::new(label).and_then(|s| self.get(s))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shade, &str)> + '_ {
        self.entries.iter().map(|(s, v)| (*s, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for Palette {
    type Item = (Shade, String);
    type IntoIter = std::collections::btree_map::IntoIter<Shade, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build the ten-entry palette for `request`.
pub fn generate_palette(request: &PaletteRequest<'_>) -> Result<Palette, PaletteError> {
    let hsl = parse_color(request.color)?;
    // parse_color rejects `None`, so this is the caller's literal.
    let literal = request.color.unwrap_or_default();

    let anchor = match request.shade {
        Some(shade) => Anchor::at_shade(shade),
        None => Anchor::nearest(hsl.l),
    };
    debug!(
        color = literal,
        h = hsl.h,
        s = hsl.s,
        l = hsl.l,
        anchor = anchor.shade.label(),
        forced = request.shade.is_some(),
        steps_to_white = anchor.steps_to_white,
        steps_to_black = anchor.steps_to_black,
        "anchor selected"
    );

    let ramp = lightness_ramp(hsl.l, anchor);
    let entries = LADDER
        .iter()
        .zip(ramp)
        .map(|(&shade, l)| {
            let step = hsl.with_lightness(l);
            let value = match request.format {
                OutputFormat::Hsl => math::hsl_to_hsl_string(step),
                OutputFormat::Rgb => math::hsl_to_rgb_string(step),
                OutputFormat::Hex if shade == anchor.shade => literal.to_string(),
                OutputFormat::Hex => math::hsl_to_hex(step),
            };
            trace!(shade = shade.label(), l, value = value.as_str(), "rendered");
            (shade, value)
        })
        .collect();

    Ok(Palette { entries })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shade(label: u16) -> Shade {
        Shade::new(label).unwrap()
    }

    #[test]
    fn missing_color() {
        assert_eq!(parse_color(None), Err(PaletteError::MissingColor));
        assert_eq!(parse_color(Some("")), Err(PaletteError::MissingColor));
    }

    #[test]
    fn alpha_forms_are_rejected() {
        for c in ["#ea1863ff", "#fffa", "#EA186380"] {
            assert_eq!(parse_color(Some(c)), Err(PaletteError::OpaqueValueRequired));
        }
    }

    #[test]
    fn malformed_values_are_named() {
        for c in ["zz1863", "ea1863", "#ea186", "#ea18633", "#gg1863", "#", "# fff"] {
            assert_eq!(
                parse_color(Some(c)),
                Err(PaletteError::InvalidHexColor(c.to_string())),
                "{c}"
            );
        }
    }

    #[test]
    fn shorthand_expands_before_conversion() {
        assert_eq!(expand_shorthand("#f0a"), "#ff00aa");
        assert_eq!(expand_shorthand("abc"), "#aabbcc");
        assert_eq!(parse_color(Some("#fff")), parse_color(Some("#ffffff")));
        assert_eq!(parse_color(Some("#FFF")), Ok(Hsl::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn shade_anchor_uses_ladder_position() {
        let a = Anchor::at_shade(shade(50));
        assert_eq!((a.steps_to_white, a.steps_to_black), (1, 11));
        let a = Anchor::at_shade(shade(400));
        assert_eq!((a.index(), a.steps_to_white, a.steps_to_black), (4, 5, 7));
        let a = Anchor::at_shade(shade(900));
        assert_eq!((a.steps_to_white, a.steps_to_black), (10, 2));
    }

    #[test]
    fn nearest_anchor_by_lightness() {
        assert_eq!(Anchor::nearest(1.0).shade, shade(50));
        assert_eq!(Anchor::nearest(0.95).shade, shade(50));
        assert_eq!(Anchor::nearest(0.51).shade, shade(500));
        assert_eq!(Anchor::nearest(0.38).shade, shade(600));
        assert_eq!(Anchor::nearest(0.0).shade, shade(900));
    }

    #[test]
    fn ties_go_to_the_lighter_shade() {
        // 0.85 sits halfway between 100 (0.9) and 200 (0.8).
        assert_eq!(Anchor::nearest(0.85).shade, shade(100));
        assert_eq!(Anchor::nearest(0.45).shade, shade(500));
        assert_eq!(Anchor::nearest(0.15).shade, shade(800));
    }

    #[test]
    fn scan_count_matches_ladder_position() {
        for step in 0..=100 {
            let l = f64::from(step) / 100.0;
            let anchor = Anchor::nearest(l);
            assert_eq!(anchor.steps_to_white as usize, anchor.index() + 1, "l = {l}");
            assert_eq!(anchor.steps_to_white + anchor.steps_to_black, 11);
        }
    }

    #[test]
    fn ramp_around_nearest_anchor() {
        let ramp = lightness_ramp(0.51, Anchor::nearest(0.51));
        assert_eq!(
            ramp,
            [0.91, 0.83, 0.75, 0.67, 0.59, 0.51, 0.41, 0.31, 0.2, 0.1]
        );
    }

    #[test]
    fn ramp_around_forced_anchor() {
        let ramp = lightness_ramp(0.51, Anchor::at_shade(shade(400)));
        assert_eq!(ramp[0], 0.91);
        assert_eq!(ramp[4], 0.51);
        assert_eq!(ramp[5], 0.44);
        assert_eq!(ramp[9], 0.15);
    }

    #[test]
    fn ramp_is_monotonic_for_every_anchor() {
        for step in 0..=20 {
            let l = f64::from(step) / 20.0;
            let anchors = LADDER
                .iter()
                .map(|&s| Anchor::at_shade(s))
                .chain(std::iter::once(Anchor::nearest(l)));
            for anchor in anchors {
                let ramp = lightness_ramp(l, anchor);
                assert!(
                    ramp.windows(2).all(|w| w[0] >= w[1]),
                    "l = {l}, anchor = {:?}: {ramp:?}",
                    anchor.shade
                );
                assert!(ramp.iter().all(|v| (0.0..=1.0).contains(v)));
            }
        }
    }

    #[test]
    fn hex_anchor_is_verbatim() {
        let palette = generate_palette(&PaletteRequest::new("#EA1863")).unwrap();
        assert_eq!(palette.get(shade(500)), Some("#EA1863"));
        assert_eq!(palette.len(), 10);

        let palette = generate_palette(&PaletteRequest::new("#000")).unwrap();
        assert_eq!(palette.get(shade(900)), Some("#000"));
        assert_eq!(palette.get(shade(50)), Some("#e6e6e6"));
    }

    #[test]
    fn non_hex_formats_render_the_anchor_too() {
        let request = PaletteRequest::new("#ea1863").format(OutputFormat::Hsl);
        let palette = generate_palette(&request).unwrap();
        assert_eq!(palette.get(shade(500)), Some("hsl(339, 0.83, 0.51)"));
        assert_eq!(palette.get(shade(50)), Some("hsl(339, 0.83, 0.91)"));
        assert_eq!(palette.get(shade(900)), Some("hsl(339, 0.83, 0.1)"));
    }

    #[test]
    fn errors_yield_no_palette() {
        let request = PaletteRequest {
            color: None,
            format: OutputFormat::Rgb,
            shade: Some(shade(200)),
        };
        assert_eq!(generate_palette(&request), Err(PaletteError::MissingColor));
    }
}
