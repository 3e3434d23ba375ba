//! Ladder and rounding constants shared by the codec and the generator.

/// Shade labels from lightest to darkest.
pub const LADDER_LABELS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Decimal places kept for saturation, lightness and ramp step sizes.
pub const DEFAULT_PRECISION: i32 = 2;

/// Integer scale lightness is projected onto for nearest-shade search.
pub(crate) const LIGHTNESS_SCALE: i32 = 1000;

/// `steps_to_white + steps_to_black` for every anchor.
pub(crate) const RAMP_SPAN: u32 = 11;
