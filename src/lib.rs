//! # ten-shades
//!
//! Turns one color into a ten-step shade ramp labelled 50 (lightest) to 900
//! (darkest), in hex, `rgb(...)` or `hsl(...)` notation.
//!
//! The input color is anchored on the ladder entry nearest its lightness, or
//! on a shade the caller picks. Hue and saturation stay fixed; lightness is
//! interpolated toward white above the anchor and toward black below it.
//!
//! ## Usage
//!
//! ```rust
//! use ten_shades::{generate_palette, OutputFormat, PaletteRequest, Shade};
//!
//! let request = PaletteRequest::new("#ea1863").format(OutputFormat::Hex);
//! let palette = generate_palette(&request).unwrap();
//! assert_eq!(palette.get_label(500), Some("#ea1863"));
//!
//! let forced = PaletteRequest::new("#ea1863").shade(Shade::new(400).unwrap());
//! assert_eq!(generate_palette(&forced).unwrap().get_label(400), Some("#ea1863"));
//! ```

mod color;
mod constants;
mod error;
mod format;
pub mod math;
mod palette;
mod shade;

#[cfg(feature = "clipboard")]
mod clipboard;

pub use color::{Hsl, Rgb};
pub use constants::{DEFAULT_PRECISION, LADDER_LABELS};
pub use error::{InvalidShade, PaletteError};
pub use format::OutputFormat;
pub use palette::{
    expand_shorthand, generate_palette, lightness_ramp, parse_color, Anchor, Palette,
    PaletteRequest,
};
pub use shade::{Shade, LADDER};

#[cfg(feature = "clipboard")]
pub use clipboard::copy_to_clipboard;
