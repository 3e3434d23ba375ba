//! Output notations for palette entries.

use std::fmt;

/// Notation each palette entry is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `#rrggbb`; the anchor keeps the caller's literal.
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s, l)`
    Hsl,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["hex", "rgb", "hsl"];

    /// Exact, case-insensitive match on a format name.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "hex" => Some(Self::Hex),
            "rgb" => Some(Self::Rgb),
            "hsl" => Some(Self::Hsl),
            _ => None,
        }
    }

    /// Like [`OutputFormat::parse`] but unknown names fall back to hex.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
