//! The ten-step shade ladder.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::constants::{LADDER_LABELS, LIGHTNESS_SCALE};
use crate::error::InvalidShade;

/// One of the ladder labels 50, 100, 200, …, 900. Lower is lighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shade(u16);

/// Every shade, lightest first.
pub const LADDER: [Shade; 10] = [
    Shade(50),
    Shade(100),
    Shade(200),
    Shade(300),
    Shade(400),
    Shade(500),
    Shade(600),
    Shade(700),
    Shade(800),
    Shade(900),
];

impl Shade {
    /// Returns `None` unless `label` is on the ladder.
    pub fn new(label: u16) -> Option<Self> {
        LADDER_LABELS.contains(&label).then_some(Self(label))
    }

    pub fn label(self) -> u16 {
        self.0
    }

    /// 0-based position on the ladder (50 → 0, 900 → 9).
    pub fn index(self) -> usize {
        LADDER.iter().position(|s| *s == self).unwrap_or_default()
    }

    /// Position of this shade on the 0–1000 lightness scale.
    pub(crate) fn closeness(self) -> i32 {
        LIGHTNESS_SCALE - i32::from(self.0)
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.0)
    }
}

impl TryFrom<u16> for Shade {
    type Error = InvalidShade;

    fn try_from(label: u16) -> Result<Self, Self::Error> {
        Shade::new(label).ok_or_else(|| InvalidShade(label.to_string()))
    }
}

impl FromStr for Shade {
    type Err = InvalidShade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u16>()
            .ok()
            .and_then(Shade::new)
            .ok_or_else(|| InvalidShade(s.to_string()))
    }
}
