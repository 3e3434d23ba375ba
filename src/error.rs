use thiserror::Error;

/// Input validation failures. The codec itself has no error path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No color was given. Carries no message; callers show usage instead.
    #[error("no color provided")]
    MissingColor,
    #[error("Please provide an opaque entry value")]
    OpaqueValueRequired,
    #[error("{0} is not a valid hexadecimal color")]
    InvalidHexColor(String),
}

impl PaletteError {
    /// Message worth printing above the usage block, if any.
    pub fn message(&self) -> Option<String> {
        match self {
            PaletteError::MissingColor => None,
            other => Some(other.to_string()),
        }
    }
}

/// A label that is not one of 50, 100, 200, …, 900.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a shade (expected one of 50, 100, 200, ..., 900)")]
pub struct InvalidShade(pub String);
