use std::fmt;

use crate::types::Coord;

/// Errors returned by rasterization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterError {
    /// A circle rasterizer was called with a negative radius.
    NegativeRadius(Coord),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeRadius(r) => write!(f, "negative radius: {r}"),
        }
    }
}

impl std::error::Error for RasterError {}
