//! Grid-aligned bounding box computation.
//!
//! Provides [`GridBounds`] and a helper for computing the extent of a
//! rasterized point set. Callers use the extent to size a grid or canvas
//! before rendering; the rasterizers themselves never clip.

use crate::sink::PointSink;
use crate::types::{Coord, GridPoint};

/// Axis-aligned bounds of a set of grid cells, inclusive on all sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub min_x: Coord,
    pub min_y: Coord,
    pub max_x: Coord,
    pub max_y: Coord,
}

impl GridBounds {
    /// An empty (inverted) bounds value.
    pub const EMPTY: Self = Self {
        min_x: Coord::MAX,
        min_y: Coord::MAX,
        max_x: Coord::MIN,
        max_y: Coord::MIN,
    };

    /// Check if these bounds cover at least one cell.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }

    /// Number of grid columns covered (0 for empty bounds).
    #[must_use]
    pub const fn columns(&self) -> Coord {
        if self.is_valid() {
            self.max_x - self.min_x + 1
        } else {
            0
        }
    }

    /// Number of grid rows covered (0 for empty bounds).
    #[must_use]
    pub const fn rows(&self) -> Coord {
        if self.is_valid() {
            self.max_y - self.min_y + 1
        } else {
            0
        }
    }

    /// Check if a cell lies within the bounds.
    #[must_use]
    pub const fn contains(&self, p: GridPoint) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Expand to include a cell.
    pub fn include(&mut self, p: GridPoint) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Expand to include another bounds value.
    pub fn union(&mut self, other: &Self) {
        if other.is_valid() {
            self.min_x = self.min_x.min(other.min_x);
            self.min_y = self.min_y.min(other.min_y);
            self.max_x = self.max_x.max(other.max_x);
            self.max_y = self.max_y.max(other.max_y);
        }
    }
}

impl Default for GridBounds {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Accumulates the extent of the emitted cells without storing them.
impl PointSink for GridBounds {
    #[inline]
    fn emit(&mut self, point: GridPoint) {
        self.include(point);
    }
}

/// Compute the bounds of a rasterized point set.
#[must_use]
pub fn points_bounds(points: &[GridPoint]) -> GridBounds {
    points.iter().fold(GridBounds::EMPTY, |mut bounds, p| {
        bounds.include(*p);
        bounds
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
