//! Core types for grid rasterization.
//!
//! Continuous inputs use [`kurbo::Point`]; everything the rasterizers
//! produce is a [`GridPoint`], one cell of the integer grid.

use kurbo::Point;

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// Grid coordinate scalar.
///
/// Wide enough that the rasterizers' intermediate terms (`2·error`,
/// `4(x−y)+10`) cannot overflow for any grid a caller can render.
pub type Coord = i64;

// ---------------------------------------------------------------------------
// GridPoint
// ---------------------------------------------------------------------------

/// One cell of the integer grid.
///
/// A grid point has no identity beyond its coordinates; two points with
/// equal coordinates are the same cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    pub x: Coord,
    pub y: Coord,
}

impl GridPoint {
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The cell a continuous point falls in, by truncation toward zero:
    /// 3.7 → 3, -1.2 → -1.
    ///
    /// Truncation, not rounding, is the defined conversion for rasterizer
    /// inputs.
    #[inline]
    #[must_use]
    pub fn from_continuous(p: Point) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "truncation toward zero is the defined conversion"
        )]
        let (x, y) = (p.x as Coord, p.y as Coord);
        Self { x, y }
    }

    /// The continuous point at this cell's coordinates.
    #[inline]
    #[must_use]
    pub fn to_continuous(self) -> Point {
        #[expect(
            clippy::cast_precision_loss,
            reason = "renderable grid coordinates fit in f64"
        )]
        let (x, y) = (self.x as f64, self.y as f64);
        Point::new(x, y)
    }
}

impl From<(Coord, Coord)> for GridPoint {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

// ---------------------------------------------------------------------------
// Segment
// ---------------------------------------------------------------------------

/// A line segment in continuous space.
///
/// The rasterizer truncates both endpoints to grid cells first, so any
/// pair of finite points is valid, including a degenerate segment whose
/// endpoints share a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Segment between the centers of two grid cells.
    #[inline]
    #[must_use]
    pub fn from_cells(start: GridPoint, end: GridPoint) -> Self {
        Self {
            start: start.to_continuous(),
            end: end.to_continuous(),
        }
    }
}

// ---------------------------------------------------------------------------
// Circle
// ---------------------------------------------------------------------------

/// A circle outline: integer center and radius.
///
/// Plain data; the `radius ≥ 0` requirement is enforced by
/// [`rasterize_circle`](crate::circle::rasterize_circle), which rejects a
/// negative radius before emitting anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: GridPoint,
    pub radius: Coord,
}

impl Circle {
    #[inline]
    pub const fn new(center: GridPoint, radius: Coord) -> Self {
        Self { center, radius }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
