//! Discrete rasterization of geometric primitives on an integer grid.
//!
//! Converts a continuous line segment or circle outline into the ordered
//! sequence of grid cells that best approximates it, using integer-only
//! arithmetic (Bresenham's line algorithm and the midpoint circle
//! algorithm). The crate draws nothing itself: rasterizers hand cells to a
//! [`PointSink`] or collect them into a `Vec`, and grid sizing, unit
//! conversion, and rendering stay with the caller.
//!
//! Behavioral contract:
//! - Continuous segment endpoints are truncated (not rounded) to cells.
//! - Cells arrive in generation order, which is not spatial order, and the
//!   circle sweep re-emits cells where its octants meet. Nothing is
//!   deduplicated.
//! - A zero radius collapses to the center cell; a negative radius is
//!   rejected with [`RasterError::NegativeRadius`] before anything is
//!   emitted.

pub mod bbox;
pub mod circle;
pub mod error;
pub mod line;
pub mod sink;
pub mod types;

pub use bbox::{points_bounds, GridBounds};
pub use circle::{octant_reflections, rasterize_circle, rasterize_circle_into};
pub use error::RasterError;
pub use line::{rasterize_line, rasterize_line_into};
pub use sink::PointSink;
pub use types::{Circle, Coord, GridPoint, Segment};
