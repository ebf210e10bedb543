//! Point sink trait.
//!
//! Defines [`PointSink`], a trait for receiving rasterized grid cells.
//! Rasterizers emit into any implementation, so consumers that render
//! cells as they arrive (or only aggregate them) never materialize the
//! full point set.

use crate::types::GridPoint;

/// Receiver for rasterized grid cells.
///
/// Cells arrive in generation order, which is not spatial order, and the
/// same cell may arrive more than once (the circle sweep revisits cells
/// where its octants meet). Sinks see exactly that stream; deduplication,
/// if wanted, is the sink's choice.
pub trait PointSink {
    /// Receive one grid cell.
    fn emit(&mut self, point: GridPoint);
}

/// Collects the stream, preserving emission order and duplicates.
impl PointSink for Vec<GridPoint> {
    #[inline]
    fn emit(&mut self, point: GridPoint) {
        self.push(point);
    }
}
