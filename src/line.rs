//! Line segment rasterization (Bresenham's algorithm).
//!
//! Selects, with integer arithmetic only, the grid cells of the discrete
//! approximation of a segment. The walk proceeds one cell per step along
//! the axis with the larger extent; an accumulated integer error decides
//! when the minor axis advances.

use std::mem;

use crate::sink::PointSink;
use crate::types::{Coord, GridPoint, Segment};

/// Rasterize a segment, collecting its cells into a `Vec`.
///
/// Convenience wrapper around [`rasterize_line_into`].
#[must_use]
pub fn rasterize_line(segment: &Segment) -> Vec<GridPoint> {
    let mut points = Vec::new();
    rasterize_line_into(segment, &mut points);
    points
}

/// Rasterize a segment into a [`PointSink`].
///
/// Endpoints are truncated to cells first. The emitted path always
/// contains both endpoint cells, has exactly `max(|dx|, |dy|) + 1` cells,
/// and consecutive cells differ by at most one in each coordinate.
/// Swapping the endpoints selects the same set of cells.
pub fn rasterize_line_into<S: PointSink>(segment: &Segment, sink: &mut S) {
    let p0 = GridPoint::from_continuous(segment.start);
    let p1 = GridPoint::from_continuous(segment.end);
    let (mut x0, mut y0) = (p0.x, p0.y);
    let (mut x1, mut y1) = (p1.x, p1.y);

    // Vertical segments, including the degenerate single-cell case, have
    // no major axis to walk; emit the column directly.
    if x0 == x1 {
        for y in y0.min(y1)..=y0.max(y1) {
            sink.emit(GridPoint::new(x0, y));
        }
        return;
    }

    let mut dx = (x1 - x0).abs();
    let mut dy = (y1 - y0).abs();

    // Steep segments are walked along y instead of x: transpose here,
    // transpose back at emission.
    let steep = dy > dx;
    if steep {
        mem::swap(&mut x0, &mut y0);
        mem::swap(&mut x1, &mut y1);
        mem::swap(&mut dx, &mut dy);
    }

    // One canonical loop: always walk the major axis left to right.
    if x0 > x1 {
        mem::swap(&mut x0, &mut x1);
        mem::swap(&mut y0, &mut y1);
    }

    let y_step: Coord = if y1 > y0 { 1 } else { -1 };
    let mut y = y0;
    let mut error: Coord = 0;

    for x in x0..=x1 {
        if steep {
            sink.emit(GridPoint::new(y, x));
        } else {
            sink.emit(GridPoint::new(x, y));
        }
        error += dy;
        if 2 * error >= dx {
            y += y_step;
            error -= dx;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
