//! Circle outline rasterization (midpoint circle algorithm).
//!
//! Sweeps one octant with an integer decision parameter and reflects each
//! swept cell into all eight octants. Cells where octants meet are emitted
//! once per reflection, not collapsed; sinks that want unique cells
//! deduplicate themselves.

use crate::error::RasterError;
use crate::sink::PointSink;
use crate::types::{Circle, Coord, GridPoint};

/// The eight reflections of the octant offset `(x, y)` around `center`.
///
/// Where the offsets coincide (`x == y`, or either is zero) some of the
/// eight cells are equal; they are returned as-is.
#[must_use]
pub fn octant_reflections(center: GridPoint, x: Coord, y: Coord) -> [GridPoint; 8] {
    let GridPoint { x: cx, y: cy } = center;
    [
        GridPoint::new(cx + x, cy + y),
        GridPoint::new(cx - x, cy + y),
        GridPoint::new(cx + x, cy - y),
        GridPoint::new(cx - x, cy - y),
        GridPoint::new(cx + y, cy + x),
        GridPoint::new(cx - y, cy + x),
        GridPoint::new(cx + y, cy - x),
        GridPoint::new(cx - y, cy - x),
    ]
}

/// Rasterize a circle outline, collecting its cells into a `Vec`.
///
/// Convenience wrapper around [`rasterize_circle_into`]. Returns
/// [`RasterError::NegativeRadius`] if `circle.radius < 0`.
pub fn rasterize_circle(circle: &Circle) -> Result<Vec<GridPoint>, RasterError> {
    let mut points = Vec::new();
    rasterize_circle_into(circle, &mut points)?;
    Ok(points)
}

/// Rasterize a circle outline into a [`PointSink`].
///
/// Every emitted cell lies within one cell of the true circle. A zero
/// radius collapses every reflection onto the center, which is emitted
/// once per reflection. A negative radius is rejected before anything is
/// emitted.
pub fn rasterize_circle_into<S: PointSink>(
    circle: &Circle,
    sink: &mut S,
) -> Result<(), RasterError> {
    if circle.radius < 0 {
        return Err(RasterError::NegativeRadius(circle.radius));
    }

    let mut x: Coord = 0;
    let mut y = circle.radius;
    let mut d = 3 - 2 * circle.radius;

    for p in octant_reflections(circle.center, x, y) {
        sink.emit(p);
    }

    // With r = 0 there is nothing to sweep: the loop below would step x
    // past y and emit cells off the circle.
    if circle.radius == 0 {
        return Ok(());
    }

    while x <= y {
        if d < 0 {
            d += 4 * x + 6;
        } else {
            d += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
        for p in octant_reflections(circle.center, x, y) {
            sink.emit(p);
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn distinct(points: &[GridPoint]) -> HashSet<GridPoint> {
        points.iter().copied().collect()
    }

    #[test]
    fn octant_reflections_around_origin() {
        let points = octant_reflections(GridPoint::new(0, 0), 1, 2);
        assert_eq!(
            points,
            [
                GridPoint::new(1, 2),
                GridPoint::new(-1, 2),
                GridPoint::new(1, -2),
                GridPoint::new(-1, -2),
                GridPoint::new(2, 1),
                GridPoint::new(-2, 1),
                GridPoint::new(2, -1),
                GridPoint::new(-2, -1),
            ]
        );
    }

    #[test]
    fn zero_radius_collapses_to_center() {
        let center = GridPoint::new(12, -7);
        let points = rasterize_circle(&Circle::new(center, 0)).unwrap();
        // Every reflection lands on the center; all eight are kept.
        assert_eq!(points, vec![center; 8]);
    }

    #[test]
    fn negative_radius_is_rejected() {
        let result = rasterize_circle(&Circle::new(GridPoint::new(0, 0), -1));
        assert_eq!(result, Err(RasterError::NegativeRadius(-1)));
    }

    #[test]
    fn negative_radius_emits_nothing() {
        let mut sink: Vec<GridPoint> = Vec::new();
        let result = rasterize_circle_into(&Circle::new(GridPoint::new(3, 3), -5), &mut sink);
        assert!(result.is_err());
        assert!(sink.is_empty());
    }

    #[test]
    fn unit_circle_cells() {
        let points = rasterize_circle(&Circle::new(GridPoint::new(0, 0), 1)).unwrap();
        // Two expansions of four distinct cells each.
        assert_eq!(points.len(), 16);
        let expected: HashSet<GridPoint> = [
            GridPoint::new(1, 0),
            GridPoint::new(-1, 0),
            GridPoint::new(0, 1),
            GridPoint::new(0, -1),
        ]
        .into_iter()
        .collect();
        assert_eq!(distinct(&points), expected);
    }

    #[test]
    fn radius_two_cells() {
        let points = rasterize_circle(&Circle::new(GridPoint::new(0, 0), 2)).unwrap();
        let cells = distinct(&points);
        assert_eq!(cells.len(), 12);
        for p in &cells {
            let r = ((p.x * p.x + p.y * p.y) as f64).sqrt();
            assert!((r - 2.0).abs() < 1.0, "cell {p:?} off the ring: r = {r}");
        }
    }

    #[test]
    fn demo_circle_stays_on_ring() {
        let center = GridPoint::new(40, 30);
        let points = rasterize_circle(&Circle::new(center, 20)).unwrap();
        for p in &points {
            let dist = p.to_continuous().distance(center.to_continuous());
            let rounded = dist.round() as Coord;
            assert!(
                (19..=21).contains(&rounded),
                "cell {p:?} at distance {dist} from center"
            );
        }
    }

    #[test]
    fn demo_circle_is_reflection_symmetric() {
        let center = GridPoint::new(40, 30);
        let cells = distinct(&rasterize_circle(&Circle::new(center, 20)).unwrap());
        for p in &cells {
            let mirrored_x = GridPoint::new(2 * center.x - p.x, p.y);
            let mirrored_y = GridPoint::new(p.x, 2 * center.y - p.y);
            assert!(cells.contains(&mirrored_x), "missing x mirror of {p:?}");
            assert!(cells.contains(&mirrored_y), "missing y mirror of {p:?}");
        }
    }

    #[test]
    fn seam_duplicates_are_preserved() {
        let points = rasterize_circle(&Circle::new(GridPoint::new(0, 0), 1)).unwrap();
        let emitted = points.len();
        let unique = distinct(&points).len();
        assert!(emitted > unique, "expected duplicate emissions at octant seams");
    }
}
