//! Strict point-in-contour test.
//!
//! This is the HOT PATH - every traversal asks it once per candidate pixel,
//! so a 300px canvas means ~90 000 calls per petal level.

use crate::geometry::{Contour, GridPoint};

// ============================================================================
// POINT IN POLYGON (Ray Casting Algorithm)
// ============================================================================
//
// ## Rust Lesson #8: References & Slices
//
// `&[GridPoint]` is a "slice" - a borrowed view into a contiguous sequence.
// It works with Vec<GridPoint>, arrays, or any contiguous memory.

/// Test if a point lies on the contour outline itself.
///
/// Integer vertices make this exact: the point is on an edge when the
/// cross product vanishes and it sits inside the edge's bounding box.
#[inline]
pub fn point_on_outline(point: GridPoint, ring: &[GridPoint]) -> bool {
    let n = ring.len();
    if n == 0 {
        return false;
    }

    let (px, py) = (point.row as i64, point.col as i64);
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].row as i64, ring[i].col as i64);
        let (xj, yj) = (ring[j].row as i64, ring[j].col as i64);

        let cross = (xj - xi) * (py - yi) - (yj - yi) * (px - xi);
        if cross == 0
            && px >= xi.min(xj)
            && px <= xi.max(xj)
            && py >= yi.min(yj)
            && py <= yi.max(yj)
        {
            return true;
        }

        j = i;
    }

    false
}

/// Test if a point is inside a ring using ray casting.
///
/// Casts a ray along +row and counts edge crossings.
/// Odd crossings = inside, even = outside. Points on the outline give an
/// unspecified answer; use [`strictly_inside`] when that matters.
#[inline]
pub fn point_in_ring(point: GridPoint, ring: &[GridPoint]) -> bool {
    let n = ring.len();
    if n < 3 {
        return false;
    }

    let (px, py) = (point.row as f64, point.col as f64);
    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (ring[i].row as f64, ring[i].col as f64);
        let (xj, yj) = (ring[j].row as f64, ring[j].col as f64);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// True iff `point` is strictly inside `contour` (outline points excluded).
#[inline]
pub fn strictly_inside(contour: &Contour, point: GridPoint) -> bool {
    !point_on_outline(point, &contour.points) && point_in_ring(point, &contour.points)
}

// ============================================================================
// TESTS
// ============================================================================
