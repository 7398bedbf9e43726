//! Petal contour synthesis.
//!
//! Turns a sparse key-point template into a closed, mirrored outline:
//!
//! 1. scale every key point from the 100x100 base space to the target size
//! 2. optionally replace each smoothable group with a resampled cubic
//! 3. narrow or widen the half outline around the main diagonal
//! 4. mirror the half about the diagonal to close the ring
//!
//! # Example
//! ```
//! use florist::petal::{synthesize, PetalShape};
//! use florist::template::template;
//!
//! let shape = PetalShape::new(100).with_scale(100);
//! let contour = synthesize(template(4).unwrap(), &shape);
//! assert!(contour.is_diagonal_mirror());
//! ```

use std::collections::HashSet;

use log::debug;

use crate::geometry::{Contour, GridPoint};
use crate::spline::CubicSpline;
use crate::template::{KeyPointGroup, PetalTemplate};

/// Parameters for one petal outline.
#[derive(Debug, Clone, PartialEq)]
pub struct PetalShape {
    /// Side of the square space the petal is laid out in
    pub target_size: i32,
    /// Replace smoothable groups with resampled cubic curves
    pub smooth: bool,
    /// Narrow (true) or widen (false) the petal
    pub narrow: bool,
    /// Percentage scale: larger value = smaller petal (100 = fills target)
    pub scale: u32,
    /// Strength of the narrow/wide distortion, expected in [0, 0.6]
    pub scale_x: f64,
}

impl PetalShape {
    /// Smoothed, narrow, unscaled, undistorted petal at the given size.
    pub fn new(target_size: i32) -> Self {
        Self {
            target_size,
            smooth: true,
            narrow: true,
            scale: 100,
            scale_x: 0.0,
        }
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }

    pub fn with_narrow(mut self, narrow: bool) -> Self {
        self.narrow = narrow;
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_scale_x(mut self, scale_x: f64) -> Self {
        self.scale_x = scale_x;
        self
    }
}

/// Round half to even and convert to a grid coordinate.
///
/// The key-point tables were tuned against half-to-even rounding, so
/// `f64::round` (half away from zero) would shift a few contour pixels.
#[inline]
pub(crate) fn round_coord(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// Synthesize a closed petal contour from a template.
pub fn synthesize(template: &PetalTemplate, shape: &PetalShape) -> Contour {
    let (target, scale) = (shape.target_size as f64, shape.scale as f64);
    let scale_coord = |v: i32| round_coord(v as f64 * target / scale);

    let mut half: Vec<GridPoint> = Vec::new();
    for group in template.groups {
        let scaled: Vec<GridPoint> = group
            .points
            .iter()
            .map(|&(r, c)| GridPoint::new(scale_coord(r), scale_coord(c)))
            .collect();

        if shape.smooth && group.smoothable {
            half.extend(smooth_group(group, scaled));
        } else {
            half.extend(scaled);
        }
    }

    for p in half.iter_mut() {
        *p = distort(*p, shape);
    }

    Contour::mirrored(half)
}

/// Resample a scaled group along its cubic fit, one point per row.
///
/// Falls back to the scaled key points when rows repeat (the curve would
/// not be a function of the row) or the group is too short for a cubic.
fn smooth_group(group: &KeyPointGroup, scaled: Vec<GridPoint>) -> Vec<GridPoint> {
    let distinct_rows: HashSet<i32> = scaled.iter().map(|p| p.row).collect();
    if distinct_rows.len() != scaled.len() {
        debug!("group of {} key points has repeated rows, keeping it unsmoothed", group.points.len());
        return scaled;
    }

    let samples: Vec<(f64, f64)> = scaled.iter().map(|p| (p.row as f64, p.col as f64)).collect();
    let Some(spline) = CubicSpline::not_a_knot(&samples) else {
        debug!("group of {} key points cannot carry a cubic fit, keeping it unsmoothed", scaled.len());
        return scaled;
    };

    // Resampling always runs first -> last in authored order, which is
    // empty when a group ends on a lower row than it starts.
    let (first, last) = (scaled[0].row, scaled[scaled.len() - 1].row);
    (first..=last)
        .map(|row| GridPoint::new(row, round_coord(spline.eval(row as f64))))
        .collect()
}

/// Pull a point toward (narrow) or push it away from (wide) the diagonal.
///
/// The pull grows with the point's distance from the diagonal.
#[inline]
fn distort(p: GridPoint, shape: &PetalShape) -> GridPoint {
    let (r, c) = (p.row as f64, p.col as f64);
    let shrink = 1.0 - ((r - c).abs() / shape.target_size as f64) * shape.scale_x;

    if shape.narrow {
        GridPoint::new(round_coord(r * shrink), round_coord(c * shrink))
    } else {
        GridPoint::new(round_coord(r / shrink), round_coord(c / shrink))
    }
}

// ============================================================================
// TESTS
// ============================================================================
