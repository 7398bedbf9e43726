//! Contour-bounded gradient fill.
//!
//! The petal has already been rasterized: its interior filled with a blank
//! placeholder color and its outline stroked. This module paints the
//! gradient over the placeholder, bucket by bucket.
//!
//! Every write is guarded by "is this pixel still blank?". That single rule
//! keeps the gradient inside the stroke, stops it from bleeding into earlier
//! petals and makes a second fill pass a no-op.

use crate::canvas::Canvas;
use crate::color::{split_colors, Color};
use crate::geometry::{Bucket, GridPoint};

/// How gradient colors are assigned to buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillPolicy {
    /// One gradient across all buckets; every point in a bucket shares a color.
    Uniform,
    /// A separate gradient along each bucket, one color per point.
    PerBucket,
}

/// Image `(row, col)` offsets painted around each uniform-fill point.
const UNIFORM_FOOTPRINT: [(i32, i32); 3] = [(0, 0), (1, 1), (0, 1)];

/// Image `(row, col)` offsets painted around each per-bucket point.
const PER_BUCKET_FOOTPRINT: [(i32, i32); 9] = [
    (0, 0),
    (1, 1),
    (0, 1),
    (1, 0),
    (-1, -1),
    (0, -1),
    (-1, 0),
    (-1, 1),
    (1, -1),
];

impl FillPolicy {
    /// Neighbor offsets tried around every painted point.
    ///
    /// The rasterizer leaves a thin unfilled rim along the outline that the
    /// interior test (run against the exact contour) never reaches; the
    /// footprint closes it.
    pub fn footprint(&self) -> &'static [(i32, i32)] {
        match self {
            FillPolicy::Uniform => &UNIFORM_FOOTPRINT,
            FillPolicy::PerBucket => &PER_BUCKET_FOOTPRINT,
        }
    }
}

/// The two gradient endpoints plus the placeholder they paint over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient {
    pub from: Color,
    pub to: Color,
    /// Sentinel marking "not painted yet"; must differ from both endpoints
    /// and from the outline color
    pub blank: Color,
}

/// Paint `buckets` onto `canvas` with a gradient.
///
/// Returns the number of pixels actually painted.
pub fn fill_gradient(canvas: &mut Canvas, buckets: &[Bucket], gradient: &Gradient, policy: FillPolicy) -> usize {
    let footprint = policy.footprint();
    let mut painted = 0;

    match policy {
        FillPolicy::Uniform => {
            let colors = split_colors(buckets.len(), gradient.from, gradient.to);
            for (bucket, color) in buckets.iter().zip(colors) {
                for &point in bucket {
                    painted += paint_point(canvas, point, color, gradient.blank, footprint);
                }
            }
        }
        FillPolicy::PerBucket => {
            for bucket in buckets {
                let colors = split_colors(bucket.len(), gradient.from, gradient.to);
                for (&point, color) in bucket.iter().zip(colors) {
                    painted += paint_point(canvas, point, color, gradient.blank, footprint);
                }
            }
        }
    }

    painted
}

/// Paint one grid point and its footprint, each pixel guarded separately.
///
/// Grid `(r, c)` lands on image row `c`, column `r`.
#[inline]
fn paint_point(canvas: &mut Canvas, point: GridPoint, color: Color, blank: Color, footprint: &[(i32, i32)]) -> usize {
    footprint
        .iter()
        .filter(|&&(d_row, d_col)| {
            let (y, x) = (point.col + d_row, point.row + d_col);
            canvas.paint_if_blank(x, y, color, blank)
        })
        .count()
}

// ============================================================================
// TESTS
// ============================================================================
