//! Core geometry types for florist.
//!
//! Petal contours live on the integer pixel grid. A point is written as
//! `(row, col)` to match the key-point tables, but when it reaches the
//! canvas the first coordinate becomes the raster x axis and the second
//! the raster y axis.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! `#[derive(...)]` auto-generates common functionality:
//! - `Debug` = print with `{:?}`
//! - `Clone` / `Copy` = duplicate the value (Copy: implicitly, small values only)
//! - `PartialEq` / `Eq` = compare with `==`
//! - `Serialize` = serde can turn it into JSON for contour dumps

use serde::Serialize;

/// A point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

/// One ordered group of interior points that shares a gradient step.
///
/// The order of buckets decides where along the gradient each group lands.
pub type Bucket = Vec<GridPoint>;

/// A closed petal outline.
///
/// The last point connects back to the first; the ring is never stored
/// with a duplicated closing vertex.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    pub points: Vec<GridPoint>,
}

impl GridPoint {
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Reflection about the main diagonal: `(r, c) -> (c, r)`.
    #[inline]
    pub fn transposed(self) -> Self {
        Self::new(self.col, self.row)
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: GridPoint) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl Contour {
    pub fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    /// Build the full ring from a half outline.
    ///
    /// The half is followed by its own reflection about the main diagonal,
    /// walked backwards, so the petal is axially symmetric.
    pub fn mirrored(half: Vec<GridPoint>) -> Self {
        let mut points = Vec::with_capacity(half.len() * 2);
        points.extend_from_slice(&half);
        points.extend(half.iter().rev().map(|p| p.transposed()));
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether the second half is the reversed reflection of the first.
    pub fn is_diagonal_mirror(&self) -> bool {
        let n = self.points.len();
        if n % 2 != 0 {
            return false;
        }
        let (first, second) = self.points.split_at(n / 2);
        first
            .iter()
            .rev()
            .zip(second)
            .all(|(a, b)| a.transposed() == *b)
    }

    /// Get the bounding box as (min_row, min_col, max_row, max_col).
    pub fn bounding_box(&self) -> Option<(i32, i32, i32, i32)> {
        if self.points.is_empty() {
            return None;
        }

        let min_row = self.points.iter().map(|p| p.row).min()?;
        let min_col = self.points.iter().map(|p| p.col).min()?;
        let max_row = self.points.iter().map(|p| p.row).max()?;
        let max_col = self.points.iter().map(|p| p.col).max()?;

        Some((min_row, min_col, max_row, max_col))
    }

    /// Signed area using the shoelace formula.
    ///
    /// The sign only tells the winding direction; a petal has a non-zero
    /// area whenever its two halves actually separate.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }

        let mut area = 0.0;
        for i in 0..n {
            let j = (i + 1) % n;
            area += self.points[i].row as f64 * self.points[j].col as f64;
            area -= self.points[j].row as f64 * self.points[i].col as f64;
        }
        area / 2.0
    }

    /// Apply a point mapping to every vertex.
    pub fn map<F>(&self, f: F) -> Contour
    where
        F: Fn(GridPoint) -> GridPoint,
    {
        Contour {
            points: self.points.iter().copied().map(f).collect(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
