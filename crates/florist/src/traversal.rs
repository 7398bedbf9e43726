//! Interior point traversals.
//!
//! A traversal walks the canvas in a fixed order and groups the pixels that
//! lie strictly inside a contour into buckets. Bucket order is gradient
//! order, so the traversal decides which way the color sweeps:
//!
//! - `top_down`: one bucket per row, sweeping across the petal
//! - `diagonal`: one bucket per anti-diagonal, started from two borders
//! - `center`: one bucket per ray from an interior center to the border

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::fill::FillPolicy;
use crate::geometry::{Bucket, Contour, GridPoint};
use crate::inside::strictly_inside;
use crate::petal::round_coord;

/// Available gradient fill types.
///
/// Chosen once per drawing session; every petal of every level uses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillType {
    TopDown,
    Diagonal,
    #[default]
    Center,
}

impl FillType {
    /// Get all available fill types.
    pub fn all() -> &'static [FillType] {
        &[FillType::TopDown, FillType::Diagonal, FillType::Center]
    }

    /// Get fill type name as string.
    pub fn name(&self) -> &'static str {
        match self {
            FillType::TopDown => "top_down",
            FillType::Diagonal => "diagonal",
            FillType::Center => "center",
        }
    }

    /// Parse fill type from string.
    pub fn from_name(name: &str) -> Option<FillType> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "top_down" | "rows" => Some(FillType::TopDown),
            "diagonal" => Some(FillType::Diagonal),
            "center" | "radial" => Some(FillType::Center),
            _ => None,
        }
    }

    /// The paint policy this traversal is paired with.
    pub fn policy(&self) -> FillPolicy {
        match self {
            FillType::TopDown | FillType::Diagonal => FillPolicy::Uniform,
            FillType::Center => FillPolicy::PerBucket,
        }
    }

    /// Enumerate the interior of `contour` in this fill type's order.
    ///
    /// `canvas_size` is the side of the square coordinate space the contour
    /// lives in. Only `center` consumes randomness (its ray origin).
    pub fn buckets<R: Rng>(
        &self,
        contour: &Contour,
        canvas_size: i32,
        rng: &mut R,
    ) -> Vec<Bucket> {
        match self {
            FillType::TopDown => top_down(contour, canvas_size),
            FillType::Diagonal => diagonal(contour, canvas_size),
            FillType::Center => {
                let center = random_center(canvas_size, rng);
                radial(contour, canvas_size, center)
            }
        }
    }
}

impl std::fmt::Display for FillType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for FillType {
    type Err = crate::error::FlowerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FillType::from_name(s).ok_or_else(|| crate::error::FlowerError::UnknownFillType(s.to_string()))
    }
}

/// Push a bucket unless it is empty.
#[inline]
fn keep(buckets: &mut Vec<Bucket>, bucket: Bucket) {
    if !bucket.is_empty() {
        buckets.push(bucket);
    }
}

/// One bucket per row, columns in increasing order.
pub fn top_down(contour: &Contour, canvas_size: i32) -> Vec<Bucket> {
    let mut buckets = Vec::new();
    for row in 0..canvas_size {
        let bucket: Bucket = (0..canvas_size)
            .map(|col| GridPoint::new(row, col))
            .filter(|&p| strictly_inside(contour, p))
            .collect();
        keep(&mut buckets, bucket);
    }
    buckets
}

/// Anti-diagonal buckets started from two opposite borders.
///
/// Pass 1 starts at `(r, 0)` and climbs `(-1, +1)` until it leaves the top;
/// pass 2 starts at `(r, N-1)` and descends `(+1, -1)` until it leaves the
/// bottom.
pub fn diagonal(contour: &Contour, canvas_size: i32) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    for start in 0..canvas_size {
        let bucket: Bucket = (0..=start)
            .map(|k| GridPoint::new(start - k, k))
            .filter(|&p| strictly_inside(contour, p))
            .collect();
        keep(&mut buckets, bucket);
    }

    for start in 0..canvas_size {
        let bucket: Bucket = (0..canvas_size - start)
            .map(|k| GridPoint::new(start + k, canvas_size - 1 - k))
            .filter(|&p| strictly_inside(contour, p))
            .collect();
        keep(&mut buckets, bucket);
    }

    buckets
}

/// Pick a ray origin in the middle third of the canvas.
pub fn random_center<R: Rng>(canvas_size: i32, rng: &mut R) -> GridPoint {
    let lo = canvas_size / 3;
    let hi = 2 * canvas_size / 3;
    let mut pick = || if lo < hi { rng.random_range(lo..hi) } else { lo };
    let row = pick();
    let col = pick();
    GridPoint::new(row, col)
}

/// Every border point, edge by edge.
fn border_points(canvas_size: i32) -> impl Iterator<Item = GridPoint> {
    let last = canvas_size - 1;
    let top = (0..canvas_size).map(|i| GridPoint::new(0, i));
    let bottom = (0..canvas_size).map(move |i| GridPoint::new(last, i));
    let left = (0..canvas_size).map(|i| GridPoint::new(i, 0));
    let right = (0..canvas_size).map(move |i| GridPoint::new(i, last));
    top.chain(bottom).chain(left).chain(right)
}

/// One bucket per ray from `center` to each border point.
///
/// Rays are sampled in unit steps, so one sample lands near every integer
/// radius and the gradient runs outward along each ray.
pub fn radial(contour: &Contour, canvas_size: i32, center: GridPoint) -> Vec<Bucket> {
    let mut buckets = Vec::new();

    for target in border_points(canvas_size) {
        let dist = center.distance(target);
        let (step_r, step_c) = if dist > 0.0 {
            (
                (target.row - center.row) as f64 / dist,
                (target.col - center.col) as f64 / dist,
            )
        } else {
            (0.0, 0.0)
        };

        let bucket: Bucket = (0..=dist.floor() as i32)
            .map(|k| {
                GridPoint::new(
                    round_coord(center.row as f64 + k as f64 * step_r),
                    round_coord(center.col as f64 + k as f64 * step_c),
                )
            })
            .filter(|&p| strictly_inside(contour, p))
            .collect();
        keep(&mut buckets, bucket);
    }

    buckets
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn square(lo: i32, hi: i32) -> Contour {
        Contour::new(vec![
            GridPoint::new(lo, lo),
            GridPoint::new(hi, lo),
            GridPoint::new(hi, hi),
            GridPoint::new(lo, hi),
        ])
    }

    fn diamond(cx: i32, cy: i32, r: i32) -> Contour {
        Contour::new(vec![
            GridPoint::new(cx - r, cy),
            GridPoint::new(cx, cy + r),
            GridPoint::new(cx + r, cy),
            GridPoint::new(cx, cy - r),
        ])
    }

    fn total(buckets: &[Bucket]) -> usize {
        buckets.iter().map(|b| b.len()).sum()
    }

    #[test]
    fn names_round_trip() {
        for ft in FillType::all() {
            assert_eq!(FillType::from_name(ft.name()), Some(*ft));
            assert_eq!(ft.name().parse::<FillType>().unwrap(), *ft);
        }
        assert_eq!(FillType::from_name("TOP-DOWN"), Some(FillType::TopDown));
        assert!("spiral".parse::<FillType>().is_err());
    }

    #[test]
    fn policies_pair_with_traversals() {
        assert_eq!(FillType::TopDown.policy(), FillPolicy::Uniform);
        assert_eq!(FillType::Diagonal.policy(), FillPolicy::Uniform);
        assert_eq!(FillType::Center.policy(), FillPolicy::PerBucket);
    }

    #[test]
    fn top_down_rows_and_columns_increase() {
        let contour = diamond(20, 20, 12);
        let buckets = top_down(&contour, 40);
        assert!(!buckets.is_empty());

        for pair in buckets.windows(2) {
            assert!(pair[0][0].row < pair[1][0].row);
        }
        for bucket in &buckets {
            assert!(bucket.iter().all(|p| p.row == bucket[0].row));
            for pair in bucket.windows(2) {
                assert!(pair[0].col < pair[1].col);
            }
        }
    }

    #[test]
    fn top_down_covers_strict_interior() {
        let buckets = top_down(&square(2, 8), 12);
        // Rows 3..=7, columns 3..=7
        assert_eq!(buckets.len(), 5);
        assert_eq!(total(&buckets), 25);
        assert_eq!(buckets[0][0], GridPoint::new(3, 3));
    }

    #[test]
    fn diagonal_buckets_are_anti_diagonals() {
        let buckets = diagonal(&square(2, 8), 12);
        // 25 interior cells; the r + c = 11 diagonal is walked by both passes
        assert_eq!(total(&buckets), 29);
        for bucket in &buckets {
            let sum = bucket[0].row + bucket[0].col;
            assert!(bucket.iter().all(|p| p.row + p.col == sum));
        }
    }

    #[test]
    fn diagonal_pass_one_climbs_from_left_border() {
        let buckets = diagonal(&square(0, 4), 5);
        assert_eq!(buckets[0], vec![GridPoint::new(1, 1)]);
        assert_eq!(buckets[1], vec![GridPoint::new(2, 1), GridPoint::new(1, 2)]);
    }

    #[test]
    fn diagonal_pass_two_descends_from_right_border() {
        let buckets = diagonal(&square(0, 4), 5);
        assert_eq!(buckets.len(), 6);
        assert_eq!(
            buckets[3],
            vec![GridPoint::new(1, 3), GridPoint::new(2, 2), GridPoint::new(3, 1)]
        );
        assert_eq!(buckets[4], vec![GridPoint::new(2, 3), GridPoint::new(3, 2)]);
        assert_eq!(buckets[5], vec![GridPoint::new(3, 3)]);
    }

    #[test]
    fn empty_contour_gives_no_buckets() {
        let contour = Contour::default();
        assert!(top_down(&contour, 10).is_empty());
        assert!(diagonal(&contour, 10).is_empty());
        assert!(radial(&contour, 10, GridPoint::new(5, 5)).is_empty());
    }

    #[test]
    fn radial_buckets_start_at_center() {
        let contour = square(20, 280);
        let center = GridPoint::new(150, 150);
        let buckets = radial(&contour, 300, center);

        assert!(!buckets.is_empty());
        for bucket in &buckets {
            assert!(bucket[0].distance(center) <= 2.0, "bucket starts at {:?}", bucket[0]);
        }
    }

    #[test]
    fn radial_rays_move_outward() {
        let center = GridPoint::new(50, 50);
        let buckets = radial(&diamond(50, 50, 40), 100, center);
        for bucket in &buckets {
            for pair in bucket.windows(2) {
                assert!(pair[1].distance(center) + 1.0 >= pair[0].distance(center));
            }
        }
    }

    #[test]
    fn random_center_stays_in_middle_third() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let c = random_center(300, &mut rng);
            assert!((100..200).contains(&c.row));
            assert!((100..200).contains(&c.col));
        }
        // Tiny canvases cannot panic
        assert_eq!(random_center(2, &mut rng), GridPoint::new(0, 0));
    }

    #[test]
    fn fill_type_dispatch_matches_free_functions() {
        let contour = diamond(15, 15, 10);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(FillType::TopDown.buckets(&contour, 30, &mut rng), top_down(&contour, 30));
        assert_eq!(FillType::Diagonal.buckets(&contour, 30, &mut rng), diagonal(&contour, 30));

        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        let center = random_center(30, &mut a);
        assert_eq!(FillType::Center.buckets(&contour, 30, &mut b), radial(&contour, 30, center));
    }
}
