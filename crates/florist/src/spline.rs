//! Interpolating cubic spline used to smooth key-point groups.
//!
//! The spline uses "not-a-knot" end conditions: the third derivative is
//! continuous across the second and the second-to-last knot. With exactly
//! four points that collapses to the single cubic through all of them.
//!
//! Algorithm:
//!   solve for the second derivative M_i at every knot (n x n system)
//!   S(x) on [x_i, x_i+1] = M_i (x_i+1 - x)^3 / 6h + M_i+1 (x - x_i)^3 / 6h
//!                          + (y_i / h - M_i h / 6) (x_i+1 - x)
//!                          + (y_i+1 / h - M_i+1 h / 6) (x - x_i)

/// Fewest knots a not-a-knot cubic can be fitted through.
const MIN_KNOTS: usize = 4;

/// A fitted cubic spline.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    /// Second derivative at each knot
    m: Vec<f64>,
}

impl CubicSpline {
    /// Fit a not-a-knot spline through `(x, y)` samples.
    ///
    /// Samples may come in any order; they are sorted by `x` first.
    /// Returns `None` with fewer than four samples, repeated `x`
    /// values or a singular system.
    pub fn not_a_knot(samples: &[(f64, f64)]) -> Option<Self> {
        let n = samples.len();
        if n < MIN_KNOTS {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
        if sorted.windows(2).any(|w| w[1].0 <= w[0].0) {
            return None;
        }

        let xs: Vec<f64> = sorted.iter().map(|s| s.0).collect();
        let ys: Vec<f64> = sorted.iter().map(|s| s.1).collect();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let mut a = vec![vec![0.0; n]; n];
        let mut b = vec![0.0; n];

        // Third derivative continuous at x_1
        a[0][0] = h[1];
        a[0][1] = -(h[0] + h[1]);
        a[0][2] = h[0];

        for i in 1..n - 1 {
            a[i][i - 1] = h[i - 1];
            a[i][i] = 2.0 * (h[i - 1] + h[i]);
            a[i][i + 1] = h[i];
            b[i] = 6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]);
        }

        // Third derivative continuous at x_{n-2}
        a[n - 1][n - 3] = h[n - 2];
        a[n - 1][n - 2] = -(h[n - 3] + h[n - 2]);
        a[n - 1][n - 1] = h[n - 3];

        let m = solve(a, b)?;
        Some(Self { xs, ys, m })
    }

    /// Evaluate the spline at `x`.
    ///
    /// Outside the knot range the first/last polynomial piece is extended.
    pub fn eval(&self, x: f64) -> f64 {
        let n = self.xs.len();
        let i = match self.xs.partition_point(|&k| k <= x) {
            0 => 0,
            p => (p - 1).min(n - 2),
        };

        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        let (m0, m1) = (self.m[i], self.m[i + 1]);
        let h = x1 - x0;
        let left = x1 - x;
        let right = x - x0;

        m0 * left.powi(3) / (6.0 * h)
            + m1 * right.powi(3) / (6.0 * h)
            + (y0 / h - m0 * h / 6.0) * left
            + (y1 / h - m1 * h / 6.0) * right
    }
}

/// Gaussian elimination with partial pivoting.
///
/// The systems here are at most a dozen rows, so a dense solve is plenty.
fn solve(mut a: Vec<Vec<f64>>, mut b: Vec<f64>) -> Option<Vec<f64>> {
    let n = b.len();

    for col in 0..n {
        let pivot = (col..n).max_by(|&r1, &r2| a[r1][col].abs().total_cmp(&a[r2][col].abs()))?;
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        b.swap(col, pivot);

        for row in col + 1..n {
            let factor = a[row][col] / a[col][col];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[row][k] -= factor * a[col][k];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut x = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[row][k] * x[k]).sum();
        x[row] = (b[row] - tail) / a[row][row];
    }
    Some(x)
}
