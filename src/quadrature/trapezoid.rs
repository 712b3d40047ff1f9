//! Trapezoid-rule quadrature weights.
//!
//! The trapezoid rule has O(h²) accuracy for smooth integrands and is
//! valid on non-uniform grids.

use crate::error::SolveResult;
use crate::grid;

/// Compute trapezoid-rule weights for an endpoint grid.
///
/// End points receive half their adjacent spacing; interior points receive
/// the average of the two adjacent spacings. The weights sum to the grid
/// span `b - a`.
///
/// # Arguments
///
/// * `grid` - Strictly increasing sample points (length ≥ 2)
///
/// # Returns
///
/// One weight per grid point, such that `∫ g(y) dy ≈ Σ w[j] g(y[j])`.
///
/// # Errors
///
/// Returns an error if the grid has fewer than 2 points or is not strictly
/// increasing.
///
/// # Example
///
/// ```
/// use integr::quadrature::trapezoid_weights;
///
/// let grid = vec![0.0, 0.25, 0.5, 0.75, 1.0];
/// let w = trapezoid_weights(&grid).unwrap();
///
/// let mass: f64 = w.iter().sum();
/// assert!((mass - 1.0).abs() < 1e-12);
/// assert!((w[0] - 0.125).abs() < 1e-12);
/// assert!((w[2] - 0.25).abs() < 1e-12);
/// ```
pub fn trapezoid_weights(grid: &[f64]) -> SolveResult<Vec<f64>> {
    grid::validate(grid, 2, "trapezoid_weights")?;

    let n = grid.len();
    let mut w = Vec::with_capacity(n);

    w.push((grid[1] - grid[0]) / 2.0);
    for i in 1..n - 1 {
        w.push((grid[i + 1] - grid[i - 1]) / 2.0);
    }
    w.push((grid[n - 1] - grid[n - 2]) / 2.0);

    Ok(w)
}
