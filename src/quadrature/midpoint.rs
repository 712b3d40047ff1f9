//! Midpoint-rule quadrature weights.
//!
//! Each sample is treated as the midpoint of its own cell, with cell edges
//! halfway between neighboring samples and one half-spacing beyond each end
//! of the grid. Midpoint is more stable than trapezoid in the marching
//! solvers but converges more slowly (O(h) vs O(h²) there).

use crate::error::SolveResult;
use crate::grid;

/// Compute midpoint-rule weights for a grid of cell midpoints.
///
/// Interior points receive `(y[i+1] - y[i-1]) / 2`; end points receive
/// their single adjacent spacing, since their cells extend a half-spacing
/// past the grid ends. On a uniform grid every weight equals `h`, so the
/// weights sum to `N·h`, the span of the cells, which reaches one
/// half-step beyond each end of the grid.
///
/// # Arguments
///
/// * `grid` - Strictly increasing sample points (length ≥ 2)
///
/// # Returns
///
/// One weight per grid point.
///
/// # Errors
///
/// Returns an error if the grid has fewer than 2 points or is not strictly
/// increasing.
///
/// # Example
///
/// ```
/// use integr::quadrature::midpoint_weights;
///
/// let grid = vec![0.125, 0.375, 0.625, 0.875]; // midpoints of 4 cells on [0, 1]
/// let w = midpoint_weights(&grid).unwrap();
///
/// let mass: f64 = w.iter().sum();
/// assert!((mass - 1.0).abs() < 1e-12);
/// assert!(w.iter().all(|wi| (wi - 0.25).abs() < 1e-12));
/// ```
pub fn midpoint_weights(grid: &[f64]) -> SolveResult<Vec<f64>> {
    grid::validate(grid, 2, "midpoint_weights")?;

    let n = grid.len();
    let mut w = Vec::with_capacity(n);

    w.push(grid[1] - grid[0]);
    for i in 1..n - 1 {
        w.push((grid[i + 1] - grid[i - 1]) / 2.0);
    }
    w.push(grid[n - 1] - grid[n - 2]);

    Ok(w)
}
