//! Simpson-rule quadrature weights.
//!
//! Simpson's rule fits parabolas through consecutive point triples,
//! achieving O(h⁴) accuracy for smooth integrands. The composite rule
//! needs an even number of intervals (odd number of points) and uniform
//! spacing.

use crate::error::{SolveError, SolveResult};
use crate::grid;

/// Compute composite Simpson-rule weights.
///
/// Weights follow the canonical `1, 4, 2, 4, …, 4, 1` pattern scaled by
/// `h/3` and sum to the grid span `b - a`.
///
/// # Arguments
///
/// * `grid` - Strictly increasing, uniformly spaced sample points with an
///   odd length ≥ 3
///
/// # Returns
///
/// One weight per grid point.
///
/// # Errors
///
/// Returns an error if:
/// - The grid has fewer than 3 points or an even length
/// - The grid is not strictly increasing
/// - The spacing is not uniform within tolerance
///
/// # Example
///
/// ```
/// use integr::quadrature::simpson_weights;
///
/// let grid = vec![0.0, 0.25, 0.5, 0.75, 1.0];
/// let w = simpson_weights(&grid).unwrap();
///
/// let mass: f64 = w.iter().sum();
/// assert!((mass - 1.0).abs() < 1e-12);
///
/// // Even-length grids are rejected
/// assert!(simpson_weights(&[0.0, 0.5, 1.0, 1.5]).is_err());
/// ```
pub fn simpson_weights(grid: &[f64]) -> SolveResult<Vec<f64>> {
    grid::validate(grid, 3, "simpson_weights")?;

    let n = grid.len();
    if n % 2 == 0 {
        return Err(SolveError::InvalidGrid {
            context: format!(
                "simpson_weights: need an odd number of points (got {})",
                n
            ),
        });
    }

    let h = grid::uniform_spacing(grid, "simpson_weights")?;

    let mut w = Vec::with_capacity(n);
    w.push(h / 3.0);
    for i in 1..n - 1 {
        if i % 2 == 1 {
            w.push(4.0 * h / 3.0);
        } else {
            w.push(2.0 * h / 3.0);
        }
    }
    w.push(h / 3.0);

    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simpson_weight_pattern() {
        let grid = vec![0.0, 1.0, 2.0, 3.0, 4.0];
        let w = simpson_weights(&grid).unwrap();

        let expected = [1.0 / 3.0, 4.0 / 3.0, 2.0 / 3.0, 4.0 / 3.0, 1.0 / 3.0];
        for (wi, ei) in w.iter().zip(&expected) {
            assert!((wi - ei).abs() < 1e-12, "got {:?}", w);
        }
    }

    #[test]
    fn test_simpson_mass() {
        let n = 11;
        let grid: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let w = simpson_weights(&grid).unwrap();

        let mass: f64 = w.iter().sum();
        assert!((mass - 1.0).abs() < 1e-12, "mass = {}", mass);
    }

    #[test]
    fn test_simpson_integrates_cubic_exactly() {
        // ∫ y³ dy over [0, 1] = 1/4; Simpson is exact up to degree 3
        let n = 5;
        let grid: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let w = simpson_weights(&grid).unwrap();

        let integral: f64 = w
            .iter()
            .zip(&grid)
            .map(|(wi, yi)| wi * yi.powi(3))
            .sum();
        assert!((integral - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_simpson_rejects_even_length() {
        let grid = vec![0.0, 1.0, 2.0, 3.0];
        let err = simpson_weights(&grid).unwrap_err();
        assert!(matches!(err, SolveError::InvalidGrid { .. }));
    }

    #[test]
    fn test_simpson_rejects_non_uniform_grid() {
        let grid = vec![0.0, 1.0, 3.0, 4.0, 5.0];
        let err = simpson_weights(&grid).unwrap_err();
        assert!(matches!(err, SolveError::NonUniformGrid { .. }));
    }

    #[test]
    fn test_simpson_rejects_short_grid() {
        assert!(simpson_weights(&[0.0, 1.0]).is_err());
    }
}
