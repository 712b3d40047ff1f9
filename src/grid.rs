//! Grid validation and spacing utilities shared by the solver paths.

use crate::error::{SolveError, SolveResult};

/// Relative tolerance used when checking for uniform spacing.
pub const SPACING_RTOL: f64 = 1e-10;

/// Check that `grid` has at least `min_len` points and is strictly increasing.
///
/// # Errors
///
/// Returns [`SolveError::InvalidGrid`] if the grid is too short or any
/// consecutive pair is not strictly increasing (NaN values fail this check).
pub fn validate(grid: &[f64], min_len: usize, context: &str) -> SolveResult<()> {
    if grid.len() < min_len {
        return Err(SolveError::InvalidGrid {
            context: format!(
                "{}: need at least {} grid points (got {})",
                context,
                min_len,
                grid.len()
            ),
        });
    }

    for i in 0..grid.len() - 1 {
        if !(grid[i] < grid[i + 1]) {
            return Err(SolveError::InvalidGrid {
                context: format!(
                    "{}: grid must be strictly increasing (violated at index {})",
                    context, i
                ),
            });
        }
    }

    Ok(())
}

/// Return the spacing of a uniformly-spaced grid.
///
/// The grid must already be validated. Spacing is compared against the
/// first interval with relative tolerance [`SPACING_RTOL`].
///
/// # Errors
///
/// Returns [`SolveError::NonUniformGrid`] naming the first interval whose
/// spacing deviates.
pub fn uniform_spacing(grid: &[f64], context: &str) -> SolveResult<f64> {
    let h = grid[1] - grid[0];
    for i in 1..grid.len() - 1 {
        let hi = grid[i + 1] - grid[i];
        if (hi - h).abs() > SPACING_RTOL * h.abs() {
            return Err(SolveError::NonUniformGrid {
                index: i,
                context: context.to_string(),
            });
        }
    }
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_increasing_grid() {
        let grid = vec![0.0, 0.5, 1.0, 2.0];
        assert!(validate(&grid, 2, "test").is_ok());
    }

    #[test]
    fn test_validate_rejects_short_grid() {
        let grid = vec![0.0];
        assert!(validate(&grid, 2, "test").is_err());
    }

    #[test]
    fn test_validate_rejects_non_monotonic_grid() {
        let grid = vec![0.0, 1.0, 0.5];
        assert!(validate(&grid, 2, "test").is_err());

        // Repeated points are not strictly increasing
        let grid = vec![0.0, 1.0, 1.0];
        assert!(validate(&grid, 2, "test").is_err());

        // NaN fails the comparison
        let grid = vec![0.0, f64::NAN, 1.0];
        assert!(validate(&grid, 2, "test").is_err());
    }

    #[test]
    fn test_uniform_spacing() {
        let n = 11;
        let grid: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
        let h = uniform_spacing(&grid, "test").unwrap();
        assert!((h - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_uniform_spacing_rejects_irregular_grid() {
        let grid = vec![0.0, 1.0, 3.0];
        let err = uniform_spacing(&grid, "test").unwrap_err();
        match err {
            crate::error::SolveError::NonUniformGrid { index, .. } => assert_eq!(index, 1),
            other => panic!("expected NonUniformGrid, got {:?}", other),
        }
    }
}
