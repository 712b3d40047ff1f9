//! Quadrature weight construction for the solver paths.
//!
//! Each rule turns a discretization grid into the weights of a weighted
//! sum `∫ g(y) dy ≈ Σ w[j] g(y[j])`.
//!
//! # Available Rules
//!
//! | Rule | Grid requirements | Notes |
//! |------|-------------------|-------|
//! | [`QuadRule::Midpoint`] | any, ≥ 2 points | samples are cell midpoints; stable, O(h) in marching solves |
//! | [`QuadRule::Trapezoid`] | any, ≥ 2 points | O(h²); less stable in marching solves |
//! | [`QuadRule::Simpson`] | uniform, odd length ≥ 3 | O(h⁴) |
//! | [`QuadRule::Gaussian`] | ≥ 2 points (span only) | nodes replace the caller's grid |
//!
//! # Choosing a Rule
//!
//! - **Fredholm solves**: any rule; Gaussian (the default) gives the best
//!   accuracy per point but reports the solution on its own nodes.
//! - **Volterra marching solves**: midpoint or trapezoid only; the
//!   triangular structure needs weights computable row by row.

mod gauss;
mod midpoint;
mod simpson;
mod trapezoid;

pub use gauss::GaussLegendre;
pub use midpoint::midpoint_weights;
pub use simpson::simpson_weights;
pub use trapezoid::trapezoid_weights;

use std::fmt;

use crate::error::SolveResult;
use crate::grid;

/// Quadrature rule selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadRule {
    /// Midpoint rule: grid points are cell midpoints.
    Midpoint,
    /// Composite trapezoid rule.
    Trapezoid,
    /// Composite Simpson rule (odd length, uniform spacing).
    Simpson,
    /// Gauss-Legendre rule; nodes replace the caller's grid.
    Gaussian,
}

impl fmt::Display for QuadRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Midpoint => "midpoint",
            Self::Trapezoid => "trapezoid",
            Self::Simpson => "simpson",
            Self::Gaussian => "gaussian",
        };
        f.write_str(name)
    }
}

/// Nodes and weights produced for a grid under a given rule.
///
/// For midpoint, trapezoid, and Simpson the nodes are the caller's grid.
/// For the Gaussian rule the nodes are the Gauss-Legendre nodes rescaled
/// onto the grid's span, and any solution computed with them must be
/// reported on `nodes`, not on the original grid.
#[derive(Debug, Clone)]
pub struct Quadrature {
    /// Evaluation points for the integrand
    pub nodes: Vec<f64>,
    /// Weight per node
    pub weights: Vec<f64>,
}

/// Build quadrature nodes and weights for `grid` under `rule`.
///
/// # Errors
///
/// Propagates each rule's grid requirements; see [`midpoint_weights`],
/// [`trapezoid_weights`], [`simpson_weights`], and [`GaussLegendre`].
///
/// # Example
///
/// ```
/// use integr::quadrature::{weights, QuadRule};
///
/// let grid = vec![0.0, 0.25, 0.5, 0.75, 1.0];
///
/// let quad = weights(&grid, QuadRule::Trapezoid).unwrap();
/// assert_eq!(quad.nodes, grid);
///
/// // Gaussian nodes differ from the grid but cover the same span
/// let quad = weights(&grid, QuadRule::Gaussian).unwrap();
/// assert_ne!(quad.nodes, grid);
/// let mass: f64 = quad.weights.iter().sum();
/// assert!((mass - 1.0).abs() < 1e-12);
/// ```
pub fn weights(grid: &[f64], rule: QuadRule) -> SolveResult<Quadrature> {
    match rule {
        QuadRule::Midpoint => Ok(Quadrature {
            nodes: grid.to_vec(),
            weights: midpoint_weights(grid)?,
        }),
        QuadRule::Trapezoid => Ok(Quadrature {
            nodes: grid.to_vec(),
            weights: trapezoid_weights(grid)?,
        }),
        QuadRule::Simpson => Ok(Quadrature {
            nodes: grid.to_vec(),
            weights: simpson_weights(grid)?,
        }),
        QuadRule::Gaussian => {
            grid::validate(grid, 2, "weights")?;
            let gauss = GaussLegendre::new(grid.len())?.mapped_to(grid[0], grid[grid.len() - 1]);
            Ok(Quadrature {
                nodes: gauss.nodes,
                weights: gauss.weights,
            })
        }
    }
}
