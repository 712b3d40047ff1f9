//! integr - Numerical solvers for linear integral equations.
//!
//! integr approximates solutions to Fredholm and Volterra integral
//! equations of the first and second kind. Given a kernel K(s,y), a
//! right-hand side f(s), and a discretization grid, each solver returns
//! the approximate solution g on that grid.
//!
//! # Modules
//!
//! - [`quadrature`] - Weight construction (midpoint, trapezoid, Simpson,
//!   Gauss-Legendre) shared by both solver paths
//! - [`fredholm`] - First-kind Fredholm solves: dense collocation system
//!   with Tikhonov regularization for the ill-posed inversion
//! - [`volterra`] - First- and second-kind Volterra solves: sequential
//!   marching over the causal (lower-triangular) structure
//! - [`grid`] - Grid validation and spacing utilities
//! - [`error`] - The [`SolveError`] type shared by all operations
//!
//! # Design
//!
//! Kernels and forcing functions are plain closures and must be pure:
//! the solvers evaluate them up to O(N²) times and assume identical
//! results on identical arguments. Every solve is a standalone pure
//! computation: no state is kept between calls, and identical inputs
//! produce identical outputs. All arithmetic is `f64`; results are
//! approximations whose accuracy depends on the rule, the grid, and (for
//! Fredholm) the regularization parameter.
//!
//! # Example
//!
//! ```
//! use integr::{solve_volterra_fn, VolterraOptions};
//!
//! // First-kind Volterra equation s = ∫₀ˢ g(y) dy, so g ≡ 1. The grid
//! // starts one step above the lower limit.
//! let n = 100;
//! let grid: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
//!
//! let g = solve_volterra_fn(|_s, _y| 1.0, |s| s, &grid, &VolterraOptions::default()).unwrap();
//! assert!(g.iter().all(|gi| (gi - 1.0).abs() < 1e-9));
//! ```

pub mod error;
pub mod fredholm;
pub mod grid;
pub mod quadrature;
pub mod volterra;

pub use error::{SolveError, SolveResult};
pub use fredholm::{FredholmOptions, FredholmSolution, Penalty, solve_fredholm, solve_fredholm_fn};
pub use quadrature::{GaussLegendre, QuadRule, Quadrature};
pub use volterra::{VolterraKind, VolterraOptions, solve_volterra, solve_volterra_fn};
