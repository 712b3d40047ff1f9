//! Fredholm integral equations of the first kind.
//!
//! Solves f(s) = ∫ₐᵇ K(s,y) g(y) dy for g by collocation: a quadrature
//! rule turns the integral into a weighted sum, giving the dense linear
//! system A g = f with A[i][j] = w[j]·K(s_i, y_j).
//!
//! First-kind problems are ill-posed: A is typically near-singular, and
//! small perturbations of f blow up under plain inversion. The solver
//! therefore never inverts A directly; it solves the Tikhonov-regularized
//! normal equations (AᵀA + λL) g = Aᵀf, trading fidelity to f for
//! stability of g. Results are approximations whose accuracy depends on
//! the rule, the grid, and λ; nothing here is exact.

use nalgebra::{DMatrix, DVector};

use crate::error::{SolveError, SolveResult};
use crate::grid;
use crate::quadrature::{self, QuadRule};

/// Fraction of the squared Frobenius norm of A used for the default
/// regularization parameter.
const DEFAULT_REG_FRACTION: f64 = 1e-3;

/// Regularization penalty operator L in (AᵀA + λL) g = Aᵀf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Penalty {
    /// Second-difference smoothing matrix H = DᵀD (Twomey 1963):
    /// penalizes curvature of g, leaving constant and linear solutions
    /// unpenalized.
    #[default]
    SecondDifference,
    /// Identity: classic damped least squares, penalizes the norm of g.
    Identity,
}

/// Options for the Fredholm solver.
#[derive(Debug, Clone)]
pub struct FredholmOptions {
    /// Quadrature rule (default: Gaussian). With the Gaussian rule the
    /// solution is reported on the rescaled Gauss-Legendre nodes, not on
    /// the caller's grid.
    pub rule: QuadRule,
    /// Regularization parameter λ ≥ 0. `None` selects a deterministic
    /// default: a small fixed fraction of ‖A‖²_F, an upper bound on the
    /// largest squared singular value of A.
    pub reg_param: Option<f64>,
    /// Penalty operator (default: second-difference smoothing).
    pub penalty: Penalty,
}

impl Default for FredholmOptions {
    fn default() -> Self {
        Self {
            rule: QuadRule::Gaussian,
            reg_param: None,
            penalty: Penalty::SecondDifference,
        }
    }
}

/// Solution of a Fredholm solve.
#[derive(Debug, Clone)]
pub struct FredholmSolution {
    /// Grid the solution is aligned to: the caller's grid, or the
    /// rescaled Gauss-Legendre nodes when the Gaussian rule was used
    pub grid: Vec<f64>,
    /// Solution values, one per grid point
    pub values: Vec<f64>,
}

/// Solve a first-kind Fredholm equation by regularized collocation.
///
/// The kernel must be a pure function of its arguments; it is evaluated
/// O(N²) times during assembly. The whole solve is a pure computation:
/// identical inputs produce identical outputs.
///
/// # Arguments
///
/// * `kernel` - Kernel K(s, y)
/// * `f_values` - Forcing values at the collocation points (the caller's
///   grid), regardless of rule
/// * `grid` - Strictly increasing collocation points (length ≥ 2; odd
///   length and uniform spacing for Simpson)
/// * `options` - Rule, regularization parameter, and penalty operator
///
/// # Returns
///
/// A [`FredholmSolution`] whose `grid` holds the quadrature nodes the
/// values are aligned to.
///
/// # Errors
///
/// Returns an error if:
/// - The grid fails the chosen rule's requirements
/// - `f_values` and `grid` lengths differ
/// - `reg_param` is negative or NaN ([`SolveError::InvalidParameter`])
/// - The regularized normal system cannot be factorized
///   ([`SolveError::SingularSystem`]); with λ = 0 this signals a genuinely
///   singular discretized operator
///
/// # Example
///
/// ```
/// use integr::fredholm::{solve_fredholm, FredholmOptions, Penalty};
/// use integr::quadrature::QuadRule;
///
/// // The integration operator: K(s,y) = 1 for y ≤ s, so f(s) = ∫₀ˢ g.
/// // With f(s) = s the discretized system has an exact solution that is
/// // 1 at every interior node.
/// let n = 11;
/// let grid: Vec<f64> = (0..n).map(|i| i as f64 / (n - 1) as f64).collect();
/// let f: Vec<f64> = grid.clone();
/// let options = FredholmOptions {
///     rule: QuadRule::Trapezoid,
///     reg_param: Some(1e-10),
///     penalty: Penalty::Identity,
/// };
///
/// let solution = solve_fredholm(
///     |s, y| if y <= s { 1.0 } else { 0.0 },
///     &f,
///     &grid,
///     &options,
/// )
/// .unwrap();
///
/// for gi in &solution.values[1..n - 1] {
///     assert!((gi - 1.0).abs() < 1e-6);
/// }
/// ```
pub fn solve_fredholm<K>(
    kernel: K,
    f_values: &[f64],
    grid: &[f64],
    options: &FredholmOptions,
) -> SolveResult<FredholmSolution>
where
    K: Fn(f64, f64) -> f64,
{
    grid::validate(grid, 2, "solve_fredholm")?;

    if f_values.len() != grid.len() {
        return Err(SolveError::InvalidGrid {
            context: format!(
                "solve_fredholm: f values and grid must have same length (got {} and {})",
                f_values.len(),
                grid.len()
            ),
        });
    }

    if let Some(lambda) = options.reg_param {
        if !(lambda >= 0.0) {
            return Err(SolveError::InvalidParameter {
                parameter: "reg_param".to_string(),
                message: format!("must be non-negative (got {})", lambda),
            });
        }
    }

    let quad = quadrature::weights(grid, options.rule)?;
    let n = grid.len();

    // Discretized forward operator: row i collocates at s_i, column j
    // carries the quadrature weight of node y_j.
    let a = DMatrix::from_fn(n, n, |i, j| quad.weights[j] * kernel(grid[i], quad.nodes[j]));
    let f = DVector::from_column_slice(f_values);

    let lambda = options
        .reg_param
        .unwrap_or_else(|| DEFAULT_REG_FRACTION * a.norm_squared());

    let mut normal = a.tr_mul(&a);
    if lambda > 0.0 {
        match options.penalty {
            Penalty::SecondDifference => normal += second_difference_penalty(n) * lambda,
            Penalty::Identity => {
                for i in 0..n {
                    normal[(i, i)] += lambda;
                }
            }
        }
    }
    let rhs = a.tr_mul(&f);

    let values = solve_normal(normal, rhs)?;

    Ok(FredholmSolution {
        grid: quad.nodes,
        values: values.as_slice().to_vec(),
    })
}

/// Solve a first-kind Fredholm equation with the forcing given as a
/// function.
///
/// Evaluates `f` at the collocation points (the caller's grid) and calls
/// [`solve_fredholm`].
pub fn solve_fredholm_fn<K, F>(
    kernel: K,
    f: F,
    grid: &[f64],
    options: &FredholmOptions,
) -> SolveResult<FredholmSolution>
where
    K: Fn(f64, f64) -> f64,
    F: Fn(f64) -> f64,
{
    let f_values: Vec<f64> = grid.iter().map(|&s| f(s)).collect();
    solve_fredholm(kernel, &f_values, grid, options)
}

/// Twomey's smoothing matrix H = DᵀD, where D is the (n-2)×n
/// second-difference operator with rows [1, -2, 1].
fn second_difference_penalty(n: usize) -> DMatrix<f64> {
    let mut h = DMatrix::zeros(n, n);
    let stencil = [1.0, -2.0, 1.0];
    for r in 0..n.saturating_sub(2) {
        for (di, &vi) in stencil.iter().enumerate() {
            for (dj, &vj) in stencil.iter().enumerate() {
                h[(r + di, r + dj)] += vi * vj;
            }
        }
    }
    h
}

/// Factorize and solve the regularized normal system. Cholesky first (the
/// matrix is symmetric and positive definite for any λ > 0 with a full
/// penalty), LU as the fallback.
fn solve_normal(normal: DMatrix<f64>, rhs: DVector<f64>) -> SolveResult<DVector<f64>> {
    if let Some(chol) = normal.clone().cholesky() {
        return Ok(chol.solve(&rhs));
    }

    normal.lu().solve(&rhs).ok_or_else(|| SolveError::SingularSystem {
        context: "solve_fredholm: regularized normal system could not be factorized; \
                  increase the regularization parameter"
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_grid(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
    }

    /// K(s,y) = 1 for y ≤ s: the integration operator, f(s) = ∫₀ˢ g.
    fn integration_kernel(s: f64, y: f64) -> f64 {
        if y <= s { 1.0 } else { 0.0 }
    }

    #[test]
    fn test_integration_operator_recovery_trapezoid() {
        // f(s) = s. The discretized trapezoid system is triangular with an
        // exact solution of 0, 1, …, 1, 2 (half-weight end nodes absorb
        // the difference); tiny λ leaves it untouched.
        let n = 11;
        let grid = unit_grid(n);
        let f = grid.clone();
        let options = FredholmOptions {
            rule: QuadRule::Trapezoid,
            reg_param: Some(1e-10),
            penalty: Penalty::Identity,
        };

        let solution = solve_fredholm(integration_kernel, &f, &grid, &options).unwrap();
        assert_eq!(solution.grid, grid);

        assert!(solution.values[0].abs() < 1e-6);
        for i in 1..n - 1 {
            assert!(
                (solution.values[i] - 1.0).abs() < 1e-6,
                "g[{}] = {}",
                i,
                solution.values[i]
            );
        }
        assert!((solution.values[n - 1] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_regularization_accuracy_tradeoff() {
        // K ≡ 1, f ≡ 1: any g with ∫g = 1 solves the continuous problem.
        // The recovered functional Σ w·g approaches 1 as λ shrinks.
        let n = 11;
        let grid = unit_grid(n);
        let f = vec![1.0; n];

        let functional = |lambda: f64| {
            let options = FredholmOptions {
                rule: QuadRule::Trapezoid,
                reg_param: Some(lambda),
                penalty: Penalty::Identity,
            };
            let solution = solve_fredholm(|_, _| 1.0, &f, &grid, &options).unwrap();
            let w = quadrature::trapezoid_weights(&grid).unwrap();
            let recovered: f64 = w.iter().zip(&solution.values).map(|(wi, gi)| wi * gi).sum();
            (recovered - 1.0).abs()
        };

        let coarse = functional(1e-2);
        let fine = functional(1e-6);
        assert!(fine < coarse, "fine = {}, coarse = {}", fine, coarse);
        assert!(fine < 1e-4, "fine = {}", fine);
    }

    #[test]
    fn test_gaussian_rule_reports_gauss_nodes() {
        let n = 4;
        let grid = unit_grid(n);
        let f = grid.clone();
        let options = FredholmOptions {
            rule: QuadRule::Gaussian,
            reg_param: Some(1e-8),
            penalty: Penalty::Identity,
        };

        let solution = solve_fredholm(integration_kernel, &f, &grid, &options).unwrap();

        let expected = quadrature::GaussLegendre::new(n).unwrap().mapped_to(0.0, 1.0);
        assert_eq!(solution.grid.len(), n);
        for (got, want) in solution.grid.iter().zip(&expected.nodes) {
            assert!((got - want).abs() < 1e-12);
        }
        assert_ne!(solution.grid, grid);
    }

    #[test]
    fn test_gaussian_regularization_tradeoff() {
        // Same trade-off as the trapezoid case, on Gauss nodes
        let n = 8;
        let grid = unit_grid(n);
        let f = vec![1.0; n];

        let functional = |lambda: f64| {
            let options = FredholmOptions {
                rule: QuadRule::Gaussian,
                reg_param: Some(lambda),
                penalty: Penalty::Identity,
            };
            let solution = solve_fredholm(|_, _| 1.0, &f, &grid, &options).unwrap();
            let w = quadrature::GaussLegendre::new(n)
                .unwrap()
                .mapped_to(0.0, 1.0)
                .weights;
            let recovered: f64 = w.iter().zip(&solution.values).map(|(wi, gi)| wi * gi).sum();
            (recovered - 1.0).abs()
        };

        assert!(functional(1e-7) < functional(1e-2));
    }

    #[test]
    fn test_default_options_run_deterministically() {
        let n = 9;
        let grid = unit_grid(n);
        let f: Vec<f64> = grid.iter().map(|s| s * s).collect();

        let s1 = solve_fredholm(|s, y| 1.0 + s * y, &f, &grid, &FredholmOptions::default())
            .unwrap();
        let s2 = solve_fredholm(|s, y| 1.0 + s * y, &f, &grid, &FredholmOptions::default())
            .unwrap();

        assert!(s1.values.iter().all(|v| v.is_finite()));
        assert_eq!(s1.values, s2.values);
        assert_eq!(s1.grid, s2.grid);
    }

    #[test]
    fn test_second_difference_penalty_matches_twomey_pattern() {
        // Diagonals for n = 6: [1, 5, 6, 6, 5, 1], first off-diagonal
        // [-2, -4, -4, -4, -2], second off-diagonal all ones
        let h = second_difference_penalty(6);

        let diag: Vec<f64> = (0..6).map(|i| h[(i, i)]).collect();
        assert_eq!(diag, vec![1.0, 5.0, 6.0, 6.0, 5.0, 1.0]);

        let off1: Vec<f64> = (0..5).map(|i| h[(i, i + 1)]).collect();
        assert_eq!(off1, vec![-2.0, -4.0, -4.0, -4.0, -2.0]);

        let off2: Vec<f64> = (0..4).map(|i| h[(i, i + 2)]).collect();
        assert_eq!(off2, vec![1.0, 1.0, 1.0, 1.0]);

        // Symmetry
        for i in 0..6 {
            for j in 0..6 {
                assert_eq!(h[(i, j)], h[(j, i)]);
            }
        }
    }

    #[test]
    fn test_smoothness_penalty_keeps_smooth_solution() {
        // The integration-operator problem again, but with the smoothing
        // penalty: the near-constant exact solution is barely penalized.
        let n = 11;
        let grid = unit_grid(n);
        let f = grid.clone();
        let options = FredholmOptions {
            rule: QuadRule::Trapezoid,
            reg_param: Some(1e-10),
            penalty: Penalty::SecondDifference,
        };

        let solution = solve_fredholm(integration_kernel, &f, &grid, &options).unwrap();
        for i in 2..n - 2 {
            assert!(
                (solution.values[i] - 1.0).abs() < 1e-3,
                "g[{}] = {}",
                i,
                solution.values[i]
            );
        }
    }

    #[test]
    fn test_negative_reg_param_rejected() {
        let grid = unit_grid(5);
        let f = vec![1.0; 5];
        let options = FredholmOptions {
            rule: QuadRule::Trapezoid,
            reg_param: Some(-1e-3),
            penalty: Penalty::Identity,
        };

        let err = solve_fredholm(|_, _| 1.0, &f, &grid, &options).unwrap_err();
        assert!(matches!(err, SolveError::InvalidParameter { .. }));
    }

    #[test]
    fn test_unregularized_singular_system_reported() {
        // A vanishing kernel gives an exactly zero operator; with λ = 0
        // there is nothing left to factorize.
        let grid = unit_grid(6);
        let f = vec![1.0; 6];
        let options = FredholmOptions {
            rule: QuadRule::Trapezoid,
            reg_param: Some(0.0),
            penalty: Penalty::Identity,
        };

        let err = solve_fredholm(|_, _| 0.0, &f, &grid, &options).unwrap_err();
        assert!(matches!(err, SolveError::SingularSystem { .. }));
    }

    #[test]
    fn test_simpson_parity_enforced() {
        let grid = unit_grid(10); // even length
        let f = vec![1.0; 10];
        let options = FredholmOptions {
            rule: QuadRule::Simpson,
            reg_param: Some(1e-6),
            penalty: Penalty::Identity,
        };

        let err = solve_fredholm(|_, _| 1.0, &f, &grid, &options).unwrap_err();
        assert!(matches!(err, SolveError::InvalidGrid { .. }));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let grid = unit_grid(5);
        let f = vec![1.0; 4];

        let err = solve_fredholm(|_, _| 1.0, &f, &grid, &FredholmOptions::default()).unwrap_err();
        assert!(matches!(err, SolveError::InvalidGrid { .. }));
    }
}
