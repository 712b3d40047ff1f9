//! Volterra integral equations of the first and second kind.
//!
//! The integration upper bound equals the evaluation point, so the
//! discretized system is lower triangular and is solved by marching:
//! each step isolates one unknown from a single scalar equation using the
//! values already computed. Step i cannot start before step i-1 is done;
//! only the inner sum at a fixed step is independent work.
//!
//! # Rules
//!
//! Only midpoint and trapezoid are supported, since the causal structure needs
//! weights computable row by row. Trapezoid converges faster on smooth
//! problems (O(h²) vs O(h)) but its error can oscillate for kernels or
//! forcing functions with sharp features; midpoint is the stable choice.
//! The solver does not auto-select.
//!
//! # Grid conventions
//!
//! The grid must be uniformly spaced. For the first kind the first grid
//! point sits one step above the lower integration limit (a = grid[0] - h)
//! and f must vanish as s approaches a. For the second kind the grid
//! includes the lower limit and g(grid[0]) = f(grid[0]) exactly.

use crate::error::{SolveError, SolveResult};
use crate::grid;
use crate::quadrature::QuadRule;

/// Relative threshold below which a marching coefficient is treated as zero.
const SINGULAR_RTOL: f64 = 1e-12;

/// Which kind of Volterra equation to solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VolterraKind {
    /// f(s) = ∫ₐˢ K(s,y) g(y) dy, where the unknown appears only inside the
    /// integral.
    #[default]
    First,
    /// g(s) = f(s) + ∫ₐˢ K(s,y) g(y) dy, where the unknown also appears
    /// outside the integral.
    Second,
}

/// Options for the Volterra marching solver.
#[derive(Debug, Clone)]
pub struct VolterraOptions {
    /// Equation kind (default: first)
    pub kind: VolterraKind,
    /// Quadrature rule: midpoint or trapezoid (default: midpoint)
    pub rule: QuadRule,
}

impl Default for VolterraOptions {
    fn default() -> Self {
        Self {
            kind: VolterraKind::First,
            rule: QuadRule::Midpoint,
        }
    }
}

/// Solve a Volterra integral equation by forward substitution.
///
/// Marches along the grid: at each point the discretized equation
/// involves only already-computed values plus the one unknown `g[i]`,
/// which is isolated and solved for directly. The kernel must be a pure
/// function of its arguments; it is evaluated O(N²) times.
///
/// # Arguments
///
/// * `kernel` - Kernel K(s, y)
/// * `f_values` - Forcing values aligned to the grid
/// * `grid` - Strictly increasing, uniformly spaced points (length ≥ 2);
///   see the module docs for the first-kind grid convention
/// * `options` - Equation kind and quadrature rule
///
/// # Returns
///
/// The solution values, one per grid point.
///
/// # Errors
///
/// Returns an error if:
/// - `f_values` and `grid` lengths differ, or the grid is too short or not
///   strictly increasing
/// - The grid is not uniformly spaced within tolerance
/// - The rule is Simpson or Gaussian ([`SolveError::UnsupportedRule`])
/// - A step's coefficient on its unknown is numerically zero
///   ([`SolveError::SingularStep`]); no partial solution is returned
///
/// # Example
///
/// ```
/// use integr::volterra::{solve_volterra, VolterraOptions};
///
/// // f(s) = s with K ≡ 1 has the solution g ≡ 1
/// let n = 50;
/// let grid: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
/// let f: Vec<f64> = grid.clone();
///
/// let g = solve_volterra(|_s, _y| 1.0, &f, &grid, &VolterraOptions::default()).unwrap();
/// assert!(g.iter().all(|gi| (gi - 1.0).abs() < 1e-10));
/// ```
pub fn solve_volterra<K>(
    kernel: K,
    f_values: &[f64],
    grid: &[f64],
    options: &VolterraOptions,
) -> SolveResult<Vec<f64>>
where
    K: Fn(f64, f64) -> f64,
{
    grid::validate(grid, 2, "solve_volterra")?;

    if f_values.len() != grid.len() {
        return Err(SolveError::InvalidGrid {
            context: format!(
                "solve_volterra: f values and grid must have same length (got {} and {})",
                f_values.len(),
                grid.len()
            ),
        });
    }

    match options.rule {
        QuadRule::Midpoint | QuadRule::Trapezoid => {}
        rule => {
            return Err(SolveError::UnsupportedRule {
                rule: rule.to_string(),
                context: "solve_volterra: marching needs row-incremental weights".to_string(),
            });
        }
    }

    let h = grid::uniform_spacing(grid, "solve_volterra")?;

    match options.kind {
        VolterraKind::First => march_first(&kernel, f_values, grid, h, options.rule),
        VolterraKind::Second => march_second(&kernel, f_values, grid, h, options.rule),
    }
}

/// Solve a Volterra equation with the forcing given as a function.
///
/// Evaluates `f` on the grid and calls [`solve_volterra`].
///
/// # Example
///
/// ```
/// use integr::volterra::{solve_volterra_fn, VolterraOptions};
///
/// // The reference problem f(s) = s, K(s,y) = cos(s - y) has the
/// // solution g(s) = (2 + s²) / 2.
/// let n = 200;
/// let grid: Vec<f64> = (1..=n).map(|i| i as f64 / n as f64).collect();
///
/// let g = solve_volterra_fn(
///     |s, y| (s - y).cos(),
///     |s| s,
///     &grid,
///     &VolterraOptions::default(),
/// )
/// .unwrap();
///
/// let expected = (2.0 + 1.0) / 2.0; // at s = 1
/// assert!((g[n - 1] - expected).abs() < 0.05);
/// ```
pub fn solve_volterra_fn<K, F>(
    kernel: K,
    f: F,
    grid: &[f64],
    options: &VolterraOptions,
) -> SolveResult<Vec<f64>>
where
    K: Fn(f64, f64) -> f64,
    F: Fn(f64) -> f64,
{
    let f_values: Vec<f64> = grid.iter().map(|&s| f(s)).collect();
    solve_volterra(kernel, &f_values, grid, options)
}

/// First kind: f(s_i) = Σ_{j≤i} w[i][j] K(s_i, y_j) g_j, marched in index
/// order. The lower limit sits one step below the grid: a = grid[0] - h.
fn march_first<K>(
    kernel: &K,
    f_values: &[f64],
    grid: &[f64],
    h: f64,
    rule: QuadRule,
) -> SolveResult<Vec<f64>>
where
    K: Fn(f64, f64) -> f64,
{
    let n = grid.len();
    let a = grid[0] - h;
    let mut g = Vec::with_capacity(n);

    for i in 0..n {
        let s = grid[i];

        // Weighted sum of the already-known terms, and the coefficient on
        // the unknown g[i].
        let (known, coefficient) = match rule {
            QuadRule::Midpoint => {
                // Every sample is the right endpoint of its own cell of
                // width h, covering [a, s_i] in i+1 cells.
                let mut acc = 0.0;
                for j in 0..i {
                    acc += kernel(s, grid[j]) * g[j];
                }
                (h * acc, h * kernel(s, s))
            }
            QuadRule::Trapezoid => {
                if i == 0 {
                    // Degenerate single-point equation over [a, s_0]; the
                    // unknown value at a is approximated by g[0].
                    (0.0, h * (kernel(s, a) + kernel(s, s)) / 2.0)
                } else {
                    // Trapezoid over nodes a, s_0, …, s_i with the end
                    // contribution at a folded onto the g[0] column.
                    let mut acc = (kernel(s, a) / 2.0 + kernel(s, grid[0])) * g[0];
                    for j in 1..i {
                        acc += kernel(s, grid[j]) * g[j];
                    }
                    (h * acc, h * kernel(s, s) / 2.0)
                }
            }
            _ => unreachable!("rule checked in solve_volterra"),
        };

        if coefficient.abs() <= SINGULAR_RTOL * h {
            return Err(SolveError::SingularStep {
                index: i,
                s,
                coefficient,
            });
        }

        g.push((f_values[i] - known) / coefficient);
    }

    Ok(g)
}

/// Second kind: g(s_i) = f(s_i) + Σ_{j≤i} w[i][j] K(s_i, y_j) g_j. The
/// first step is exact: the integral over [a, a] is empty.
fn march_second<K>(
    kernel: &K,
    f_values: &[f64],
    grid: &[f64],
    h: f64,
    rule: QuadRule,
) -> SolveResult<Vec<f64>>
where
    K: Fn(f64, f64) -> f64,
{
    let n = grid.len();
    let mut g = Vec::with_capacity(n);
    g.push(f_values[0]);

    for i in 1..n {
        let s = grid[i];

        let (known, diag_weight) = match rule {
            QuadRule::Midpoint => {
                let mut acc = 0.0;
                for j in 0..i {
                    acc += kernel(s, grid[j]) * g[j];
                }
                (h * acc, h)
            }
            QuadRule::Trapezoid => {
                let mut acc = kernel(s, grid[0]) / 2.0 * g[0];
                for j in 1..i {
                    acc += kernel(s, grid[j]) * g[j];
                }
                (h * acc, h / 2.0)
            }
            _ => unreachable!("rule checked in solve_volterra"),
        };

        let coefficient = 1.0 - diag_weight * kernel(s, s);
        if coefficient.abs() <= SINGULAR_RTOL {
            return Err(SolveError::SingularStep {
                index: i,
                s,
                coefficient,
            });
        }

        g.push((f_values[i] + known) / coefficient);
    }

    Ok(g)
}
