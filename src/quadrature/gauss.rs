//! Gauss-Legendre quadrature nodes and weights.
//!
//! An n-point Gauss-Legendre rule integrates polynomials of degree 2n-1
//! exactly. Unlike the sampled-data rules, its nodes are not tied to the
//! caller's grid: a Fredholm solve with the Gaussian rule reports its
//! solution on the rescaled Gauss nodes, not on the original grid.

use crate::error::{SolveError, SolveResult};

/// Non-negative halves of the Gauss-Legendre node/weight tables for
/// n ≤ 10, nodes ascending. Negative nodes mirror with the same weights.
const HALF_TABLES: [(&[f64], &[f64]); 10] = [
    (&[0.0], &[2.0]),
    (&[0.5773502691896257], &[1.0]),
    (&[0.0, 0.7745966692414834], &[8.0 / 9.0, 5.0 / 9.0]),
    (
        &[0.3399810435848563, 0.8611363115940526],
        &[0.6521451548625461, 0.3478548451374538],
    ),
    (
        &[0.0, 0.5384693101056831, 0.9061798459386640],
        &[0.5688888888888889, 0.4786286704993665, 0.2369268850561891],
    ),
    (
        &[0.2386191860831969, 0.6612093864662645, 0.9324695142031521],
        &[0.4679139345726910, 0.3607615730481386, 0.1713244923791704],
    ),
    (
        &[0.0, 0.4058451513773972, 0.7415311855993945, 0.9491079123427585],
        &[
            0.4179591836734694,
            0.3818300505051189,
            0.2797053914892766,
            0.1294849661688697,
        ],
    ),
    (
        &[
            0.1834346424956498,
            0.5255324099163290,
            0.7966664774136267,
            0.9602898564975363,
        ],
        &[
            0.3626837833783620,
            0.3137066458778873,
            0.2223810344533745,
            0.1012285362903763,
        ],
    ),
    (
        &[
            0.0,
            0.3242534234038089,
            0.6133714327005904,
            0.8360311073266358,
            0.9681602395076261,
        ],
        &[
            0.3302393550012598,
            0.3123470770400029,
            0.2606106964029354,
            0.1806481606948574,
            0.0812743883615744,
        ],
    ),
    (
        &[
            0.1488743389816312,
            0.4333953941292472,
            0.6794095682990244,
            0.8650633666889845,
            0.9739065285171717,
        ],
        &[
            0.2955242247147529,
            0.2692667193099963,
            0.2190863625159820,
            0.1494513491505806,
            0.0666713443086881,
        ],
    ),
];

/// Gauss-Legendre quadrature rule.
///
/// Stores nodes (roots of the Legendre polynomial on [-1, 1]) and their
/// weights, sorted by node.
#[derive(Debug, Clone)]
pub struct GaussLegendre {
    /// Quadrature nodes, ascending
    pub nodes: Vec<f64>,
    /// Quadrature weights, aligned to `nodes`
    pub weights: Vec<f64>,
}

impl GaussLegendre {
    /// Create an n-point Gauss-Legendre rule on [-1, 1].
    ///
    /// Uses tabulated values for n ≤ 10 and Newton-Raphson root finding on
    /// the Legendre recurrence beyond.
    ///
    /// # Errors
    ///
    /// Returns an error if `n` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use integr::quadrature::GaussLegendre;
    ///
    /// let rule = GaussLegendre::new(3).unwrap();
    /// assert_eq!(rule.nodes.len(), 3);
    /// assert!((rule.nodes[2] - 0.7745966692414834).abs() < 1e-12);
    /// assert!((rule.weights[1] - 8.0 / 9.0).abs() < 1e-12);
    /// ```
    pub fn new(n: usize) -> SolveResult<Self> {
        if n == 0 {
            return Err(SolveError::InvalidParameter {
                parameter: "n".to_string(),
                message: "need at least 1 quadrature point".to_string(),
            });
        }

        if n <= HALF_TABLES.len() {
            let (pos_nodes, pos_weights) = HALF_TABLES[n - 1];
            Ok(Self::from_half_table(pos_nodes, pos_weights))
        } else {
            Ok(Self::from_newton(n))
        }
    }

    /// Map this rule from [-1, 1] onto [a, b].
    ///
    /// Nodes are shifted and scaled; weights pick up the Jacobian factor
    /// `(b - a) / 2`, so the rescaled weights sum to `b - a`.
    pub fn mapped_to(&self, a: f64, b: f64) -> GaussLegendre {
        let mid = (a + b) / 2.0;
        let half = (b - a) / 2.0;
        GaussLegendre {
            nodes: self.nodes.iter().map(|x| mid + half * x).collect(),
            weights: self.weights.iter().map(|w| half * w).collect(),
        }
    }

    /// Integrate a function over [a, b] with this rule.
    ///
    /// # Example
    ///
    /// ```
    /// use integr::quadrature::GaussLegendre;
    ///
    /// let rule = GaussLegendre::new(5).unwrap();
    /// let result = rule.integrate(|x| x * x, 0.0, 1.0);
    /// assert!((result - 1.0 / 3.0).abs() < 1e-12);
    /// ```
    pub fn integrate<F>(&self, f: F, a: f64, b: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let mid = (a + b) / 2.0;
        let half = (b - a) / 2.0;

        let mut result = 0.0;
        for (&node, &weight) in self.nodes.iter().zip(&self.weights) {
            result += weight * f(mid + half * node);
        }

        result * half
    }

    /// Expand a non-negative half table into the full symmetric rule.
    fn from_half_table(pos_nodes: &[f64], pos_weights: &[f64]) -> Self {
        let has_zero = pos_nodes[0] == 0.0;
        let n = 2 * pos_nodes.len() - usize::from(has_zero);

        let mut nodes = Vec::with_capacity(n);
        let mut weights = Vec::with_capacity(n);

        for (&x, &w) in pos_nodes.iter().zip(pos_weights).rev() {
            if x > 0.0 {
                nodes.push(-x);
                weights.push(w);
            }
        }
        for (&x, &w) in pos_nodes.iter().zip(pos_weights) {
            nodes.push(x);
            weights.push(w);
        }

        Self { nodes, weights }
    }

    /// Compute nodes and weights via Newton-Raphson on the Legendre
    /// polynomial, seeded with Chebyshev-node guesses. Only the positive
    /// half is iterated; the rest follows by symmetry.
    fn from_newton(n: usize) -> Self {
        let eps = 1e-15;
        let max_iter = 100;

        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];

        for i in 0..n.div_ceil(2) {
            let mut x = ((4 * i + 3) as f64 / (4 * n + 2) as f64 * std::f64::consts::PI).cos();

            for _ in 0..max_iter {
                let (p, dp) = legendre_eval(n, x);
                let dx = p / dp;
                x -= dx;
                if dx.abs() < eps {
                    break;
                }
            }

            let (_, dp) = legendre_eval(n, x);
            let w = 2.0 / ((1.0 - x * x) * dp * dp);

            // i-th largest root is positive; its mirror fills from the left
            nodes[i] = -x;
            weights[i] = w;
            nodes[n - 1 - i] = x;
            weights[n - 1 - i] = w;
        }

        Self { nodes, weights }
    }
}

/// Evaluate the Legendre polynomial P_n(x) and its derivative via the
/// three-term recurrence.
fn legendre_eval(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut p_prev = 1.0;
    let mut p_curr = x;
    let mut dp_prev = 0.0;
    let mut dp_curr = 1.0;

    for k in 1..n {
        let kf = k as f64;
        let p_next = ((2.0 * kf + 1.0) * x * p_curr - kf * p_prev) / (kf + 1.0);
        let dp_next = ((2.0 * kf + 1.0) * (p_curr + x * dp_curr) - kf * dp_prev) / (kf + 1.0);
        p_prev = p_curr;
        p_curr = p_next;
        dp_prev = dp_curr;
        dp_curr = dp_next;
    }

    (p_curr, dp_curr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_nodes_small_n() {
        // n = 2: ±1/√3, weights 1
        let rule = GaussLegendre::new(2).unwrap();
        let x = 1.0 / 3.0_f64.sqrt();
        assert!((rule.nodes[0] + x).abs() < 1e-12);
        assert!((rule.nodes[1] - x).abs() < 1e-12);
        assert!((rule.weights[0] - 1.0).abs() < 1e-12);
        assert!((rule.weights[1] - 1.0).abs() < 1e-12);

        // n = 3: 0, ±√(3/5), weights 8/9, 5/9
        let rule = GaussLegendre::new(3).unwrap();
        let x = (3.0_f64 / 5.0).sqrt();
        assert!((rule.nodes[0] + x).abs() < 1e-12);
        assert!(rule.nodes[1].abs() < 1e-12);
        assert!((rule.nodes[2] - x).abs() < 1e-12);
        assert!((rule.weights[1] - 8.0 / 9.0).abs() < 1e-12);

        // n = 4: tabulated values
        let rule = GaussLegendre::new(4).unwrap();
        assert!((rule.nodes[3] - 0.8611363115940526).abs() < 1e-12);
        assert!((rule.weights[3] - 0.3478548451374538).abs() < 1e-12);
    }

    #[test]
    fn test_weights_sum_to_two() {
        for n in 1..=12 {
            let rule = GaussLegendre::new(n).unwrap();
            let mass: f64 = rule.weights.iter().sum();
            assert!((mass - 2.0).abs() < 1e-10, "n = {}: mass = {}", n, mass);
        }
    }

    #[test]
    fn test_newton_path_matches_symmetry() {
        let rule = GaussLegendre::new(16).unwrap();
        assert_eq!(rule.nodes.len(), 16);
        for i in 0..8 {
            assert!(
                (rule.nodes[i] + rule.nodes[15 - i]).abs() < 1e-12,
                "node {} not mirrored",
                i
            );
            assert!((rule.weights[i] - rule.weights[15 - i]).abs() < 1e-12);
        }
        // Nodes ascending
        for i in 0..15 {
            assert!(rule.nodes[i] < rule.nodes[i + 1]);
        }
    }

    #[test]
    fn test_mapped_to_interval() {
        let rule = GaussLegendre::new(4).unwrap().mapped_to(0.0, 1.0);
        let mass: f64 = rule.weights.iter().sum();
        assert!((mass - 1.0).abs() < 1e-12);
        assert!(rule.nodes.iter().all(|&x| (0.0..=1.0).contains(&x)));
    }

    #[test]
    fn test_integrate_polynomial_exactly() {
        // 5-point rule is exact up to degree 9
        let rule = GaussLegendre::new(5).unwrap();
        let result = rule.integrate(|x| x.powi(8), 0.0, 1.0);
        assert!((result - 1.0 / 9.0).abs() < 1e-13);
    }

    #[test]
    fn test_zero_points_is_an_error() {
        assert!(GaussLegendre::new(0).is_err());
    }
}
