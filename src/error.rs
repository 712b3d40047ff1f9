//! Error types for the integral equation solvers.

use std::fmt;

/// Result type for solver operations.
pub type SolveResult<T> = Result<T, SolveError>;

/// Errors that can occur while discretizing or solving an integral equation.
#[derive(Debug, Clone)]
pub enum SolveError {
    /// Grid is too short for the chosen rule, not strictly increasing,
    /// or has the wrong parity (Simpson).
    InvalidGrid { context: String },

    /// The rule requires uniform spacing and the grid spacing varies
    /// beyond tolerance. `index` is the first offending interval.
    NonUniformGrid { index: usize, context: String },

    /// The rule is not valid for the requested solver path
    /// (e.g. Simpson or Gaussian for a Volterra marching solve).
    UnsupportedRule { rule: String, context: String },

    /// Invalid parameter value.
    InvalidParameter { parameter: String, message: String },

    /// A Volterra marching step has a zero (or numerically vanishing)
    /// coefficient on its unknown; the discretization is not solvable
    /// at this grid point for the given kernel.
    SingularStep {
        index: usize,
        s: f64,
        coefficient: f64,
    },

    /// The regularized Fredholm normal system could not be factorized.
    SingularSystem { context: String },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid { context } => {
                write!(f, "Invalid grid: {}", context)
            }
            Self::NonUniformGrid { index, context } => {
                write!(
                    f,
                    "{}: grid must be uniformly spaced (spacing changes at interval {})",
                    context, index
                )
            }
            Self::UnsupportedRule { rule, context } => {
                write!(f, "{}: rule '{}' is not supported here", context, rule)
            }
            Self::InvalidParameter { parameter, message } => {
                write!(f, "Invalid parameter '{}': {}", parameter, message)
            }
            Self::SingularStep {
                index,
                s,
                coefficient,
            } => {
                write!(
                    f,
                    "Singular marching step at index {} (s = {:.6}): coefficient {:.2e} is numerically zero",
                    index, s, coefficient
                )
            }
            Self::SingularSystem { context } => {
                write!(f, "Singular system: {}", context)
            }
        }
    }
}

impl std::error::Error for SolveError {}
