//! Error type shared by spline construction, the banded solver, and evaluation.

use thiserror::Error;

/// Failures reported by this crate.
///
/// All of these are structural problems with the caller's input
/// (or a linear system that cannot be factored); none are transient.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Not enough samples to define an interpolant.
    #[error("need at least {required} points, got {actual}")]
    TooFewPoints {
        /// Minimum number of samples.
        required: usize,
        /// Number of samples provided.
        actual: usize,
    },

    /// The abscissae are not strictly increasing at `index`,
    /// i.e. `x[index + 1] <= x[index]` or either value is NaN.
    #[error("x must be strictly increasing (violated after index {index})")]
    NotStrictlyIncreasing {
        /// Position of the first offending pair.
        index: usize,
    },

    /// Buffer sizes are inconsistent with each other.
    #[error("shape mismatch in {context}: expected {expected}, got {actual}")]
    ShapeMismatch {
        /// Required length.
        expected: usize,
        /// Length that was provided.
        actual: usize,
        /// Which buffer was checked.
        context: &'static str,
    },

    /// The banded system could not be factored, or produced non-finite values.
    #[error("singular tridiagonal system at row {row}")]
    Singular {
        /// Row at which elimination broke down.
        row: usize,
    },

    /// Spline coefficients overflowed even though the slope system was solved.
    #[error("non-finite coefficients on segment {segment}")]
    NonFinite {
        /// First segment with a non-finite coefficient.
        segment: usize,
    },

    /// A count could not be represented in the floating-point type.
    #[error("unrepresentable number")]
    Unrepresentable,
}

/// Shorthand `Result` used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;
