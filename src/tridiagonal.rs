//! Banded linear systems with one sub- and one super-diagonal.
//!
//! The spline builder only needs "solve this tridiagonal system for several
//! right-hand sides at once", so that capability sits behind
//! [`TridiagonalSolver`]. [`Thomas`] is the default implementation; tests
//! and callers with their own linear algebra can inject anything else.
//!
//! Storage is row-aligned: row `i` of the system reads
//!
//! `lower[i] * s[i-1] + diag[i] * s[i] + upper[i] * s[i+1] = rhs[i]`
//!
//! so `lower[0]` and `upper[n-1]` fall outside the matrix and are ignored.
use alloc::vec;
use alloc::vec::Vec;

use num_traits::Float;

use crate::error::{Error, Result};

/// Coefficients of an `n x n` tridiagonal matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Tridiagonal<T> {
    lower: Vec<T>,
    diag: Vec<T>,
    upper: Vec<T>,
}

impl<T: Float> Tridiagonal<T> {
    /// Build a system from its three bands, each of length `n`.
    ///
    /// # Errors
    /// * If the bands have different lengths
    /// * If the system is empty
    pub fn new(lower: Vec<T>, diag: Vec<T>, upper: Vec<T>) -> Result<Self> {
        let n = diag.len();
        if n == 0 {
            return Err(Error::ShapeMismatch {
                expected: 1,
                actual: 0,
                context: "diagonal",
            });
        }
        if lower.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                actual: lower.len(),
                context: "sub-diagonal",
            });
        }
        if upper.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                actual: upper.len(),
                context: "super-diagonal",
            });
        }

        Ok(Self { lower, diag, upper })
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.diag.len()
    }

    /// Always false; an empty system cannot be constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.diag.is_empty()
    }

    #[inline]
    pub fn lower(&self) -> &[T] {
        &self.lower
    }

    #[inline]
    pub fn diag(&self) -> &[T] {
        &self.diag
    }

    #[inline]
    pub fn upper(&self) -> &[T] {
        &self.upper
    }

    /// Matrix-vector product `out = A * s` for a single vector.
    ///
    /// # Errors
    /// * If `s` or `out` do not have one entry per row
    pub fn apply(&self, s: &[T], out: &mut [T]) -> Result<()> {
        let n = self.len();
        if s.len() != n || out.len() != n {
            return Err(Error::ShapeMismatch {
                expected: n,
                actual: if s.len() != n { s.len() } else { out.len() },
                context: "tridiagonal product",
            });
        }

        for i in 0..n {
            let mut acc = self.diag[i] * s[i];
            if i > 0 {
                acc = acc + self.lower[i] * s[i - 1];
            }
            if i + 1 < n {
                acc = acc + self.upper[i] * s[i + 1];
            }
            out[i] = acc;
        }

        Ok(())
    }
}

/// Solves tridiagonal systems for a block of right-hand sides.
pub trait TridiagonalSolver<T: Float> {
    /// Solve `A * s = rhs` in place.
    ///
    /// `rhs` holds `rhs.len() / system.len()` independent right-hand sides,
    /// each stored contiguously; on success each one is overwritten
    /// with its solution.
    ///
    /// # Errors
    /// * If `rhs.len()` is not a multiple of the system size
    /// * If the system cannot be solved, or the solution is not finite
    fn solve(&self, system: &Tridiagonal<T>, rhs: &mut [T]) -> Result<()>;
}

/// Thomas algorithm: LU factorization without pivoting, followed by
/// forward and back substitution.
///
/// The factorization is computed once and shared by every right-hand side.
/// Without pivoting this is only reliable for well-conditioned systems such
/// as the ones produced by spline construction on strictly increasing knots.
#[derive(Clone, Copy, Debug, Default)]
pub struct Thomas;

impl<T: Float> TridiagonalSolver<T> for Thomas {
    fn solve(&self, system: &Tridiagonal<T>, rhs: &mut [T]) -> Result<()> {
        let n = system.len();
        if rhs.is_empty() || rhs.len() % n != 0 {
            return Err(Error::ShapeMismatch {
                expected: n,
                actual: rhs.len(),
                context: "tridiagonal right-hand side",
            });
        }

        let (lower, diag, upper) = (system.lower(), system.diag(), system.upper());

        // Forward sweep on the matrix alone: pivots and normalized super-diagonal
        let mut pivots = vec![T::zero(); n];
        let mut sup = vec![T::zero(); n];
        for i in 0..n {
            let pivot = if i == 0 {
                diag[0]
            } else {
                diag[i] - lower[i] * sup[i - 1]
            };
            if pivot == T::zero() || !pivot.is_finite() {
                return Err(Error::Singular { row: i });
            }
            pivots[i] = pivot;
            if i + 1 < n {
                sup[i] = upper[i] / pivot;
            }
        }

        for block in rhs.chunks_exact_mut(n) {
            // Forward substitution
            block[0] = block[0] / pivots[0];
            for i in 1..n {
                block[i] = (block[i] - lower[i] * block[i - 1]) / pivots[i];
            }

            // Back substitution
            for i in (0..n - 1).rev() {
                block[i] = block[i] - sup[i] * block[i + 1];
            }

            if let Some(row) = block.iter().position(|v| !v.is_finite()) {
                return Err(Error::Singular { row });
            }
        }

        Ok(())
    }
}
