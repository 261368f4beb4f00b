//! Piecewise-cubic spline through a sequence of samples.
//!
//! ```rust
//! use cubicspline::{Cubic, Interp1D};
//!
//! // Samples of x^3 with two channels: (x^3, -x^3)
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, -0.0, 1.0, -1.0, 8.0, -8.0, 27.0, -27.0, 64.0, -64.0];
//!
//! let spline = Cubic::new(&x, &y).unwrap();
//!
//! // Ascending observation points, two outputs per point
//! let obs = [0.5, 2.5];
//! let mut out = [0.0; 4];
//! spline.eval(&obs, &mut out).unwrap();
//!
//! assert!((out[2] - 15.625).abs() < 1e-10);
//! assert!((out[3] + 15.625).abs() < 1e-10);
//! ```
//!
//! Construction depends on how many samples are given:
//! * 2 samples: the straight line through both.
//! * 3 samples: a single quadratic over the whole domain. The middle
//!   sample is not kept as a knot; it enters only through the two secant
//!   slopes. The resulting polynomial is the Newton form through all three
//!   samples, so it still passes through the middle sample up to rounding.
//! * 4 or more: a C2 cubic spline with not-a-knot end conditions. Slopes at
//!   the knots come from one tridiagonal solve per output channel.
//!
//! Outside the knots, the first and last segments' polynomials are simply
//! continued; there is no dedicated extrapolation scheme.
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;

use itertools::Itertools;
use num_traits::Float;

use super::{extrap, Extrap, Interp1D, Locator, Lookup};
use crate::error::{Error, Result};
use crate::tridiagonal::{Thomas, Tridiagonal, TridiagonalSolver};

/// Cubic spline interpolant with `ndims` output channels.
///
/// Segment `i` covers `[nodes[i], nodes[i + 1]]` and stores one quadruple
/// `[a, b, c, d]` per channel, evaluated as `a*z^3 + b*z^2 + c*z + d` with
/// `z = x - nodes[i]`.
///
/// Immutable once built; `&Cubic` can be shared freely between threads.
#[derive(Clone, Debug, PartialEq)]
pub struct Cubic<T> {
    /// Knots, strictly increasing, at least two
    nodes: Vec<T>,

    /// Coefficients, row-major by segment then channel, size segments * ndims
    weights: Vec<[T; 4]>,

    /// Number of output channels
    ndims: usize,
}

impl<T: Float> Cubic<T> {
    /// Build a spline through the samples `(x[i], y[i, ..])`, solving the
    /// slope system with the [`Thomas`] algorithm.
    ///
    /// `y` holds `x.len()` rows of `ndims` values each, in C-style ordering
    /// `(y0(x0), y1(x0), ..., y0(x1), y1(x1), ...)`; `ndims` is inferred as
    /// `y.len() / x.len()`.
    ///
    /// # Errors
    /// * If `x` has fewer than 2 entries
    /// * If `y` is empty or its length is not a multiple of `x.len()`
    /// * If `x` is not strictly increasing
    /// * If the slope system is singular, or its solution overflows
    /// * If the resulting coefficients are not finite
    pub fn new(x: &[T], y: &[T]) -> Result<Self> {
        Self::with_solver(x, y, &Thomas)
    }

    /// Same as [`Cubic::new`], with a caller-provided tridiagonal solver.
    ///
    /// The solver is only consulted when 4 or more samples are given.
    pub fn with_solver<S>(x: &[T], y: &[T], solver: &S) -> Result<Self>
    where
        S: TridiagonalSolver<T> + ?Sized,
    {
        let nd = validate(x, y)?;
        let nn = x.len();

        // Segment widths and secant slopes
        let dx: Vec<T> = x.iter().tuple_windows().map(|(&x0, &x1)| x1 - x0).collect();
        let mut dydx = vec![T::zero(); (nn - 1) * nd];
        for (i, (y0, y1)) in y.chunks_exact(nd).tuple_windows().enumerate() {
            for j in 0..nd {
                dydx[i * nd + j] = (y1[j] - y0[j]) / dx[i];
            }
        }

        match nn {
            2 => Ok(Self::linear(x, y, &dydx, nd)),
            3 => Ok(Self::quadratic(x, y, &dx, &dydx, nd)),
            _ => Self::spline(x, y, &dx, &dydx, nd, solver),
        }
    }

    /// One segment holding the line through both samples.
    fn linear(x: &[T], y: &[T], dydx: &[T], nd: usize) -> Self {
        let zero = T::zero();
        let weights = (0..nd).map(|j| [zero, zero, dydx[j], y[j]]).collect();

        Self {
            nodes: vec![x[0], x[1]],
            weights,
            ndims: nd,
        }
    }

    /// One segment over `[x0, x2]` holding a single quadratic built from the
    /// two secant slopes. `x1` is dropped as a knot.
    fn quadratic(x: &[T], y: &[T], dx: &[T], dydx: &[T], nd: usize) -> Self {
        let span = x[2] - x[0];
        let weights = (0..nd)
            .map(|j| {
                let curv = (dydx[nd + j] - dydx[j]) / span;
                [T::zero(), curv, dydx[j] - curv * dx[0], y[j]]
            })
            .collect();

        Self {
            nodes: vec![x[0], x[2]],
            weights,
            ndims: nd,
        }
    }

    /// Full not-a-knot spline, 4 or more samples.
    fn spline<S>(
        x: &[T],
        y: &[T],
        dx: &[T],
        dydx: &[T],
        nd: usize,
        solver: &S,
    ) -> Result<Self>
    where
        S: TridiagonalSolver<T> + ?Sized,
    {
        let nn = x.len();
        let two = T::one() + T::one();
        let three = two + T::one();

        // Spans of the first and last three knots
        let xb = x[2] - x[0];
        let xe = x[nn - 1] - x[nn - 3];

        let mut lower = vec![T::zero(); nn];
        let mut diag = vec![T::zero(); nn];
        let mut upper = vec![T::zero(); nn];

        diag[0] = dx[1];
        upper[0] = xb;
        for i in 1..(nn - 1) {
            lower[i] = dx[i];
            diag[i] = two * (dx[i] + dx[i - 1]);
            upper[i] = dx[i - 1];
        }
        lower[nn - 1] = xe;
        diag[nn - 1] = dx[nn - 3];

        let system = Tridiagonal::new(lower, diag, upper)?;

        // One right-hand side per channel, each stored contiguously
        let mut slopes = vec![T::zero(); nd * nn];
        for (j, rhs) in slopes.chunks_exact_mut(nn).enumerate() {
            let s = |i: usize| dydx[i * nd + j];

            rhs[0] = ((dx[0] + two * xb) * dx[1] * s(0) + dx[0] * dx[0] * s(1)) / xb;
            for i in 1..(nn - 1) {
                rhs[i] = three * (dx[i] * s(i - 1) + dx[i - 1] * s(i));
            }
            rhs[nn - 1] = (dx[nn - 2] * dx[nn - 2] * s(nn - 3)
                + (two * xe + dx[nn - 2]) * dx[nn - 3] * s(nn - 2))
                / xe;
        }

        solver.solve(&system, &mut slopes)?;

        // Hermite data -> power basis, per segment and channel
        let mut weights = Vec::with_capacity((nn - 1) * nd);
        for i in 0..(nn - 1) {
            for j in 0..nd {
                let k0 = slopes[j * nn + i];
                let k1 = slopes[j * nn + i + 1];
                let secant = dydx[i * nd + j];

                let alpha = (secant - k0) / dx[i];
                let beta = (k1 - secant) / dx[i];
                weights.push([(beta - alpha) / dx[i], two * alpha - beta, k0, y[i * nd + j]]);
            }
        }

        if let Some(k) = weights
            .iter()
            .position(|w| w.iter().any(|v| !v.is_finite()))
        {
            return Err(Error::NonFinite { segment: k / nd });
        }

        Ok(Self {
            nodes: x.to_vec(),
            weights,
            ndims: nd,
        })
    }

    /// Knots of the piecewise polynomial.
    ///
    /// For 3-sample inputs this is only the two endpoints.
    #[inline]
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Number of polynomial segments.
    #[inline]
    pub fn segments(&self) -> usize {
        self.nodes.len() - 1
    }

    /// First and last knot.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.nodes[0], self.nodes[self.nodes.len() - 1])
    }

    /// Coefficients `[a, b, c, d]` of every channel on one segment.
    ///
    /// # Panics
    /// If `segment >= self.segments()`
    #[inline]
    pub fn coefficients(&self, segment: usize) -> &[[T; 4]] {
        let nd = self.ndims;
        &self.weights[segment * nd..(segment + 1) * nd]
    }

    /// Where `loc` sits relative to the knots, with tolerance `atol`.
    #[inline]
    pub fn extrap(&self, loc: T, atol: T) -> Extrap {
        let (lo, hi) = self.domain();
        extrap(lo, hi, loc, atol)
    }

    /// Check whether any observation point lies outside the knots by more than `atol`.
    pub fn check_bounds(&self, locs: &[T], atol: T) -> bool {
        locs.iter()
            .any(|&loc| self.extrap(loc, atol) != Extrap::Inside)
    }

    /// Evaluate the spline at `locs`, writing `ndims` values per point into `out`.
    ///
    /// With [`Lookup::Cursor`], `locs` must be ascending.
    ///
    /// # Errors
    /// * If `out.len() != locs.len() * self.ndims()`
    pub fn eval_with(&self, locs: &[T], out: &mut [T], lookup: Lookup) -> Result<()> {
        self.check_output(locs, out)?;

        let mut locator = Locator::new(&self.nodes, lookup);
        for (&loc, o) in locs.iter().zip(out.chunks_exact_mut(self.ndims)) {
            let l = locator.locate(loc);
            let z = loc - self.nodes[l];
            for (v, &[a, b, c, d]) in o.iter_mut().zip(self.coefficients(l)) {
                *v = z * (z * (z * a + b) + c) + d;
            }
        }

        Ok(())
    }

    /// Evaluate the first derivative of the spline at `locs`.
    ///
    /// Points exactly on an interior knot use the segment to their left.
    ///
    /// # Errors
    /// * If `out.len() != locs.len() * self.ndims()`
    pub fn eval_deriv_with(&self, locs: &[T], out: &mut [T], lookup: Lookup) -> Result<()> {
        self.check_output(locs, out)?;

        let two = T::one() + T::one();
        let three = two + T::one();

        let mut locator = Locator::new(&self.nodes, lookup);
        for (&loc, o) in locs.iter().zip(out.chunks_exact_mut(self.ndims)) {
            let l = locator.locate(loc);
            let z = loc - self.nodes[l];
            for (v, &[a, b, c, _]) in o.iter_mut().zip(self.coefficients(l)) {
                *v = z * (z * three * a + two * b) + c;
            }
        }

        Ok(())
    }

    #[inline]
    fn check_output(&self, locs: &[T], out: &[T]) -> Result<()> {
        let expected = locs.len() * self.ndims;
        if out.len() != expected {
            return Err(Error::ShapeMismatch {
                expected,
                actual: out.len(),
                context: "output",
            });
        }
        Ok(())
    }
}

impl<T: Float> Interp1D<T> for Cubic<T> {
    #[inline]
    fn ndims(&self) -> usize {
        self.ndims
    }

    #[inline]
    fn eval_one(&self, loc: T, out: &mut [T]) -> Result<()> {
        self.eval_with(&[loc], out, Lookup::Bisect)
    }

    /// Evaluate with the monotone cursor; `locs` must be ascending.
    /// Use [`Cubic::eval_with`] and [`Lookup::Bisect`] for arbitrary order.
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<()> {
        self.eval_with(locs, out, Lookup::Cursor)
    }
}

/// Check sample shapes and ordering, returning the number of channels.
fn validate<T: Float>(x: &[T], y: &[T]) -> Result<usize> {
    let nn = x.len();
    if nn < 2 {
        return Err(Error::TooFewPoints {
            required: 2,
            actual: nn,
        });
    }

    let nd = y.len() / nn;
    if nd == 0 || y.len() % nn != 0 {
        return Err(Error::ShapeMismatch {
            expected: nn * nd.max(1),
            actual: y.len(),
            context: "sample values",
        });
    }

    // Written so that NaN also fails
    if let Some((index, _)) = x
        .iter()
        .tuple_windows()
        .find_position(|&(x0, x1)| x1.partial_cmp(x0) != Some(Ordering::Greater))
    {
        return Err(Error::NotStrictlyIncreasing { index });
    }

    Ok(nd)
}
