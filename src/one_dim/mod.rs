//! One-dimensional interpolation with possibly multi-channel values.
//!
//! An interpolant here maps a scalar abscissa to `ndims` output values that
//! share one set of knots. Observation outputs use the same C-style ordering
//! as the samples: `(y0(x0), y1(x0), ..., y0(x1), y1(x1), ...)`.

pub mod cubic;

#[cfg(feature = "std")]
use alloc::vec::Vec;

use num_traits::Float;

use crate::error::{Error, Result};

pub use cubic::Cubic;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Strategy for finding the segment that contains each observation point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lookup {
    /// Monotone cursor that starts at the first segment and only moves forward.
    ///
    /// Amortized O(1) per point over a sweep, but observation points **must**
    /// be ascending. Descending or shuffled points are not detected and
    /// silently pick the wrong segment.
    #[default]
    Cursor,

    /// Independent binary search over the knots for every point.
    ///
    /// O(log(segments)) per point, correct for any ordering.
    Bisect,
}

/// Segment search over a strictly increasing knot sequence.
///
/// Both strategies agree on ties: a point exactly on an interior knot
/// belongs to the segment on its left. Points outside the knots resolve
/// to the first or last segment.
pub(crate) struct Locator<'a, T> {
    nodes: &'a [T],
    lookup: Lookup,
    seg: usize,
}

impl<'a, T: Float> Locator<'a, T> {
    /// `nodes` must hold at least two knots.
    #[inline]
    pub(crate) fn new(nodes: &'a [T], lookup: Lookup) -> Self {
        Self {
            nodes,
            lookup,
            seg: 0,
        }
    }

    /// Index of the segment to use for `loc`.
    #[inline]
    pub(crate) fn locate(&mut self, loc: T) -> usize {
        let last = self.nodes.len() - 2; // Index of the last segment
        match self.lookup {
            Lookup::Cursor => {
                while self.seg < last && loc > self.nodes[self.seg + 1] {
                    self.seg += 1;
                }
                self.seg
            }
            Lookup::Bisect => {
                let i = self.nodes.partition_point(|v| v < &loc);
                i.saturating_sub(1).min(last)
            }
        }
    }
}

/// Classify `loc` against the closed interval `[lo, hi]`, with tolerance `atol`.
#[inline]
pub(crate) fn extrap<T: Float>(lo: T, hi: T, loc: T, atol: T) -> Extrap {
    match loc {
        x if (x - lo) < -atol => Extrap::OutsideLow,
        x if (x - hi) > atol => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    }
}

/// A one-dimensional interpolator with `ndims` output channels.
pub trait Interp1D<T: Float> {
    /// Number of output values per observation point.
    fn ndims(&self) -> usize;

    /// Evaluate the interpolant at a single observation point,
    /// writing one value per channel into `out`.
    ///
    /// # Errors
    /// * If `out.len() != self.ndims()`
    fn eval_one(&self, loc: T, out: &mut [T]) -> Result<()>;

    /// Evaluate the interpolant at a set of observation points.
    ///
    /// The default implementation makes no assumption about ordering and
    /// handles each point independently. Implementations that track a
    /// segment across the sweep may require ascending points.
    ///
    /// # Errors
    /// * If `out.len() != locs.len() * self.ndims()`
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<()> {
        let nd = self.ndims();
        if out.len() != locs.len() * nd {
            return Err(Error::ShapeMismatch {
                expected: locs.len() * nd,
                actual: out.len(),
                context: "output",
            });
        }

        for (&loc, o) in locs.iter().zip(out.chunks_exact_mut(nd)) {
            self.eval_one(loc, o)?;
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[cfg(feature = "std")]
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Result<Vec<T>> {
        let mut out = alloc::vec![T::zero(); locs.len() * self.ndims()];
        self.eval(locs, &mut out)?;
        Ok(out)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const NODES: [f64; 5] = [0.0, 1.0, 2.5, 3.0, 7.0];

    #[test]
    fn test_cursor_and_bisect_agree_on_sorted_sweep() {
        let locs = [-1.0, 0.0, 0.5, 1.0, 1.0, 2.4, 2.5, 2.9, 3.0, 6.0, 7.0, 9.0];
        let expected = [0, 0, 0, 0, 0, 1, 1, 2, 2, 3, 3, 3];

        let mut cursor = Locator::new(&NODES, Lookup::Cursor);
        let mut bisect = Locator::new(&NODES, Lookup::Bisect);
        for (i, &loc) in locs.iter().enumerate() {
            assert_eq!(cursor.locate(loc), expected[i], "cursor at {loc}");
            assert_eq!(bisect.locate(loc), expected[i], "bisect at {loc}");
        }
    }

    #[test]
    fn test_cursor_never_moves_back() {
        let mut cursor = Locator::new(&NODES, Lookup::Cursor);
        assert_eq!(cursor.locate(6.5), 3);
        // A descending point keeps the last segment; only bisection recovers
        assert_eq!(cursor.locate(0.5), 3);
        assert_eq!(Locator::new(&NODES, Lookup::Bisect).locate(0.5), 0);
    }

    #[test]
    fn test_two_knots_single_segment() {
        let nodes = [1.0, 2.0];
        for lookup in [Lookup::Cursor, Lookup::Bisect] {
            let mut loc = Locator::new(&nodes, lookup);
            for x in [0.0, 1.0, 1.5, 2.0, 3.0] {
                assert_eq!(loc.locate(x), 0);
            }
        }
    }

    #[test]
    fn test_extrap_flags() {
        assert_eq!(extrap(0.0, 1.0, 0.5, 0.0), Extrap::Inside);
        assert_eq!(extrap(0.0, 1.0, 1.0, 0.0), Extrap::Inside);
        assert_eq!(extrap(0.0, 1.0, -1e-3, 0.0), Extrap::OutsideLow);
        assert_eq!(extrap(0.0, 1.0, -1e-3, 1e-2), Extrap::Inside);
        assert_eq!(extrap(0.0, 1.0, 1.5, 1e-2), Extrap::OutsideHigh);
    }
}
