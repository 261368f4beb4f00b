//! Piecewise-cubic spline interpolation through a sequence of samples,
//! with any number of output channels sharing one set of knots.
//!
//! ```rust
//! use cubicspline::{Cubic, Interp1D, Lookup};
//!
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0];
//! let y = [0.0, 1.0, 8.0, 27.0, 64.0];
//! let spline = Cubic::new(&x, &y).unwrap();
//!
//! // Ascending points use a forward-only cursor over the segments
//! let out = spline.eval_alloc(&[0.5, 1.5, 3.5]).unwrap();
//! assert!((out[1] - 3.375).abs() < 1e-10);
//!
//! // Points in any order need a binary search per point
//! let mut out = [0.0; 2];
//! spline.eval_with(&[3.5, 0.5], &mut out, Lookup::Bisect).unwrap();
//! assert!((out[0] - 42.875).abs() < 1e-10);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops are a significant speedup
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod error;
pub mod one_dim;
pub mod tridiagonal;

pub use error::{Error, Result};
pub use one_dim::{Cubic, Extrap, Interp1D, Lookup};
pub use tridiagonal::{Thomas, Tridiagonal, TridiagonalSolver};

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;
