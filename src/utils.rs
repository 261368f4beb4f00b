//! Convenience methods for building sample and observation arrays in a way
//! that echoes, but does not exactly match, methods common in scripting languages.
use itertools::Itertools;
use num_traits::Float;

use crate::error::{Error, Result};

/// Generates evenly spaced values from start to stop,
/// including the endpoint.
///
/// # Errors
/// * If `n < 2`
/// * If `n` is not representable in `T`
pub fn linspace<T>(start: T, stop: T, n: usize) -> Result<Vec<T>>
where
    T: Float,
{
    if n < 2 {
        return Err(Error::TooFewPoints {
            required: 2,
            actual: n,
        });
    }
    let dx: T = (stop - start) / T::from(n - 1).ok_or(Error::Unrepresentable)?;
    (0..n)
        .map(|i| Ok(start + T::from(i).ok_or(Error::Unrepresentable)? * dx))
        .collect()
}

/// Interleaves per-channel samples into the C-ordered layout used for
/// multi-channel values: (y0(x0), y1(x0), ..., y0(x1), y1(x1), ...).
///
/// Channels are truncated to the shortest one.
pub fn interleave<T: Copy>(channels: &[Vec<T>]) -> Vec<T> {
    let n = channels.iter().map(Vec::len).min().unwrap_or(0);
    (0..n)
        .cartesian_product(0..channels.len())
        .map(|(i, j)| channels[j][i])
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_linspace() {
        assert_eq!(linspace(0.0, 1.0, 5).unwrap(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(linspace(0.0, 1.0, 1).is_err());
    }

    #[test]
    fn test_interleave() {
        let a = vec![1, 2, 3];
        let b = vec![10, 20, 30];
        assert_eq!(interleave(&[a, b]), vec![1, 10, 2, 20, 3, 30]);
        assert!(interleave::<f64>(&[]).is_empty());
    }
}
