// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Maximum window sum.

use crate::error::{InvalidWindowError, WindowSumError};
use crate::sliding::SlidingWindowSums;
use crate::window::WindowMax;
use winsum_core::num::numeric::WindowNumeric;

/// Returns the maximum sum of any `window_size` contiguous elements of `values`.
///
/// Runs in O(n) time and O(1) extra space.
///
/// # Errors
///
/// - `WindowSumError::InvalidArgument` if `window_size` is zero or exceeds
///   `values.len()`.
/// - `WindowSumError::ArithmeticOverflow` if a window sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// use winsum::max_window_sum;
///
/// assert_eq!(max_window_sum(&[1, 4, 2, 10, 2, 3, 1, 0, 20], 4), Ok(24));
/// assert_eq!(max_window_sum(&[100, 200, 300, 400], 2), Ok(700));
/// assert!(max_window_sum(&[1, 2, 3], 5).is_err());
/// ```
#[inline]
pub fn max_window_sum<T>(values: &[T], window_size: usize) -> Result<T, WindowSumError>
where
    T: WindowNumeric,
{
    max_window(values, window_size).map(|best| best.sum())
}

/// Like [`max_window_sum`], but also reports where the maximum occurs.
///
/// When several windows share the maximal sum the one with the lowest start
/// offset is returned.
///
/// # Examples
///
/// ```rust
/// use winsum::max_window;
///
/// let best = max_window(&[1, 4, 2, 10, 2, 3, 1, 0, 20], 4).unwrap();
/// assert_eq!(best.sum(), 24);
/// assert_eq!(best.range(), 5..9);
/// ```
pub fn max_window<T>(values: &[T], window_size: usize) -> Result<WindowMax<T>, WindowSumError>
where
    T: WindowNumeric,
{
    let mut sums = SlidingWindowSums::new(values, window_size)?;

    // A validated window has at least one position.
    let Some(first) = sums.next() else {
        return Err(InvalidWindowError::new(window_size, values.len()).into());
    };
    let mut best = WindowMax::new(0, window_size, first?);

    for (offset, sum) in (1..).zip(sums) {
        let sum = sum?;
        if sum > best.sum() {
            best = WindowMax::new(offset, window_size, sum);
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OverflowError;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn brute_force_max(values: &[i64], k: usize) -> i64 {
        values
            .windows(k)
            .map(|w| w.iter().sum::<i64>())
            .max()
            .expect("at least one window")
    }

    #[test]
    fn test_max_window_sum_mixed_values() {
        let v = [1i64, 4, 2, 10, 2, 3, 1, 0, 20];
        assert_eq!(max_window_sum(&v, 4), Ok(24));
    }

    #[test]
    fn test_max_window_sum_increasing_values() {
        let v = [100i32, 200, 300, 400];
        assert_eq!(max_window_sum(&v, 2), Ok(700));
    }

    #[test]
    fn test_max_window_sum_single_element() {
        assert_eq!(max_window_sum(&[5i64], 1), Ok(5));
    }

    #[test]
    fn test_max_window_sum_window_larger_than_input() {
        let v = [1i64, 2, 3];
        assert_eq!(
            max_window_sum(&v, 5),
            Err(WindowSumError::InvalidArgument(InvalidWindowError::new(5, 3)))
        );
    }

    #[test]
    fn test_max_window_sum_zero_window() {
        let v = [1i64, 2, 3];
        assert_eq!(
            max_window_sum(&v, 0),
            Err(WindowSumError::InvalidArgument(InvalidWindowError::new(0, 3)))
        );
    }

    #[test]
    fn test_max_window_sum_empty_input() {
        let v: [i32; 0] = [];
        assert!(max_window_sum(&v, 1).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_max_window_sum_all_negative() {
        let v = [-8i64, -3, -6, -2, -5, -4];
        assert_eq!(max_window_sum(&v, 1), Ok(-2));
        assert_eq!(max_window_sum(&v, 2), Ok(-7));
    }

    #[test]
    fn test_max_window_sum_overflow() {
        let v = [i8::MAX, 1];
        assert_eq!(
            max_window_sum(&v, 2),
            Err(WindowSumError::ArithmeticOverflow(OverflowError::new(0)))
        );
    }

    #[test]
    fn test_max_window_sum_first_window_with_cancelling_wraps() {
        assert_eq!(max_window_sum(&[100i8, 100, -100], 3), Ok(100));
        assert_eq!(max_window_sum(&[100i8, 100, -100, 20], 3), Ok(100));
        assert_eq!(
            max_window_sum(&[100i8, 100, -100, 100], 4),
            Err(WindowSumError::ArithmeticOverflow(OverflowError::new(0)))
        );
    }

    #[test]
    fn test_max_window_full_window_range_ends_at_len() {
        let v = [7i64, -2, 9, 4];
        let best = max_window(&v, v.len()).unwrap();
        assert_eq!(best.range(), 0..v.len());
        assert_eq!(best.end(), v.len());
        assert_eq!(best.sum(), 18);
    }

    #[test]
    fn test_max_window_sum_wide_type_avoids_overflow() {
        let v = [i64::from(i32::MAX), i64::from(i32::MAX), 1];
        assert_eq!(max_window_sum(&v, 2), Ok(2 * i64::from(i32::MAX)));
    }

    #[test]
    fn test_max_window_reports_first_maximal_window() {
        let v = [3i64, 1, 3, 1, 3];
        let best = max_window(&v, 2).unwrap();
        assert_eq!(best.sum(), 4);
        assert_eq!(best.start(), 0);
        assert_eq!(best.range(), 0..2);
    }

    #[test]
    fn test_max_window_last_window() {
        let v = [1i64, 4, 2, 10, 2, 3, 1, 0, 20];
        let best = max_window(&v, 4).unwrap();
        assert_eq!(best, WindowMax::new(5, 4, 24));
    }

    #[test]
    fn test_max_window_sum_full_window_is_total() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let n = rng.random_range(1..50);
            let v: Vec<i64> = (0..n).map(|_| rng.random_range(-500..=500)).collect();
            assert_eq!(max_window_sum(&v, v.len()), Ok(v.iter().sum::<i64>()));
        }
    }

    #[test]
    fn test_max_window_sum_unit_window_is_max() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..100 {
            let n = rng.random_range(1..50);
            let v: Vec<i64> = (0..n).map(|_| rng.random_range(-500..=500)).collect();
            assert_eq!(max_window_sum(&v, 1), Ok(*v.iter().max().unwrap()));
        }
    }

    #[test]
    fn test_max_window_sum_matches_brute_force_random() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..500 {
            let n = rng.random_range(1..128);
            let v: Vec<i64> = (0..n)
                .map(|_| rng.random_range(-1_000_000..=1_000_000))
                .collect();
            let k = rng.random_range(1..=n);
            assert_eq!(
                max_window_sum(&v, k),
                Ok(brute_force_max(&v, k)),
                "mismatch for values={:?}, k={}",
                v,
                k
            );

            let best = max_window(&v, k).unwrap();
            assert_eq!(v[best.range()].iter().sum::<i64>(), best.sum());
        }
    }

    #[test]
    fn test_max_window_sum_generic_over_widths() {
        let v16 = [1i16, -2, 3, -4, 5];
        let v128 = [1i128, -2, 3, -4, 5];
        let visize = [1isize, -2, 3, -4, 5];
        assert_eq!(max_window_sum(&v16, 3), Ok(4));
        assert_eq!(max_window_sum(&v128, 3), Ok(4));
        assert_eq!(max_window_sum(&visize, 3), Ok(4));
    }
}
