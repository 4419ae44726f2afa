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

//! # Sliding Window Sums
//!
//! `SlidingWindowSums` walks a slice and yields the sum of every window of
//! a fixed size, in ascending order of start offset. The first window is
//! accumulated element by element; each following window is derived from
//! its predecessor by subtracting the element that leaves and adding the
//! element that enters, so the whole walk is O(n) time and O(1) space.
//! Neither step fails on an intermediate value, only on a window sum that
//! does not fit `T`.
//!
//! All arithmetic is checked. When a window sum is not representable in
//! `T` the iterator yields a single `ArithmeticOverflow` error carrying the
//! offending offset and then stays exhausted.
//!
//! ```rust
//! use winsum::sliding::SlidingWindowSums;
//!
//! let sums: Result<Vec<i32>, _> = SlidingWindowSums::new(&[1, 4, 2, 10], 2)
//!     .unwrap()
//!     .collect();
//! assert_eq!(sums.unwrap(), vec![5, 6, 12]);
//! ```

use crate::error::{OverflowError, WindowSumError};
use crate::window::validate_window;
use std::iter::FusedIterator;
use winsum_core::num::numeric::WindowNumeric;

/// Advances a window sum by one position.
///
/// Subtracting first and adding first reach the same value; whenever the
/// result is representable at least one of the two orders keeps its
/// intermediate in range, so overflow is only reported for real.
#[inline(always)]
fn slide<T>(sum: T, leaving: T, entering: T) -> Option<T>
where
    T: WindowNumeric,
{
    sum.checked_sub_val(leaving)
        .and_then(|s| s.checked_add_val(entering))
        .or_else(|| {
            sum.checked_add_val(entering)
                .and_then(|s| s.checked_sub_val(leaving))
        })
}

/// An iterator over the sums of all windows of a fixed size.
#[derive(Debug, Clone)]
pub struct SlidingWindowSums<'a, T> {
    values: &'a [T],
    window_size: usize,
    num_windows: usize,
    offset: usize,
    current: T,
    failed: bool,
}

impl<'a, T> SlidingWindowSums<'a, T>
where
    T: WindowNumeric,
{
    /// Creates an iterator over the windows of `window_size` elements of `values`.
    ///
    /// # Errors
    ///
    /// Returns `WindowSumError::InvalidArgument` if `window_size` is zero or
    /// exceeds `values.len()`. No element is read in that case.
    pub fn new(values: &'a [T], window_size: usize) -> Result<Self, WindowSumError> {
        let num_windows = validate_window(values.len(), window_size)?;
        Ok(Self {
            values,
            window_size,
            num_windows,
            offset: 0,
            current: T::ZERO,
            failed: false,
        })
    }

    /// The start offset of the next window to be yielded.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The total number of window positions, `len - window_size + 1`.
    #[inline]
    pub fn num_windows(&self) -> usize {
        self.num_windows
    }

    #[inline]
    fn remaining(&self) -> usize {
        if self.failed {
            0
        } else {
            self.num_windows - self.offset
        }
    }

    /// Sums the first window exactly.
    ///
    /// Partial sums may wrap. Each wrap is tallied by direction; the total
    /// is representable iff the tally ends at zero, and then the wrapped
    /// accumulator holds the exact sum.
    fn first_window(&self) -> Option<T> {
        let mut sum = T::ZERO;
        let mut wraps: isize = 0;
        for &v in &self.values[..self.window_size] {
            let (next, wrapped) = sum.overflowing_add_val(v);
            if wrapped {
                wraps += if v > T::ZERO { 1 } else { -1 };
            }
            sum = next;
        }
        (wraps == 0).then_some(sum)
    }

    fn overflow(&mut self) -> WindowSumError {
        tracing::debug!(
            offset = self.offset,
            window_size = self.window_size,
            "window sum overflowed"
        );
        self.failed = true;
        OverflowError::new(self.offset).into()
    }
}

impl<'a, T> Iterator for SlidingWindowSums<'a, T>
where
    T: WindowNumeric,
{
    type Item = Result<T, WindowSumError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == 0 {
            return None;
        }

        let next = if self.offset == 0 {
            self.first_window()
        } else {
            debug_assert!(
                self.offset + self.window_size - 1 < self.values.len(),
                "entering element of window {} is out of bounds",
                self.offset
            );
            let leaving = self.values[self.offset - 1];
            let entering = self.values[self.offset + self.window_size - 1];
            slide(self.current, leaving, entering)
        };

        match next {
            Some(sum) => {
                self.current = sum;
                self.offset += 1;
                Some(Ok(sum))
            }
            None => Some(Err(self.overflow())),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, T> ExactSizeIterator for SlidingWindowSums<'a, T> where T: WindowNumeric {}

impl<'a, T> FusedIterator for SlidingWindowSums<'a, T> where T: WindowNumeric {}
