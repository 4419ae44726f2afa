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

//! Window geometry: validation of the requested size and the description
//! of a maximal window.

use crate::error::{InvalidWindowError, WindowSumError};
use std::ops::Range;

/// Validates a window of `window_size` elements over a sequence of `len`
/// elements and returns the number of window positions, `len - window_size + 1`.
///
/// # Errors
///
/// Returns `WindowSumError::InvalidArgument` if `window_size` is zero or
/// larger than `len`.
///
/// # Examples
///
/// ```rust
/// # use winsum::window::validate_window;
/// assert_eq!(validate_window(9, 4), Ok(6));
/// assert_eq!(validate_window(1, 1), Ok(1));
/// assert!(validate_window(3, 5).is_err());
/// assert!(validate_window(3, 0).is_err());
/// ```
#[inline]
pub fn validate_window(len: usize, window_size: usize) -> Result<usize, WindowSumError> {
    if window_size == 0 || window_size > len {
        tracing::debug!(len, window_size, "rejected window size");
        return Err(InvalidWindowError::new(window_size, len).into());
    }
    // 1 <= window_size <= len, so this cannot wrap.
    Ok(len - window_size + 1)
}

/// The first window attaining the maximal sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowMax<T> {
    start: usize,
    window_size: usize,
    sum: T,
}

impl<T> WindowMax<T>
where
    T: Copy,
{
    /// # Invariants
    ///
    /// `start + window_size` must not exceed the length of the sequence the
    /// window was taken from.
    #[inline]
    pub(crate) fn new(start: usize, window_size: usize, sum: T) -> Self {
        debug_assert!(
            start.checked_add(window_size).is_some(),
            "called `WindowMax::new` with a window that ends past `usize::MAX`"
        );
        Self {
            start,
            window_size,
            sum,
        }
    }

    /// The sum of the window.
    #[inline]
    pub fn sum(&self) -> T {
        self.sum
    }

    /// The offset of the first element of the window.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the offset of the last element of the window.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.window_size
    }

    #[inline]
    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// The half-open index range `[start, end)` covered by the window.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl<T> std::fmt::Display for WindowMax<T>
where
    T: Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WindowMax(sum: {}, range: [{}, {}))",
            self.sum,
            self.start,
            self.end()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_window_counts_positions() {
        assert_eq!(validate_window(9, 4), Ok(6));
        assert_eq!(validate_window(4, 4), Ok(1));
        assert_eq!(validate_window(4, 1), Ok(4));
    }

    #[test]
    fn test_validate_window_rejects_zero() {
        assert_eq!(
            validate_window(3, 0),
            Err(WindowSumError::InvalidArgument(InvalidWindowError::new(0, 3)))
        );
    }

    #[test]
    fn test_validate_window_rejects_oversized() {
        assert_eq!(
            validate_window(3, 5),
            Err(WindowSumError::InvalidArgument(InvalidWindowError::new(5, 3)))
        );
        // Empty input has no valid window at all.
        assert!(validate_window(0, 1).unwrap_err().is_invalid_argument());
        assert!(validate_window(0, 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_validate_window_does_not_wrap_on_huge_sizes() {
        assert!(validate_window(3, usize::MAX).is_err());
        assert_eq!(validate_window(usize::MAX, usize::MAX), Ok(1));
    }

    #[test]
    fn test_window_max_accessors() {
        let m = WindowMax::new(5, 4, 24i64);
        assert_eq!(m.sum(), 24);
        assert_eq!(m.start(), 5);
        assert_eq!(m.end(), 9);
        assert_eq!(m.window_size(), 4);
        assert_eq!(m.range(), 5..9);
    }

    #[test]
    fn test_window_max_display() {
        let m = WindowMax::new(2, 2, 700i32);
        assert_eq!(format!("{}", m), "WindowMax(sum: 700, range: [2, 4))");
    }
}
