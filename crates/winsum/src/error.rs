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

//! Error types for the window kernels.
//!
//! Two things can go wrong: the caller asks for a window that does not fit
//! the sequence, or a window sum is not representable in the chosen
//! integer type. Both are reported through `WindowSumError`; neither is
//! retried.

use std::fmt::Display;

/// Details about a rejected window size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidWindowError {
    /// The requested window size.
    pub window_size: usize,
    /// The length of the sequence the window was requested over.
    pub len: usize,
}

impl InvalidWindowError {
    #[inline]
    pub fn new(window_size: usize, len: usize) -> Self {
        Self { window_size, len }
    }
}

impl Display for InvalidWindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.window_size == 0 {
            write!(f, "Window size must be at least 1")
        } else {
            write!(
                f,
                "Window size {} exceeds sequence length {}",
                self.window_size, self.len
            )
        }
    }
}

impl std::error::Error for InvalidWindowError {}

/// Details about a window sum that does not fit the integer type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverflowError {
    /// The start offset of the window whose sum overflowed.
    pub offset: usize,
}

impl OverflowError {
    #[inline]
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }
}

impl Display for OverflowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Sum of the window starting at offset {} overflows the integer type",
            self.offset
        )
    }
}

impl std::error::Error for OverflowError {}

/// The error type for window sum computations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowSumError {
    /// The window size is zero or larger than the sequence.
    InvalidArgument(InvalidWindowError),
    /// A window sum is not representable in the integer type.
    ArithmeticOverflow(OverflowError),
}

impl WindowSumError {
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::ArithmeticOverflow(_))
    }
}

impl Display for WindowSumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(e) => write!(f, "Invalid argument: {}", e),
            Self::ArithmeticOverflow(e) => write!(f, "Arithmetic overflow: {}", e),
        }
    }
}

impl std::error::Error for WindowSumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidArgument(e) => Some(e),
            Self::ArithmeticOverflow(e) => Some(e),
        }
    }
}

impl From<InvalidWindowError> for WindowSumError {
    fn from(e: InvalidWindowError) -> Self {
        Self::InvalidArgument(e)
    }
}

impl From<OverflowError> for WindowSumError {
    fn from(e: OverflowError) -> Self {
        Self::ArithmeticOverflow(e)
    }
}
