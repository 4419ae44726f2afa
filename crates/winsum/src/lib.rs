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

//! # winsum
//!
//! Maximum sums over fixed-length windows of signed integer slices,
//! computed with the sliding-window technique: the first window is summed
//! once, then each following window is derived from its predecessor by
//! subtracting the element that leaves and adding the one that enters.
//! A full scan is O(n) time and O(1) extra space.
//!
//! ## Modules
//!
//! - `max`: `max_window_sum` and `max_window`, the entry points.
//! - `sliding`: `SlidingWindowSums`, the incremental iterator both entry
//!   points fold over.
//! - `window`: Window validation (`validate_window`) and the `WindowMax`
//!   result describing where a maximum occurs.
//! - `error`: `WindowSumError` and its detail types.
//!
//! ## Errors
//!
//! A window size of zero, or one larger than the input, is rejected with
//! `WindowSumError::InvalidArgument` before any element is read. All
//! arithmetic is checked; a window sum that does not fit the integer type
//! surfaces as `WindowSumError::ArithmeticOverflow`.
//!
//! ```rust
//! use winsum::{WindowSumError, max_window_sum};
//!
//! assert_eq!(max_window_sum(&[5i32], 1), Ok(5));
//! assert!(matches!(
//!     max_window_sum(&[1i32, 2, 3], 5),
//!     Err(WindowSumError::InvalidArgument(_))
//! ));
//! assert!(matches!(
//!     max_window_sum(&[i8::MAX, 1], 2),
//!     Err(WindowSumError::ArithmeticOverflow(_))
//! ));
//! ```

pub mod error;
pub mod max;
pub mod sliding;
pub mod window;

pub use error::{InvalidWindowError, OverflowError, WindowSumError};
pub use max::{max_window, max_window_sum};
pub use sliding::SlidingWindowSums;
pub use window::{WindowMax, validate_window};
pub use winsum_core::num::numeric::WindowNumeric;
