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

//! # Window Numeric Trait
//!
//! `WindowNumeric` collects the integer capabilities the window kernels
//! rely on into a single alias: the `num_traits` fundamentals (`PrimInt`,
//! `Signed`), formatting for diagnostics, the `Zero` identity, the
//! by-value checked addition and subtraction used for every incremental
//! update, and the overflowing addition used to sum the first window.
//!
//! It is blanket-implemented, so `i8`, `i16`, `i32`, `i64`, `i128` and
//! `isize` all qualify without further ceremony. Unsigned integers are
//! excluded; window sums are signed by definition.

use crate::num::{
    checked::{CheckedAddVal, CheckedSubVal},
    constants::Zero,
    overflowing::OverflowingAddVal,
};
use num_traits::{PrimInt, Signed};

/// A trait alias for the signed integer types a window sum can be computed
/// over.
pub trait WindowNumeric:
    PrimInt
    + Signed
    + std::fmt::Debug
    + std::fmt::Display
    + Zero
    + CheckedAddVal
    + CheckedSubVal
    + OverflowingAddVal
    + Send
    + Sync
{
}

impl<T> WindowNumeric for T where
    T: PrimInt
        + Signed
        + std::fmt::Debug
        + std::fmt::Display
        + Zero
        + CheckedAddVal
        + CheckedSubVal
        + OverflowingAddVal
        + Send
        + Sync
{
}
