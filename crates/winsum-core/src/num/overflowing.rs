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

//! By-value overflowing addition.
//!
//! Unlike the checked traits, these report a wrap and still return the
//! wrapped value. Summing a run of values this way, and keeping a signed
//! tally of the wraps, gives the exact sum whenever the wraps cancel out.

use core::ops::Add;

/// A trait for types that support overflowing addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use winsum_core::num::overflowing::OverflowingAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.overflowing_add_val(27), (127, false));
/// assert_eq!(a.overflowing_add_val(28), (-128, true)); // Wraps around
/// ```
pub trait OverflowingAddVal: Sized + Add<Self, Output = Self> {
    /// Performs wrapping addition by value, also returning whether the
    /// result wrapped around the type bounds.
    fn overflowing_add_val(self, v: Self) -> (Self, bool);
}

macro_rules! overflowing_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl OverflowingAddVal for $t {
                #[inline(always)]
                fn overflowing_add_val(self, v: $t) -> ($t, bool) {
                    <$t>::overflowing_add(self, v)
                }
            }
        )*
    };
}

overflowing_impl_val!(i8, i16, i32, i64, i128, isize);
