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

//! By-value checked arithmetic.
//!
//! Window sums are maintained incrementally, so every step is either an
//! addition of the entering element or a subtraction of the leaving one.
//! These traits mirror the intrinsic `checked_add` / `checked_sub` of the
//! signed primitives behind a generic, reference-free API.

use core::ops::{Add, Sub};

/// A trait for types that support checked addition by value (no references).
///
/// # Examples
///
/// ```rust
/// # use winsum_core::num::checked::CheckedAddVal;
/// let a: i8 = 100;
/// assert_eq!(a.checked_add_val(27), Some(127));
/// assert_eq!(a.checked_add_val(28), None); // Overflow occurs
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value (no references).
///
/// # Examples
///
/// ```rust
/// # use winsum_core::num::checked::CheckedSubVal;
/// let a: i8 = -100;
/// assert_eq!(a.checked_sub_val(28), Some(-128));
/// assert_eq!(a.checked_sub_val(29), None); // Underflow occurs
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }
        )*
    };
}

checked_impl_val!(i8, i16, i32, i64, i128, isize);
