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

/// A trait for signed integer types that have a constant representing 0.
///
/// # Examples
///
/// ```rust
/// # use winsum_core::num::constants::Zero;
/// assert_eq!(<i32 as Zero>::ZERO, 0);
/// assert_eq!(<i8 as Zero>::ZERO, 0);
/// ```
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

macro_rules! impl_zero_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

impl_zero_for!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::Zero;

    fn zero_of<T: Zero>() -> T {
        T::ZERO
    }

    #[test]
    fn test_zero_matches_literal_for_every_width() {
        assert_eq!(zero_of::<i8>(), 0i8);
        assert_eq!(zero_of::<i16>(), 0i16);
        assert_eq!(zero_of::<i32>(), 0i32);
        assert_eq!(zero_of::<i64>(), 0i64);
        assert_eq!(zero_of::<i128>(), 0i128);
        assert_eq!(zero_of::<isize>(), 0isize);
    }
}
