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

//! # Numeric Foundations
//!
//! Integer traits consumed by the window kernels.
//!
//! ## Submodules
//!
//! - `constants`: The `Zero` associated constant for signed integers, used
//!   as the identity when accumulating the first window.
//! - `checked`: By-value `checked_add_val` / `checked_sub_val` traits that
//!   surface overflow as `None` instead of wrapping or panicking.
//! - `overflowing`: By-value `overflowing_add_val`, reporting the wrap
//!   alongside the wrapped value.
//! - `numeric`: `WindowNumeric`, the single bound the kernels are generic
//!   over.

pub mod checked;
pub mod constants;
pub mod numeric;
pub mod overflowing;
