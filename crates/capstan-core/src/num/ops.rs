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

//! # Extremum Combiners
//!
//! By-value `max`/`min` traits implemented uniformly for the four
//! representations, so folds can name a combiner as a plain function pointer
//! (`<T as MaxVal>::max_val`) regardless of the element type.
//!
//! Floats propagate NaN: if either operand is NaN the result is NaN. This
//! differs from `f64::max`, which returns the non-NaN operand, and makes a
//! NaN anywhere in a sequence visible in the folded result. Signed zeros are
//! ordered with `-0.0 < 0.0`, so the result never depends on operand order.

use num_traits::{Float, PrimInt};

/// A trait for types that support taking the maximum by value.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::ops::MaxVal;
/// assert_eq!(3_i32.max_val(7), 7);
/// assert!(1.0_f64.max_val(f64::NAN).is_nan());
/// ```
pub trait MaxVal: Sized {
    /// Returns the greater of `self` and `v`.
    fn max_val(self, v: Self) -> Self;
}

/// A trait for types that support taking the minimum by value.
pub trait MinVal: Sized {
    /// Returns the lesser of `self` and `v`.
    fn min_val(self, v: Self) -> Self;
}

#[inline(always)]
fn int_max<T: PrimInt>(a: T, b: T) -> T {
    a.max(b)
}

#[inline(always)]
fn int_min<T: PrimInt>(a: T, b: T) -> T {
    a.min(b)
}

#[inline(always)]
fn float_max<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a == b {
        if a.is_sign_negative() { b } else { a }
    } else {
        a.max(b)
    }
}

#[inline(always)]
fn float_min<T: Float>(a: T, b: T) -> T {
    if a.is_nan() || b.is_nan() {
        T::nan()
    } else if a == b {
        if a.is_sign_negative() { a } else { b }
    } else {
        a.min(b)
    }
}

macro_rules! extremum_impl_val {
    ($trait_name:ident, $method:ident, $t:ty, $src_fn:ident) => {
        impl $trait_name for $t {
            #[inline(always)]
            fn $method(self, v: $t) -> $t {
                $src_fn(self, v)
            }
        }
    };
}

extremum_impl_val!(MaxVal, max_val, i32, int_max);
extremum_impl_val!(MaxVal, max_val, i64, int_max);
extremum_impl_val!(MaxVal, max_val, f32, float_max);
extremum_impl_val!(MaxVal, max_val, f64, float_max);

extremum_impl_val!(MinVal, min_val, i32, int_min);
extremum_impl_val!(MinVal, min_val, i64, int_min);
extremum_impl_val!(MinVal, min_val, f32, float_min);
extremum_impl_val!(MinVal, min_val, f64, float_min);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_max_min() {
        assert_eq!(i64::MIN.max_val(-1), -1);
        assert_eq!(5_i32.min_val(-5), -5);
        assert_eq!(9_i32.max_val(9), 9);
    }

    #[test]
    fn test_float_max_min() {
        assert_eq!(1.5_f32.max_val(-2.0), 1.5);
        assert_eq!(1.5_f64.min_val(-2.0), -2.0);
        assert_eq!((-f64::MAX).max_val(f64::NEG_INFINITY), -f64::MAX);
    }

    #[test]
    fn test_float_nan_propagates() {
        assert!(f32::NAN.max_val(1.0).is_nan());
        assert!(1.0_f32.max_val(f32::NAN).is_nan());
        assert!(f64::NAN.min_val(1.0).is_nan());
        assert!(1.0_f64.min_val(f64::NAN).is_nan());
    }

    #[test]
    fn test_signed_zeros_are_ordered() {
        assert!(0.0_f64.max_val(-0.0).is_sign_positive());
        assert!((-0.0_f64).max_val(0.0).is_sign_positive());
        assert!(0.0_f32.max_val(-0.0).is_sign_positive());
        assert!((-0.0_f32).max_val(0.0).is_sign_positive());

        assert!(0.0_f64.min_val(-0.0).is_sign_negative());
        assert!((-0.0_f64).min_val(0.0).is_sign_negative());
        assert!(0.0_f32.min_val(-0.0).is_sign_negative());
        assert!((-0.0_f32).min_val(0.0).is_sign_negative());
    }

    #[test]
    fn test_as_function_pointer() {
        let combine: fn(i64, i64) -> i64 = <i64 as MaxVal>::max_val;
        assert_eq!([3_i64, 9, 1].into_iter().fold(i64::MIN, combine), 9);
    }
}
