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

//! # Heterogeneous Numbers
//!
//! `Number` is a single value whose declared type is one of `i32`, `i64`,
//! `f32`, or `f64`, but which can be read back in any of those four
//! representations. Reading is a plain `as` cast: integers narrow by
//! wrapping, floats truncate toward zero and saturate at the integer bounds,
//! and NaN becomes `0`. Nothing is rounded and nothing is clamped beyond what
//! the cast itself does.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::num::Number;
//!
//! let n = Number::from(3_000_000_000_i64);
//! assert_eq!(n.as_long(), 3_000_000_000);
//! assert_eq!(n.as_int(), 3_000_000_000_i64 as i32);
//!
//! let f = Number::from(-2.9_f64);
//! assert_eq!(f.as_int(), -2);
//! ```

use crate::num::representation::Representation;

/// A number of heterogeneous declared type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 32-bit signed integer.
    Int(i32),
    /// A 64-bit signed integer.
    Long(i64),
    /// A 32-bit float.
    Float(f32),
    /// A 64-bit float.
    Double(f64),
}

impl Number {
    /// Returns the representation this number was declared with.
    #[inline]
    pub fn declared(&self) -> Representation {
        match self {
            Number::Int(_) => Representation::Int,
            Number::Long(_) => Representation::Long,
            Number::Float(_) => Representation::Float,
            Number::Double(_) => Representation::Double,
        }
    }

    /// Returns the value as a 64-bit integer.
    #[inline]
    pub fn as_long(self) -> i64 {
        match self {
            Number::Int(v) => v as i64,
            Number::Long(v) => v,
            Number::Float(v) => v as i64,
            Number::Double(v) => v as i64,
        }
    }

    /// Returns the value as a 32-bit integer.
    ///
    /// A `Long` outside the `i32` range wraps; a float outside it saturates.
    #[inline]
    pub fn as_int(self) -> i32 {
        match self {
            Number::Int(v) => v,
            Number::Long(v) => v as i32,
            Number::Float(v) => v as i32,
            Number::Double(v) => v as i32,
        }
    }

    /// Returns the value as a 32-bit float, rounding to the nearest
    /// representable value.
    #[inline]
    pub fn as_float(self) -> f32 {
        match self {
            Number::Int(v) => v as f32,
            Number::Long(v) => v as f32,
            Number::Float(v) => v,
            Number::Double(v) => v as f32,
        }
    }

    /// Returns the value as a 64-bit float.
    #[inline]
    pub fn as_double(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Long(v) => v as f64,
            Number::Float(v) => v as f64,
            Number::Double(v) => v,
        }
    }
}

macro_rules! impl_from_for_number {
    ($variant:ident, $t:ty) => {
        impl From<$t> for Number {
            #[inline(always)]
            fn from(v: $t) -> Self {
                Number::$variant(v)
            }
        }
    };
}

impl_from_for_number!(Int, i32);
impl_from_for_number!(Long, i64);
impl_from_for_number!(Float, f32);
impl_from_for_number!(Double, f64);

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Long(v) => write!(f, "{}L", v),
            Number::Float(v) => write!(f, "{}f", v),
            Number::Double(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_representation() {
        assert_eq!(Number::from(1).declared(), Representation::Int);
        assert_eq!(Number::from(1_i64).declared(), Representation::Long);
        assert_eq!(Number::from(1.0_f32).declared(), Representation::Float);
        assert_eq!(Number::from(1.0_f64).declared(), Representation::Double);
    }

    #[test]
    fn test_widening_is_exact() {
        let n = Number::from(i32::MIN);
        assert_eq!(n.as_long(), i32::MIN as i64);
        assert_eq!(n.as_double(), i32::MIN as f64);
    }

    #[test]
    fn test_long_to_int_wraps() {
        let n = Number::from(3_000_000_000_i64);
        assert_eq!(n.as_int(), -1_294_967_296);
    }

    #[test]
    fn test_float_to_int_truncates_toward_zero() {
        assert_eq!(Number::from(2.9_f32).as_int(), 2);
        assert_eq!(Number::from(-2.9_f32).as_int(), -2);
        assert_eq!(Number::from(7.99_f64).as_long(), 7);
        assert_eq!(Number::from(-7.99_f64).as_long(), -7);
    }

    #[test]
    fn test_float_to_int_saturates() {
        assert_eq!(Number::from(1e20_f64).as_int(), i32::MAX);
        assert_eq!(Number::from(-1e20_f64).as_int(), i32::MIN);
        assert_eq!(Number::from(f32::INFINITY).as_long(), i64::MAX);
    }

    #[test]
    fn test_nan_to_int_is_zero() {
        assert_eq!(Number::from(f64::NAN).as_int(), 0);
        assert_eq!(Number::from(f32::NAN).as_long(), 0);
    }

    #[test]
    fn test_double_to_float_rounds_to_nearest() {
        let n = Number::from(0.1_f64);
        assert_eq!(n.as_float(), 0.1_f32);
    }

    #[test]
    fn test_comparison_goes_through_a_representation() {
        let small = Number::Long(1);
        let large = Number::Int(100);
        assert_ne!(Number::Int(1), Number::Long(1));
        assert!(large.as_long() > small.as_long());
        assert!(large.as_double() > small.as_double());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Number::from(4)), "4");
        assert_eq!(format!("{}", Number::from(4_i64)), "4L");
        assert_eq!(format!("{}", Number::from(1.5_f32)), "1.5f");
        assert_eq!(format!("{}", Number::from(1.5_f64)), "1.5");
    }
}
