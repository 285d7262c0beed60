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

//! # Lazy Numbers
//!
//! `Numeric` is the capability "read me back as `i64`, `i32`, `f32`, or
//! `f64`". A plain `capstan_core::num::Number` is trivially numeric. A
//! `NumberEnvelope` is numeric through four independent scalars, one per
//! representation, each evaluated only when its accessor is called.
//!
//! Accessors on an envelope never affect one another: reading `as_int()`
//! does not evaluate, cache, or otherwise touch the `i64`, `f32`, or `f64`
//! scalar.

use crate::scalar::Scalar;
use capstan_core::{error::EvaluationError, num::Number};

/// A value readable in each of the four numeric representations.
pub trait Numeric {
    /// Returns the value as a 64-bit integer.
    fn as_long(&self) -> Result<i64, EvaluationError>;

    /// Returns the value as a 32-bit integer.
    fn as_int(&self) -> Result<i32, EvaluationError>;

    /// Returns the value as a 32-bit float.
    fn as_float(&self) -> Result<f32, EvaluationError>;

    /// Returns the value as a 64-bit float.
    fn as_double(&self) -> Result<f64, EvaluationError>;
}

impl Numeric for Number {
    #[inline]
    fn as_long(&self) -> Result<i64, EvaluationError> {
        Ok(Number::as_long(*self))
    }

    #[inline]
    fn as_int(&self) -> Result<i32, EvaluationError> {
        Ok(Number::as_int(*self))
    }

    #[inline]
    fn as_float(&self) -> Result<f32, EvaluationError> {
        Ok(Number::as_float(*self))
    }

    #[inline]
    fn as_double(&self) -> Result<f64, EvaluationError> {
        Ok(Number::as_double(*self))
    }
}

/// A number assembled from one scalar per representation.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::{number::{NumberEnvelope, Numeric}, scalar::Constant};
/// let pi = NumberEnvelope::new(
///     Constant::new(3_i64),
///     Constant::new(3_i32),
///     Constant::new(3.14159_f32),
///     Constant::new(3.14159_f64),
/// );
/// assert_eq!(pi.as_int(), Ok(3));
/// assert_eq!(pi.as_double(), Ok(3.14159));
/// ```
#[derive(Debug, Clone)]
pub struct NumberEnvelope<L, I, F, D> {
    long: L,
    int: I,
    float: F,
    double: D,
}

impl<L, I, F, D> NumberEnvelope<L, I, F, D>
where
    L: Scalar<Output = i64>,
    I: Scalar<Output = i32>,
    F: Scalar<Output = f32>,
    D: Scalar<Output = f64>,
{
    /// Creates an envelope from its four representation scalars.
    #[inline]
    pub fn new(long: L, int: I, float: F, double: D) -> Self {
        Self {
            long,
            int,
            float,
            double,
        }
    }

    /// Returns the scalar behind `as_long`.
    #[inline]
    pub fn long_scalar(&self) -> &L {
        &self.long
    }

    /// Returns the scalar behind `as_int`.
    #[inline]
    pub fn int_scalar(&self) -> &I {
        &self.int
    }

    /// Returns the scalar behind `as_float`.
    #[inline]
    pub fn float_scalar(&self) -> &F {
        &self.float
    }

    /// Returns the scalar behind `as_double`.
    #[inline]
    pub fn double_scalar(&self) -> &D {
        &self.double
    }
}

impl<L, I, F, D> Numeric for NumberEnvelope<L, I, F, D>
where
    L: Scalar<Output = i64>,
    I: Scalar<Output = i32>,
    F: Scalar<Output = f32>,
    D: Scalar<Output = f64>,
{
    #[inline]
    fn as_long(&self) -> Result<i64, EvaluationError> {
        self.long.value()
    }

    #[inline]
    fn as_int(&self) -> Result<i32, EvaluationError> {
        self.int.value()
    }

    #[inline]
    fn as_float(&self) -> Result<f32, EvaluationError> {
        self.float.value()
    }

    #[inline]
    fn as_double(&self) -> Result<f64, EvaluationError> {
        self.double.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Constant, ScalarOf};
    use std::cell::Cell;

    #[test]
    fn test_number_is_numeric() {
        let n = Number::from(3_000_000_000_i64);
        assert_eq!(Numeric::as_long(&n), Ok(3_000_000_000));
        assert_eq!(Numeric::as_int(&n), Ok(3_000_000_000_i64 as i32));
        assert_eq!(Numeric::as_float(&n), Ok(3.0e9));
        assert_eq!(Numeric::as_double(&n), Ok(3.0e9));
    }

    #[test]
    fn test_accessors_are_independent() {
        let long_calls = Cell::new(0);
        let int_calls = Cell::new(0);
        let envelope = NumberEnvelope::new(
            ScalarOf::new(|| {
                long_calls.set(long_calls.get() + 1);
                Ok(1_i64)
            }),
            ScalarOf::new(|| {
                int_calls.set(int_calls.get() + 1);
                Ok(2_i32)
            }),
            Constant::new(3.0_f32),
            Constant::new(4.0_f64),
        );

        assert_eq!(envelope.as_int(), Ok(2));
        assert_eq!(envelope.as_int(), Ok(2));
        assert_eq!(int_calls.get(), 2);
        assert_eq!(long_calls.get(), 0);
    }

    #[test]
    fn test_failure_is_local_to_representation() {
        let envelope = NumberEnvelope::new(
            Constant::new(1_i64),
            Constant::new(1_i32),
            ScalarOf::new(|| -> Result<f32, EvaluationError> {
                Err(EvaluationError::new("no float"))
            }),
            Constant::new(1.0_f64),
        );

        assert_eq!(envelope.as_float(), Err(EvaluationError::new("no float")));
        assert_eq!(envelope.as_long(), Ok(1));
        assert_eq!(envelope.as_double(), Ok(1.0));
    }

    #[test]
    fn test_scalar_getters() {
        let envelope = NumberEnvelope::new(
            Constant::new(10_i64),
            Constant::new(10_i32),
            Constant::new(10.0_f32),
            Constant::new(10.0_f64),
        );
        assert_eq!(envelope.long_scalar().value(), Ok(10));
        assert_eq!(envelope.int_scalar().value(), Ok(10));
        assert_eq!(envelope.float_scalar().value(), Ok(10.0));
        assert_eq!(envelope.double_scalar().value(), Ok(10.0));
    }
}
