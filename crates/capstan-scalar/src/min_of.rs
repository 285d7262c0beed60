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

//! # Multi-Representation Minimum
//!
//! The dual of `MaxOf`: folds with `min` starting from `i64::MAX`,
//! `i32::MAX`, `f32::MAX`, and `f64::MAX`. Conversion, laziness, NaN and
//! failure behavior are the same as for `MaxOf`.

use crate::{
    max_of::{ReducedNumber, Reduction, evaluate, reduction},
    number::{NumberEnvelope, Numeric},
};
use capstan_core::{
    error::EvaluationError,
    iterable::{Iterable, IterableOf},
    num::{Number, constants::Highest, ops::MinVal},
};
use std::sync::Arc;

/// The least of a sequence of numbers, in every representation.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::min_of::MinOf;
/// let min = MinOf::from_doubles(&[2.5, -1.25, 8.0]);
/// assert_eq!(min.as_double(), Ok(-1.25));
/// assert_eq!(min.as_int(), Ok(-1));
/// ```
#[derive(Debug, Clone)]
pub struct MinOf<S> {
    number: ReducedNumber<S>,
}

impl<S> MinOf<S>
where
    S: Iterable<Item = Number>,
{
    /// Creates the reducer over `src` without reading it.
    pub fn new(src: S) -> Self {
        let src = Arc::new(src);
        Self {
            number: NumberEnvelope::new(
                reduction(&src, i64::HIGHEST, i64::min_val),
                reduction(&src, i32::HIGHEST, i32::min_val),
                reduction(&src, f32::HIGHEST, f32::min_val),
                reduction(&src, f64::HIGHEST, f64::min_val),
            ),
        }
    }

    /// Returns the minimum as a 64-bit integer.
    #[inline]
    pub fn as_long(&self) -> Result<i64, EvaluationError> {
        evaluate("min", self.number.long_scalar())
    }

    /// Returns the minimum as a 32-bit integer.
    #[inline]
    pub fn as_int(&self) -> Result<i32, EvaluationError> {
        evaluate("min", self.number.int_scalar())
    }

    /// Returns the minimum as a 32-bit float.
    #[inline]
    pub fn as_float(&self) -> Result<f32, EvaluationError> {
        evaluate("min", self.number.float_scalar())
    }

    /// Returns the minimum as a 64-bit float.
    #[inline]
    pub fn as_double(&self) -> Result<f64, EvaluationError> {
        evaluate("min", self.number.double_scalar())
    }

    /// Returns the lazy `i64` fold, suitable for wrapping in `Sticky`.
    #[inline]
    pub fn long_scalar(&self) -> &Reduction<S, i64> {
        self.number.long_scalar()
    }

    /// Returns the lazy `i32` fold.
    #[inline]
    pub fn int_scalar(&self) -> &Reduction<S, i32> {
        self.number.int_scalar()
    }

    /// Returns the lazy `f32` fold.
    #[inline]
    pub fn float_scalar(&self) -> &Reduction<S, f32> {
        self.number.float_scalar()
    }

    /// Returns the lazy `f64` fold.
    #[inline]
    pub fn double_scalar(&self) -> &Reduction<S, f64> {
        self.number.double_scalar()
    }
}

impl MinOf<IterableOf<Number>> {
    /// Creates the reducer over 32-bit integers.
    pub fn from_ints(values: &[i32]) -> Self {
        Self::from_numbers(values.iter().copied())
    }

    /// Creates the reducer over 64-bit integers.
    pub fn from_longs(values: &[i64]) -> Self {
        Self::from_numbers(values.iter().copied())
    }

    /// Creates the reducer over 32-bit floats.
    pub fn from_floats(values: &[f32]) -> Self {
        Self::from_numbers(values.iter().copied())
    }

    /// Creates the reducer over 64-bit floats.
    pub fn from_doubles(values: &[f64]) -> Self {
        Self::from_numbers(values.iter().copied())
    }

    /// Creates the reducer over anything convertible into `Number`.
    pub fn from_numbers<N>(values: impl IntoIterator<Item = N>) -> Self
    where
        N: Into<Number>,
    {
        Self::new(values.into_iter().map(Into::into).collect())
    }
}

impl<S> Numeric for MinOf<S>
where
    S: Iterable<Item = Number>,
{
    #[inline]
    fn as_long(&self) -> Result<i64, EvaluationError> {
        MinOf::as_long(self)
    }

    #[inline]
    fn as_int(&self) -> Result<i32, EvaluationError> {
        MinOf::as_int(self)
    }

    #[inline]
    fn as_float(&self) -> Result<f32, EvaluationError> {
        MinOf::as_float(self)
    }

    #[inline]
    fn as_double(&self) -> Result<f64, EvaluationError> {
        MinOf::as_double(self)
    }
}

/// Creates a `MinOf` from numeric literals of mixed types.
#[macro_export]
macro_rules! min_of {
    ($($value:expr),* $(,)?) => {
        $crate::min_of::MinOf::new($crate::iterable::IterableOf::<$crate::Number>::new(
            ::std::vec![$($crate::Number::from($value)),*],
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::max_of::MaxOf;

    #[test]
    fn test_basic() {
        let min = min_of![4, 3_i64, 2.5_f32, 7.0];
        assert_eq!(min.as_long(), Ok(2));
        assert_eq!(min.as_int(), Ok(2));
        assert_eq!(min.as_float(), Ok(2.5));
        assert_eq!(min.as_double(), Ok(2.5));
    }

    #[test]
    fn test_empty_yields_highest() {
        let min = MinOf::from_longs(&[]);
        assert_eq!(min.as_long(), Ok(i64::MAX));
        assert_eq!(min.as_int(), Ok(i32::MAX));
        assert_eq!(min.as_float(), Ok(f32::MAX));
        assert_eq!(min.as_double(), Ok(f64::MAX));
    }

    #[test]
    fn test_narrowing_applies() {
        let min = MinOf::from_longs(&[3_000_000_000, 10]);
        assert_eq!(min.as_long(), Ok(10));
        assert_eq!(min.as_int(), Ok(3_000_000_000_i64 as i32));
    }

    #[test]
    fn test_shares_source_with_max() {
        let src = IterableOf::new(vec![Number::from(5), Number::from(-5)]);
        let min = MinOf::new(&src);
        let max = MaxOf::new(&src);
        assert_eq!(min.as_int(), Ok(-5));
        assert_eq!(max.as_int(), Ok(5));
    }

    #[test]
    fn test_failure() {
        let err = EvaluationError::new("gone");
        let min = MinOf::new(IterableOf::<Number>::from_results(vec![Err(err.clone())]));
        assert_eq!(min.as_double(), Err(err));
    }

    #[test]
    fn test_negative_zero_wins_in_either_order() {
        for zeros in [[0.0, -0.0], [-0.0, 0.0]] {
            let min = MinOf::from_doubles(&zeros);
            assert!(min.as_double().map(f64::is_sign_negative).unwrap_or(false));
            assert!(min.as_float().map(f32::is_sign_negative).unwrap_or(false));
        }
    }

    #[test]
    fn test_from_ints_and_floats() {
        assert_eq!(MinOf::from_ints(&[9, -9, 0]).as_long(), Ok(-9));
        assert_eq!(MinOf::from_floats(&[1.5, 0.25]).as_float(), Ok(0.25));
    }
}
