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

//! # Multi-Representation Maximum
//!
//! `MaxOf` finds the greatest of a sequence of heterogeneous numbers,
//! independently in each of the four representations. Each element is first
//! converted to the requested representation with `as` cast rules and the
//! fold then keeps the greater value, so the result of `as_int()` is the
//! maximum of the converted elements, not the converted maximum.
//!
//! ## Behavior
//!
//! - Lazy: construction reads nothing; every accessor call folds the whole
//!   source again. Wrap `long_scalar()` (or one of its siblings) in
//!   `Sticky` to evaluate once.
//! - Identities: `i64::MIN`, `i32::MIN`, `-f32::MAX`, `-f64::MAX`. An empty
//!   source yields them unchanged, which is indistinguishable from a source
//!   whose true maximum equals the identity.
//! - Narrowing is applied, never clamped: `3_000_000_000_i64` reads back from
//!   `as_int()` as `3_000_000_000_i64 as i32`.
//! - NaN propagates through `as_float()` and `as_double()`.
//! - A failing element aborts the fold with its own `EvaluationError`.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_scalar::max_of::MaxOf;
//!
//! let max = MaxOf::from_longs(&[1, 2, 3, 4]);
//! assert_eq!(max.as_int(), Ok(4));
//! assert_eq!(max.as_long(), Ok(4));
//! assert_eq!(max.as_float(), Ok(4.0));
//! assert_eq!(max.as_double(), Ok(4.0));
//! ```

use crate::{
    folded::Folded,
    number::{NumberEnvelope, Numeric},
};
use capstan_core::{
    error::EvaluationError,
    iterable::{Iterable, IterableOf, Mapped},
    num::{FromNumber, Number, constants::Lowest, ops::MaxVal},
};
use std::sync::Arc;

/// The fold behind one representation of a reducer over `S`.
pub type Reduction<S, T> = Folded<T, fn(T, T) -> T, Mapped<Arc<S>, fn(Number) -> T>>;

/// A number whose four representations are each a `Reduction` over `S`.
pub type ReducedNumber<S> = NumberEnvelope<
    Reduction<S, i64>,
    Reduction<S, i32>,
    Reduction<S, f32>,
    Reduction<S, f64>,
>;

/// Builds the fold of `src` in representation `T`.
pub(crate) fn reduction<S, T>(src: &Arc<S>, identity: T, combiner: fn(T, T) -> T) -> Reduction<S, T>
where
    S: Iterable<Item = Number>,
    T: FromNumber,
{
    let convert: fn(Number) -> T = T::from_number;
    Folded::new(identity, combiner, Mapped::new(Arc::clone(src), convert))
}

/// Evaluates one representation of a reduction, logging the outcome.
#[inline]
pub(crate) fn evaluate<S, T>(
    what: &'static str,
    scalar: &Reduction<S, T>,
) -> Result<T, EvaluationError>
where
    S: Iterable<Item = Number>,
    T: FromNumber + std::fmt::Debug,
{
    use crate::scalar::Scalar;

    let outcome = scalar.value();
    match &outcome {
        Ok(v) => log::trace!("{} as {} = {:?}", what, T::REPRESENTATION, v),
        Err(e) => log::debug!("{} as {} failed: {}", what, T::REPRESENTATION, e),
    }
    outcome
}

/// The greatest of a sequence of numbers, in every representation.
#[derive(Debug, Clone)]
pub struct MaxOf<S> {
    number: ReducedNumber<S>,
}

impl<S> MaxOf<S>
where
    S: Iterable<Item = Number>,
{
    /// Creates the reducer over `src` without reading it.
    pub fn new(src: S) -> Self {
        let src = Arc::new(src);
        Self {
            number: NumberEnvelope::new(
                reduction(&src, i64::LOWEST, i64::max_val),
                reduction(&src, i32::LOWEST, i32::max_val),
                reduction(&src, f32::LOWEST, f32::max_val),
                reduction(&src, f64::LOWEST, f64::max_val),
            ),
        }
    }

    /// Returns the maximum as a 64-bit integer.
    #[inline]
    pub fn as_long(&self) -> Result<i64, EvaluationError> {
        evaluate("max", self.number.long_scalar())
    }

    /// Returns the maximum as a 32-bit integer.
    #[inline]
    pub fn as_int(&self) -> Result<i32, EvaluationError> {
        evaluate("max", self.number.int_scalar())
    }

    /// Returns the maximum as a 32-bit float.
    #[inline]
    pub fn as_float(&self) -> Result<f32, EvaluationError> {
        evaluate("max", self.number.float_scalar())
    }

    /// Returns the maximum as a 64-bit float.
    #[inline]
    pub fn as_double(&self) -> Result<f64, EvaluationError> {
        evaluate("max", self.number.double_scalar())
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

impl MaxOf<IterableOf<Number>> {
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

impl<S> Numeric for MaxOf<S>
where
    S: Iterable<Item = Number>,
{
    #[inline]
    fn as_long(&self) -> Result<i64, EvaluationError> {
        MaxOf::as_long(self)
    }

    #[inline]
    fn as_int(&self) -> Result<i32, EvaluationError> {
        MaxOf::as_int(self)
    }

    #[inline]
    fn as_float(&self) -> Result<f32, EvaluationError> {
        MaxOf::as_float(self)
    }

    #[inline]
    fn as_double(&self) -> Result<f64, EvaluationError> {
        MaxOf::as_double(self)
    }
}

/// Creates a `MaxOf` from numeric literals of mixed types.
///
/// ```rust
/// # use capstan_scalar::max_of;
/// let max = max_of![1, 2_i64, 3.5_f32, 2.5];
/// assert_eq!(max.as_int(), Ok(3));
/// assert_eq!(max.as_float(), Ok(3.5));
/// assert_eq!(max_of![].as_int(), Ok(i32::MIN));
/// ```
#[macro_export]
macro_rules! max_of {
    ($($value:expr),* $(,)?) => {
        $crate::max_of::MaxOf::new($crate::iterable::IterableOf::<$crate::Number>::new(
            ::std::vec![$($crate::Number::from($value)),*],
        ))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{scalar::Scalar, sticky::Sticky};
    use proptest::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_one_to_four() {
        let max = max_of![1, 2, 3, 4];
        assert_eq!(max.as_int(), Ok(4));
        assert_eq!(max.as_long(), Ok(4));
        assert_eq!(max.as_float(), Ok(4.0));
        assert_eq!(max.as_double(), Ok(4.0));
    }

    #[test]
    fn test_empty_yields_sentinels() {
        let max = MaxOf::from_ints(&[]);
        assert_eq!(max.as_long(), Ok(i64::MIN));
        assert_eq!(max.as_int(), Ok(i32::MIN));
        assert_eq!(max.as_float(), Ok(-f32::MAX));
        assert_eq!(max.as_double(), Ok(-f64::MAX));
    }

    #[test]
    fn test_long_narrowing_wraps() {
        let max = MaxOf::from_longs(&[3_000_000_000]);
        assert_eq!(max.as_long(), Ok(3_000_000_000));
        assert_eq!(max.as_int(), Ok(3_000_000_000_i64 as i32));
        assert_eq!(max.as_int(), Ok(-1_294_967_296));
    }

    #[test]
    fn test_narrowing_happens_before_comparison() {
        // 3e9 wraps negative as i32, so 5 wins in that representation.
        let max = max_of![3_000_000_000_i64, 5];
        assert_eq!(max.as_long(), Ok(3_000_000_000));
        assert_eq!(max.as_int(), Ok(5));
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        let max = MaxOf::from_doubles(&[-7.9, -2.5]);
        assert_eq!(max.as_long(), Ok(-2));
        assert_eq!(max.as_int(), Ok(-2));
        assert_eq!(max.as_double(), Ok(-2.5));
    }

    #[test]
    fn test_mixed_types() {
        let max = max_of![1, 10_i64, 2.5_f32, 9.75_f64];
        assert_eq!(max.as_long(), Ok(10));
        assert_eq!(max.as_int(), Ok(10));
        assert_eq!(max.as_float(), Ok(10.0));
        assert_eq!(max.as_double(), Ok(10.0));

        let max = MaxOf::from_floats(&[0.5, 1.75, -3.0]);
        assert_eq!(max.as_float(), Ok(1.75));
        assert_eq!(max.as_int(), Ok(1));
    }

    #[test]
    fn test_all_below_float_identity_is_not_an_infinity() {
        let max = MaxOf::from_doubles(&[f64::NEG_INFINITY]);
        assert_eq!(max.as_double(), Ok(-f64::MAX));
    }

    #[test]
    fn test_nan_propagates() {
        let max = MaxOf::from_doubles(&[1.0, f64::NAN, 2.0]);
        assert!(max.as_double().map(f64::is_nan).unwrap_or(false));
        assert!(max.as_float().map(f32::is_nan).unwrap_or(false));
        assert_eq!(max.as_long(), Ok(2));
    }

    #[test]
    fn test_positive_zero_wins_in_either_order() {
        for zeros in [[0.0, -0.0], [-0.0, 0.0]] {
            let max = MaxOf::from_doubles(&zeros);
            assert!(max.as_double().map(f64::is_sign_positive).unwrap_or(false));
            assert!(max.as_float().map(f32::is_sign_positive).unwrap_or(false));
        }
        let max = MaxOf::from_floats(&[0.0, -0.0]);
        assert!(max.as_float().map(f32::is_sign_positive).unwrap_or(false));
    }

    #[test]
    fn test_call_order_does_not_matter() {
        let max = max_of![7, -3_i64, 6.5_f32];
        let forward = (max.as_long(), max.as_int(), max.as_float(), max.as_double());
        let d = max.as_double();
        let f = max.as_float();
        let i = max.as_int();
        let l = max.as_long();
        assert_eq!(forward, (l, i, f, d));
    }

    #[test]
    fn test_idempotent() {
        let max = MaxOf::from_ints(&[4, 8, 15, 16, 23, 42]);
        assert_eq!(max.as_int(), max.as_int());
        assert_eq!(max.as_double(), max.as_double());
    }

    #[test]
    fn test_failing_element_aborts() {
        let err = EvaluationError::new("cell B7 unreadable");
        let src = IterableOf::from_results(vec![
            Ok(Number::from(1)),
            Err(err.clone()),
            Ok(Number::from(99)),
        ]);
        let max = MaxOf::new(src);

        assert_eq!(max.as_long(), Err(err.clone()));
        assert_eq!(max.as_int(), Err(err.clone()));
        assert_eq!(max.as_float(), Err(err.clone()));
        assert_eq!(max.as_double(), Err(err));
    }

    #[test]
    fn test_lazy_and_refolds() {
        let reads = Cell::new(0);
        let src = IterableOf::new(vec![Number::from(1), Number::from(2)]);
        let counted = Mapped::new(src, |n: Number| {
            reads.set(reads.get() + 1);
            n
        });
        let max = MaxOf::new(counted);
        assert_eq!(reads.get(), 0);

        assert_eq!(max.as_int(), Ok(2));
        assert_eq!(max.as_int(), Ok(2));
        assert_eq!(reads.get(), 4);
    }

    #[test]
    fn test_sticky_accessor_folds_once() {
        let reads = Cell::new(0);
        let src = IterableOf::new(vec![Number::from(3_i64), Number::from(8_i64)]);
        let counted = Mapped::new(src, |n: Number| {
            reads.set(reads.get() + 1);
            n
        });
        let max = MaxOf::new(counted);
        let cached = Sticky::new(max.long_scalar());

        assert_eq!(cached.value(), Ok(8));
        assert_eq!(cached.value(), Ok(8));
        assert_eq!(reads.get(), 2);
    }

    #[test]
    fn test_numeric_trait() {
        fn read<N: Numeric>(n: &N) -> Result<f64, EvaluationError> {
            n.as_double()
        }
        assert_eq!(read(&MaxOf::from_ints(&[2, 5])), Ok(5.0));
    }

    #[test]
    fn test_borrowed_source() {
        let src = IterableOf::new(vec![Number::from(1.5), Number::from(0.5)]);
        let max = MaxOf::new(&src);
        assert_eq!(max.as_double(), Ok(1.5));
        assert_eq!(src.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_matches_iterator_max(values in proptest::collection::vec(any::<i64>(), 1..64)) {
            let max = MaxOf::from_longs(&values);
            let expected_long = values.iter().copied().max().unwrap();
            let expected_int = values.iter().map(|&v| v as i32).max().unwrap();
            let expected_double = values.iter().map(|&v| v as f64).fold(f64::MIN, f64::max);

            prop_assert_eq!(max.as_long(), Ok(expected_long));
            prop_assert_eq!(max.as_int(), Ok(expected_int));
            prop_assert_eq!(max.as_double(), Ok(expected_double));
        }

        #[test]
        fn prop_finite_doubles(values in proptest::collection::vec(-1.0e12_f64..1.0e12, 0..64)) {
            let max = MaxOf::from_doubles(&values);
            let expected = values.iter().copied().fold(-f64::MAX, f64::max);
            let expected_float = values.iter().map(|&v| v as f32).fold(-f32::MAX, f32::max);
            let expected_long = values.iter().map(|&v| v as i64).max().unwrap_or(i64::MIN);

            prop_assert_eq!(max.as_double(), Ok(expected));
            prop_assert_eq!(max.as_float(), Ok(expected_float));
            prop_assert_eq!(max.as_long(), Ok(expected_long));
        }
    }
}
