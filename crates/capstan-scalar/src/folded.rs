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

//! # Folding Scalars
//!
//! `Folded` reduces an `Iterable` to a single value, starting from an
//! identity element and applying a binary combiner strictly left to right:
//! `f(f(f(identity, x0), x1), x2)`. An empty sequence yields the identity
//! unchanged.
//!
//! The fold is all-or-nothing. The first element that fails aborts the fold
//! and its `EvaluationError` is returned as-is; no partial result escapes
//! and nothing is retried. Each `value()` call walks the source again.

use crate::scalar::Scalar;
use capstan_core::{error::EvaluationError, iterable::Iterable};

/// A lazy left fold over an iterable.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::iterable::IterableOf;
/// # use capstan_scalar::{folded::Folded, scalar::Scalar};
/// let sum = Folded::new(0, |acc: i32, x: i32| acc + x, IterableOf::new(vec![1, 2, 3]));
/// assert_eq!(sum.value(), Ok(6));
///
/// let digits = Folded::new(String::new(), |acc: String, d: char| acc + &d.to_string(),
///     IterableOf::new(vec!['4', '2']));
/// assert_eq!(digits.value().as_deref(), Ok("42"));
/// ```
#[derive(Debug, Clone)]
pub struct Folded<T, F, I> {
    identity: T,
    combiner: F,
    src: I,
}

impl<T, F, I> Folded<T, F, I> {
    /// Creates a fold of `src` starting at `identity` and combining with
    /// `combiner`. Nothing is read until `value()` is called.
    #[inline]
    pub fn new(identity: T, combiner: F, src: I) -> Self {
        Self {
            identity,
            combiner,
            src,
        }
    }

    /// Returns the identity element.
    #[inline]
    pub fn identity(&self) -> &T {
        &self.identity
    }

    /// Returns the folded source.
    #[inline]
    pub fn source(&self) -> &I {
        &self.src
    }
}

impl<T, F, I> Scalar for Folded<T, F, I>
where
    T: Clone,
    F: Fn(T, I::Item) -> T,
    I: Iterable,
{
    type Output = T;

    fn value(&self) -> Result<T, EvaluationError> {
        self.src
            .iter()
            .try_fold(
                self.identity.clone(),
                |acc, item| -> Result<T, EvaluationError> { Ok((self.combiner)(acc, item?)) },
            )
    }
}
