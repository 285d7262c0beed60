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

//! # Lazy Scalars
//!
//! `Scalar` is the capability "produce one value, possibly failing, when
//! asked". Implementors hold only the recipe; nothing runs at construction
//! time. Decorators in this crate take any `Scalar` and add one behavior.
//!
//! ## Highlights
//!
//! - `ScalarOf<F>` turns a closure `Fn() -> Result<T, EvaluationError>` into
//!   a scalar; the closure runs on every `value()` call.
//! - `Constant<T>` always yields a clone of the same value.
//! - `&S`, `Box<S>`, and `Arc<S>` forward to `S`, so decorators can borrow
//!   or share the scalar they wrap.

use capstan_core::error::EvaluationError;
use std::sync::Arc;

/// A deferred, zero-argument, possibly failing producer of a single value.
pub trait Scalar {
    /// The produced value.
    type Output;

    /// Runs the recipe (or consults a cache) and returns the outcome.
    fn value(&self) -> Result<Self::Output, EvaluationError>;
}

impl<S> Scalar for &S
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output, EvaluationError> {
        (**self).value()
    }
}

impl<S> Scalar for Box<S>
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output, EvaluationError> {
        (**self).value()
    }
}

impl<S> Scalar for Arc<S>
where
    S: Scalar + ?Sized,
{
    type Output = S::Output;

    #[inline]
    fn value(&self) -> Result<Self::Output, EvaluationError> {
        (**self).value()
    }
}

impl<T> std::fmt::Debug for dyn Scalar<Output = T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Scalar<{}>", std::any::type_name::<T>())
    }
}

/// A scalar backed by a closure.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::scalar::{Scalar, ScalarOf};
/// let answer = ScalarOf::new(|| Ok(6 * 7));
/// assert_eq!(answer.value(), Ok(42));
/// ```
#[derive(Clone)]
pub struct ScalarOf<F> {
    recipe: F,
}

impl<F> ScalarOf<F> {
    /// Wraps `recipe` without running it.
    #[inline]
    pub fn new<T>(recipe: F) -> Self
    where
        F: Fn() -> Result<T, EvaluationError>,
    {
        Self { recipe }
    }
}

impl<F, T> Scalar for ScalarOf<F>
where
    F: Fn() -> Result<T, EvaluationError>,
{
    type Output = T;

    #[inline]
    fn value(&self) -> Result<T, EvaluationError> {
        (self.recipe)()
    }
}

impl<F> std::fmt::Debug for ScalarOf<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ScalarOf({})", std::any::type_name::<F>())
    }
}

/// A scalar that always yields the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct Constant<T> {
    value: T,
}

impl<T> Constant<T> {
    /// Creates a scalar that yields clones of `value`.
    #[inline]
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T> Scalar for Constant<T>
where
    T: Clone,
{
    type Output = T;

    #[inline]
    fn value(&self) -> Result<T, EvaluationError> {
        Ok(self.value.clone())
    }
}
