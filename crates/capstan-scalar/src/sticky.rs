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

//! # Memoizing Scalars
//!
//! `Sticky<S>` decorates a scalar so that its recipe runs at most once. The
//! first call to `value()` evaluates the origin and stores the outcome;
//! every later call returns that stored outcome without touching the origin
//! again.
//!
//! ## Contract
//!
//! - The outcome is frozen permanently, failures included. A recipe that
//!   fails on its first evaluation fails with the same `EvaluationError` on
//!   every later call and is never retried.
//! - Even a recipe that reads volatile state yields its first observation
//!   for the lifetime of the `Sticky`.
//! - There is no invalidation. Construct a new `Sticky` to evaluate again.
//!
//! ## Thread safety
//!
//! There is no thread-safety guarantee. The cache is a `std::cell::OnceCell`,
//! which makes `Sticky` `!Sync`, so the compiler rejects sharing it across
//! threads. Use `sync_sticky::SyncSticky` when the value must be shared.
//!
//! The cell must not be filled re-entrantly: a recipe that calls `value()`
//! on the `Sticky` wrapping it panics.

use crate::scalar::{Scalar, ScalarOf};
use capstan_core::error::EvaluationError;
use std::cell::OnceCell;

/// A scalar that caches the first outcome of its origin.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::{scalar::Scalar, sticky::Sticky};
/// # use std::cell::Cell;
/// let calls = Cell::new(0);
/// let sticky = Sticky::from_fn(|| {
///     calls.set(calls.get() + 1);
///     Ok(calls.get() * 100)
/// });
///
/// assert_eq!(sticky.value(), Ok(100));
/// assert_eq!(sticky.value(), Ok(100));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Sticky<S>
where
    S: Scalar,
{
    origin: S,
    cell: OnceCell<Result<S::Output, EvaluationError>>,
}

impl<S> Sticky<S>
where
    S: Scalar,
{
    /// Wraps `origin` without evaluating it.
    #[inline]
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cell: OnceCell::new(),
        }
    }

    /// Returns `true` once the origin has been evaluated, whatever the outcome.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<F, T> Sticky<ScalarOf<F>>
where
    F: Fn() -> Result<T, EvaluationError>,
{
    /// Wraps a closure recipe without running it.
    #[inline]
    pub fn from_fn(recipe: F) -> Self {
        Self::new(ScalarOf::new(recipe))
    }
}

impl<S> Scalar for Sticky<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;

    fn value(&self) -> Result<S::Output, EvaluationError> {
        self.cell
            .get_or_init(|| {
                let outcome = self.origin.value();
                match &outcome {
                    Ok(_) => log::trace!("sticky scalar evaluated"),
                    Err(e) => log::debug!("sticky scalar cached a failure: {}", e),
                }
                outcome
            })
            .clone()
    }
}

impl<S> std::fmt::Debug for Sticky<S>
where
    S: Scalar + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sticky")
            .field("origin", &self.origin)
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}
