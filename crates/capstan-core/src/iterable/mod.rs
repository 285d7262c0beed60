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

//! # Re-iterable Sequences
//!
//! An `Iterable` is a sequence that can be walked any number of times, each
//! walk yielding `Result<Item, EvaluationError>`. Folds over several
//! representations read the same source once per representation, so a
//! single-use iterator is not enough; and elements may be produced lazily,
//! so each one may fail on its own.
//!
//! ## Submodules
//!
//! - `iterable_of`: `IterableOf<T>`, an owned sequence of values or
//!   pre-recorded failures.
//! - `mapped`: `Mapped<I, F>`, a lazily converting view over another
//!   iterable.
//! - `joined`: `Joined<A, B>`, the concatenation of two iterables.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::iterable::{Iterable, IterableOf, Mapped};
//!
//! let src = IterableOf::new(vec![1, 2, 3]);
//! let doubled = Mapped::new(&src, |x: i32| x * 2);
//!
//! let first: Vec<_> = doubled.iter().collect();
//! let again: Vec<_> = doubled.iter().collect();
//! assert_eq!(first, again);
//! assert_eq!(first, vec![Ok(2), Ok(4), Ok(6)]);
//! ```

use crate::error::EvaluationError;
use std::{rc::Rc, sync::Arc};

pub mod iterable_of;
pub mod joined;
pub mod mapped;

pub use iterable_of::IterableOf;
pub use joined::Joined;
pub use mapped::Mapped;

/// A sequence that can be iterated any number of times.
///
/// Every call to `iter` starts a fresh walk from the first element. Elements
/// are yielded strictly in order; a failing element yields `Err` and the walk
/// may continue past it, leaving the decision to abort to the consumer.
pub trait Iterable {
    /// The element type.
    type Item;

    /// The iterator returned by `iter`.
    type Iter<'a>: Iterator<Item = Result<Self::Item, EvaluationError>>
    where
        Self: 'a;

    /// Starts a new walk over the sequence.
    fn iter(&self) -> Self::Iter<'_>;
}

impl<I> Iterable for &I
where
    I: Iterable + ?Sized,
{
    type Item = I::Item;
    type Iter<'a>
        = I::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<I> Iterable for Rc<I>
where
    I: Iterable + ?Sized,
{
    type Item = I::Item;
    type Iter<'a>
        = I::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}

impl<I> Iterable for Arc<I>
where
    I: Iterable + ?Sized,
{
    type Item = I::Item;
    type Iter<'a>
        = I::Iter<'a>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        (**self).iter()
    }
}
