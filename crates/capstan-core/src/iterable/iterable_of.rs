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

//! # Owned Sequences
//!
//! `IterableOf<T>` owns its elements and hands out clones on every walk. It
//! may also hold pre-recorded failures, which is how a caller models a
//! source whose individual elements could not be read.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_core::{error::EvaluationError, iterable::{Iterable, IterableOf}};
//!
//! let src = IterableOf::from_results(vec![
//!     Ok(1),
//!     Err(EvaluationError::new("unreadable")),
//!     Ok(3),
//! ]);
//!
//! let oks = src.iter().filter(|r| r.is_ok()).count();
//! assert_eq!(oks, 2);
//! assert_eq!(src.len(), 3);
//! ```

use crate::{error::EvaluationError, iterable::Iterable};
use std::iter::FusedIterator;

/// An owned, re-iterable sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct IterableOf<T> {
    items: Vec<Result<T, EvaluationError>>,
}

impl<T> IterableOf<T> {
    /// Creates a sequence of the given values.
    #[inline]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter().map(Ok).collect(),
        }
    }

    /// Creates a sequence where each element is either a value or the failure
    /// that reading it produces.
    #[inline]
    pub fn from_results(items: Vec<Result<T, EvaluationError>>) -> Self {
        Self { items }
    }

    /// Creates an empty sequence.
    #[inline]
    pub fn empty() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of elements, failed ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for IterableOf<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for IterableOf<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> FromIterator<T> for IterableOf<T> {
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self {
            items: iter.into_iter().map(Ok).collect(),
        }
    }
}

impl<T> Iterable for IterableOf<T>
where
    T: Clone,
{
    type Item = T;
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }
}

/// The iterator over an `IterableOf`.
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    inner: std::slice::Iter<'a, Result<T, EvaluationError>>,
}

impl<'a, T> Iterator for Iter<'a, T>
where
    T: Clone,
{
    type Item = Result<T, EvaluationError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().cloned()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T>
where
    T: Clone,
{
    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> where T: Clone {}
