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

//! # Lazily Converting Sequences
//!
//! `Mapped<I, F>` applies a pure conversion to each element of another
//! iterable at the moment the element is read. Nothing is converted or
//! buffered up front, and every walk converts afresh, so the same source can
//! be viewed through several conversions at once.
//!
//! Failed source elements pass through untouched; the conversion is only
//! applied to values.

use crate::{error::EvaluationError, iterable::Iterable};
use std::iter::FusedIterator;

/// A lazily converting view over an iterable.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::iterable::{Iterable, IterableOf, Mapped};
/// # use capstan_core::num::Number;
/// let src = IterableOf::new(vec![Number::from(2.7_f64), Number::from(-1)]);
/// let ints = Mapped::new(&src, Number::as_int);
///
/// let items: Vec<_> = ints.iter().collect();
/// assert_eq!(items, vec![Ok(2), Ok(-1)]);
/// ```
#[derive(Debug, Clone)]
pub struct Mapped<I, F> {
    src: I,
    func: F,
}

impl<I, F> Mapped<I, F> {
    /// Creates a view over `src` that converts each element with `func`.
    #[inline]
    pub fn new(src: I, func: F) -> Self {
        Self { src, func }
    }

    /// Returns the underlying source.
    #[inline]
    pub fn source(&self) -> &I {
        &self.src
    }
}

impl<I, F, T> Iterable for Mapped<I, F>
where
    I: Iterable,
    F: Fn(I::Item) -> T,
{
    type Item = T;
    type Iter<'a>
        = MappedIter<'a, I::Iter<'a>, F>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        MappedIter {
            inner: self.src.iter(),
            func: &self.func,
        }
    }
}

/// The iterator over a `Mapped` view.
#[derive(Debug)]
pub struct MappedIter<'a, It, F> {
    inner: It,
    func: &'a F,
}

impl<'a, It, F, S, T> Iterator for MappedIter<'a, It, F>
where
    It: Iterator<Item = Result<S, EvaluationError>>,
    F: Fn(S) -> T,
{
    type Item = Result<T, EvaluationError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let func = self.func;
        self.inner.next().map(|item| item.map(func))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, It, F, S, T> FusedIterator for MappedIter<'a, It, F>
where
    It: FusedIterator<Item = Result<S, EvaluationError>>,
    F: Fn(S) -> T,
{
}
