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

//! Concatenation of two iterables.

use crate::iterable::Iterable;

/// An iterable that walks `first` and then `second`.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::iterable::{Iterable, IterableOf, Joined};
/// let joined = Joined::new(IterableOf::new(vec![1, 2]), IterableOf::new(vec![3]));
/// let items: Vec<_> = joined.iter().map(Result::unwrap).collect();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct Joined<A, B> {
    first: A,
    second: B,
}

impl<A, B> Joined<A, B> {
    /// Creates the concatenation of `first` and `second`.
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Iterable for Joined<A, B>
where
    A: Iterable,
    B: Iterable<Item = A::Item>,
{
    type Item = A::Item;
    type Iter<'a>
        = std::iter::Chain<A::Iter<'a>, B::Iter<'a>>
    where
        Self: 'a;

    #[inline]
    fn iter(&self) -> Self::Iter<'_> {
        self.first.iter().chain(self.second.iter())
    }
}
