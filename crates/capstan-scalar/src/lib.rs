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

//! # Capstan Scalar
//!
//! Lazy, composable values. A `Scalar` is a recipe for one value that is not
//! run until `value()` is called; decorators wrap a scalar and add exactly
//! one behavior (conversion, folding, caching).
//!
//! ## Modules
//!
//! - `scalar`: The `Scalar` trait with the plain `ScalarOf` recipe and
//!   `Constant`.
//! - `mapped`: `Mapped`, which converts a scalar's value on demand.
//! - `folded`: `Folded`, a strictly left-to-right fold over an `Iterable`.
//! - `sticky`: `Sticky`, a memoizing decorator that runs its recipe at most
//!   once and replays the first outcome, failure included. No thread-safety
//!   guarantee.
//! - `sync_sticky`: `SyncSticky`, the same contract behind a `Mutex`.
//! - `number`: The `Numeric` capability and `NumberEnvelope`, a number built
//!   from one scalar per representation.
//! - `max_of` / `min_of`: Multi-representation reducers over heterogeneous
//!   numbers, with the `max_of!` and `min_of!` constructors.
//! - `text`: The `Text` capability, `TextOf`, and the memoizing `StickyText`.
//!
//! ## Usage
//!
//! ```rust
//! use capstan_scalar::{max_of, scalar::Scalar, sticky::Sticky};
//!
//! let max = max_of![1, 2_i64, 3.5_f32, 4.0_f64];
//! assert_eq!(max.as_int(), Ok(4));
//! assert_eq!(max.as_double(), Ok(4.0));
//!
//! let cached = Sticky::new(max.long_scalar());
//! assert_eq!(cached.value(), Ok(4));
//! ```

pub mod folded;
pub mod mapped;
pub mod max_of;
pub mod min_of;
pub mod number;
pub mod scalar;
pub mod sticky;
pub mod sync_sticky;
pub mod text;

pub use capstan_core::{error::EvaluationError, iterable, num::Number};
