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

//! # Capstan Core
//!
//! Foundational numerics, sequences, and the shared error type for the
//! Capstan lazy-evaluation primitives. This crate holds the leaf building
//! blocks that the scalar decorators in `capstan_scalar` are assembled from.
//!
//! ## Modules
//!
//! - `error`: The single `EvaluationError` raised whenever an element or a
//!   recipe cannot produce its value.
//! - `num`: The heterogeneous `Number` value, the four target
//!   `Representation`s, their identity sentinels (`Lowest`, `Highest`), and
//!   by-value `max`/`min` combiners.
//! - `iterable`: Re-iterable, possibly failing sequences (`Iterable`) with
//!   the owned `IterableOf`, the lazily converting `Mapped`, and `Joined`.
//!
//! ## Purpose
//!
//! Folds in this workspace walk their input once per requested
//! representation. Sequences must therefore be restartable and must report
//! element failures instead of panicking; these modules encode both
//! requirements in the type system.

pub mod error;
pub mod iterable;
pub mod num;

pub use error::EvaluationError;
