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

//! # Numeric Foundations
//!
//! Types and traits for working with numbers whose declared type varies from
//! element to element but which are always read back in one of four target
//! representations.
//!
//! ## Submodules
//!
//! - `number`: The `Number` value (`Int`, `Long`, `Float`, `Double`) and its
//!   narrowing/widening accessors following Rust `as` cast semantics.
//! - `representation`: The `Representation` tag and the `FromNumber` trait
//!   that converts a `Number` into `i64`, `i32`, `f32`, or `f64`.
//! - `constants`: Associated-constant traits (`Lowest`, `Highest`) carrying
//!   the identity sentinels used by max and min folds.
//! - `ops`: By-value `MaxVal`/`MinVal` combiners implemented for every
//!   representation.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod constants;
pub mod number;
pub mod ops;
pub mod representation;

pub use number::Number;
pub use representation::{FromNumber, Representation};
