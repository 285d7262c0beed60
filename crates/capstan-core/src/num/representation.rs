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

//! Target representations and the `Number` conversions into them.

use crate::num::{
    constants::{Highest, Lowest},
    number::Number,
    ops::{MaxVal, MinVal},
};

/// One of the four representations a `Number` can be read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// 64-bit signed integer (`i64`).
    Long,
    /// 32-bit signed integer (`i32`).
    Int,
    /// 32-bit float (`f32`).
    Float,
    /// 64-bit float (`f64`).
    Double,
}

impl Representation {
    /// All representations, in accessor order.
    pub const ALL: [Representation; 4] = [
        Representation::Long,
        Representation::Int,
        Representation::Float,
        Representation::Double,
    ];

    /// Returns the Rust type name of this representation.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Representation::Long => "i64",
            Representation::Int => "i32",
            Representation::Float => "f32",
            Representation::Double => "f64",
        }
    }
}

impl std::fmt::Display for Representation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// A primitive that a `Number` can be converted into.
///
/// Bundles the conversion with the identity sentinels and by-value combiners
/// so that generic folds need a single bound.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::{FromNumber, Number, Representation};
/// assert_eq!(i32::from_number(Number::from(7.9_f64)), 7);
/// assert_eq!(<f32 as FromNumber>::REPRESENTATION, Representation::Float);
/// ```
pub trait FromNumber: Copy + Lowest + Highest + MaxVal + MinVal {
    /// The representation this type stands for.
    const REPRESENTATION: Representation;

    /// Converts a `Number` into this representation using `as` cast rules.
    fn from_number(n: Number) -> Self;
}

macro_rules! impl_from_number {
    ($t:ty, $repr:ident, $method:ident) => {
        impl FromNumber for $t {
            const REPRESENTATION: Representation = Representation::$repr;

            #[inline(always)]
            fn from_number(n: Number) -> Self {
                n.$method()
            }
        }
    };
}

impl_from_number!(i64, Long, as_long);
impl_from_number!(i32, Int, as_int);
impl_from_number!(f32, Float, as_float);
impl_from_number!(f64, Double, as_double);
