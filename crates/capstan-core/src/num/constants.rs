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

/// A trait for numeric types that have a constant representing the lowest
/// value a maximum fold starts from.
///
/// For integers this is `MIN`; for floats it is `-MAX`, the lowest finite
/// value, so that an empty fold never yields an infinity.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::num::constants::Lowest;
/// assert_eq!(<i32 as Lowest>::LOWEST, i32::MIN);
/// assert_eq!(<f64 as Lowest>::LOWEST, -f64::MAX);
/// ```
pub trait Lowest {
    /// The constant representing the lowest value for the implementing type.
    const LOWEST: Self;
}

/// A trait for numeric types that have a constant representing the highest
/// value a minimum fold starts from.
pub trait Highest {
    /// The constant representing the highest value for the implementing type.
    const HIGHEST: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_int_bounds_for {
    ($t:ty) => {
        impl_const_for!(Lowest, LOWEST, <$t>::MIN, $t);
        impl_const_for!(Highest, HIGHEST, <$t>::MAX, $t);
    };
}

macro_rules! impl_float_bounds_for {
    ($t:ty) => {
        impl_const_for!(Lowest, LOWEST, -<$t>::MAX, $t);
        impl_const_for!(Highest, HIGHEST, <$t>::MAX, $t);
    };
}

impl_int_bounds_for!(i32);
impl_int_bounds_for!(i64);

impl_float_bounds_for!(f32);
impl_float_bounds_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_values() {
        assert_eq!(<i64 as Lowest>::LOWEST, i64::MIN);
        assert_eq!(<i32 as Lowest>::LOWEST, i32::MIN);
        assert_eq!(<f32 as Lowest>::LOWEST, -f32::MAX);
        assert_eq!(<f64 as Lowest>::LOWEST, -f64::MAX);
    }

    #[test]
    fn test_highest_values() {
        assert_eq!(<i64 as Highest>::HIGHEST, i64::MAX);
        assert_eq!(<i32 as Highest>::HIGHEST, i32::MAX);
        assert_eq!(<f32 as Highest>::HIGHEST, f32::MAX);
        assert_eq!(<f64 as Highest>::HIGHEST, f64::MAX);
    }

    #[test]
    fn test_float_sentinels_are_finite() {
        assert!(<f32 as Lowest>::LOWEST.is_finite());
        assert!(<f64 as Lowest>::LOWEST.is_finite());
    }
}
