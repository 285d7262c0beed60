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

use crate::scalar::Scalar;
use capstan_core::error::EvaluationError;

/// A scalar that converts the value of another scalar on demand.
///
/// The conversion runs on every `value()` call, after the origin produced a
/// value. A failing origin short-circuits and the conversion is skipped.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::{mapped::Mapped, scalar::{Constant, Scalar}};
/// let len = Mapped::new(Constant::new("four"), str::len);
/// assert_eq!(len.value(), Ok(4));
/// ```
#[derive(Debug, Clone)]
pub struct Mapped<S, F> {
    origin: S,
    func: F,
}

impl<S, F> Mapped<S, F> {
    /// Creates a scalar that applies `func` to the value of `origin`.
    #[inline]
    pub fn new(origin: S, func: F) -> Self {
        Self { origin, func }
    }
}

impl<S, F, T> Scalar for Mapped<S, F>
where
    S: Scalar,
    F: Fn(S::Output) -> T,
{
    type Output = T;

    #[inline]
    fn value(&self) -> Result<T, EvaluationError> {
        self.origin.value().map(&self.func)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{Constant, ScalarOf};
    use std::cell::Cell;

    #[test]
    fn test_maps_value() {
        let doubled = Mapped::new(Constant::new(21), |x: i32| x * 2);
        assert_eq!(doubled.value(), Ok(42));
    }

    #[test]
    fn test_failure_skips_conversion() {
        let calls = Cell::new(0);
        let origin = ScalarOf::new(|| -> Result<i32, EvaluationError> {
            Err(EvaluationError::new("origin failed"))
        });
        let mapped = Mapped::new(origin, |x: i32| {
            calls.set(calls.get() + 1);
            x
        });

        assert_eq!(mapped.value(), Err(EvaluationError::new("origin failed")));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_chained() {
        let text = Mapped::new(Mapped::new(Constant::new(3_u8), u32::from), |x: u32| {
            format!("#{}", x)
        });
        assert_eq!(text.value().as_deref(), Ok("#3"));
    }
}
