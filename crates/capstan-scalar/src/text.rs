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

//! # Lazy Text
//!
//! `Text` is the string-producing counterpart of `Scalar`: a deferred,
//! possibly failing recipe for a `String`. `TextOf` wraps a closure and
//! `StickyText` memoizes any text by routing it through `Sticky`, so the
//! first outcome (value or failure) is produced once and replayed.
//!
//! `StickyText` carries the same lack of thread-safety guarantee as `Sticky`.

use crate::{scalar::Scalar, sticky::Sticky};
use capstan_core::error::EvaluationError;

/// A deferred, possibly failing producer of a string.
pub trait Text {
    /// Produces the string.
    fn as_string(&self) -> Result<String, EvaluationError>;
}

impl Text for str {
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        Ok(self.to_owned())
    }
}

impl Text for String {
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        Ok(self.clone())
    }
}

impl<T> Text for &T
where
    T: Text + ?Sized,
{
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        (**self).as_string()
    }
}

impl<T> Text for Box<T>
where
    T: Text + ?Sized,
{
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        (**self).as_string()
    }
}

/// A text backed by a closure that runs on every call.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::text::{Text, TextOf};
/// let greeting = TextOf::new(|| Ok(format!("hello, {}", "world")));
/// assert_eq!(greeting.as_string().as_deref(), Ok("hello, world"));
/// ```
#[derive(Clone)]
pub struct TextOf<F> {
    recipe: F,
}

impl<F> TextOf<F>
where
    F: Fn() -> Result<String, EvaluationError>,
{
    /// Wraps `recipe` without running it.
    #[inline]
    pub fn new(recipe: F) -> Self {
        Self { recipe }
    }
}

impl<F> Text for TextOf<F>
where
    F: Fn() -> Result<String, EvaluationError>,
{
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        (self.recipe)()
    }
}

impl<F> std::fmt::Debug for TextOf<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TextOf({})", std::any::type_name::<F>())
    }
}

/// Adapts a `Text` into a `Scalar<Output = String>`.
#[derive(Debug, Clone)]
pub struct TextScalar<T> {
    text: T,
}

impl<T> TextScalar<T> {
    /// Wraps `text` without evaluating it.
    #[inline]
    pub fn new(text: T) -> Self {
        Self { text }
    }
}

impl<T> Scalar for TextScalar<T>
where
    T: Text,
{
    type Output = String;

    #[inline]
    fn value(&self) -> Result<String, EvaluationError> {
        self.text.as_string()
    }
}

/// A text that caches the first outcome of its origin.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::text::{StickyText, Text, TextOf};
/// # use std::cell::Cell;
/// let calls = Cell::new(0);
/// let text = StickyText::new(TextOf::new(|| {
///     calls.set(calls.get() + 1);
///     Ok(format!("rendered {} time(s)", calls.get()))
/// }));
///
/// assert_eq!(text.as_string().as_deref(), Ok("rendered 1 time(s)"));
/// assert_eq!(text.as_string().as_deref(), Ok("rendered 1 time(s)"));
/// ```
#[derive(Debug)]
pub struct StickyText<T>
where
    T: Text,
{
    scalar: Sticky<TextScalar<T>>,
}

impl<T> StickyText<T>
where
    T: Text,
{
    /// Wraps `text` without evaluating it.
    #[inline]
    pub fn new(text: T) -> Self {
        Self {
            scalar: Sticky::new(TextScalar::new(text)),
        }
    }

    /// Returns `true` once the origin has been evaluated.
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        self.scalar.is_evaluated()
    }
}

impl<T> Text for StickyText<T>
where
    T: Text,
{
    #[inline]
    fn as_string(&self) -> Result<String, EvaluationError> {
        self.scalar.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_plain_strings() {
        assert_eq!("abc".as_string().as_deref(), Ok("abc"));
        assert_eq!(String::from("xyz").as_string().as_deref(), Ok("xyz"));
    }

    #[test]
    fn test_text_of_runs_every_time() {
        let calls = Cell::new(0);
        let text = TextOf::new(|| {
            calls.set(calls.get() + 1);
            Ok(calls.get().to_string())
        });
        assert_eq!(text.as_string().as_deref(), Ok("1"));
        assert_eq!(text.as_string().as_deref(), Ok("2"));
    }

    #[test]
    fn test_sticky_text_runs_once() {
        let calls = Cell::new(0);
        let text = StickyText::new(TextOf::new(|| {
            calls.set(calls.get() + 1);
            Ok(String::from("cached"))
        }));

        assert!(!text.is_evaluated());
        for _ in 0..3 {
            assert_eq!(text.as_string().as_deref(), Ok("cached"));
        }
        assert!(text.is_evaluated());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_sticky_text_replays_failure() {
        let calls = Cell::new(0);
        let text = StickyText::new(TextOf::new(|| {
            calls.set(calls.get() + 1);
            Err(EvaluationError::new("template missing"))
        }));

        let first = text.as_string();
        let second = text.as_string();
        assert_eq!(first, Err(EvaluationError::new("template missing")));
        assert_eq!(first, second);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_sticky_text_over_borrowed_text() {
        let origin = String::from("borrowed");
        let text = StickyText::new(&origin);
        assert_eq!(text.as_string().as_deref(), Ok("borrowed"));
    }

    #[test]
    fn test_text_scalar_adapter() {
        let scalar = TextScalar::new("as scalar");
        assert_eq!(scalar.value().as_deref(), Ok("as scalar"));
    }
}
