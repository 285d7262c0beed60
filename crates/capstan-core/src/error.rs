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

//! Evaluation failures.
//!
//! Every lazy primitive in Capstan reports failure through `EvaluationError`.
//! The error is cheap to clone and comparable so that memoizing decorators can
//! replay a cached failure exactly as it was first observed.

use std::sync::Arc;

/// The error raised when an upstream element or recipe cannot produce its value.
///
/// # Examples
///
/// ```rust
/// # use capstan_core::error::EvaluationError;
/// let err = EvaluationError::new("sensor offline");
/// assert_eq!(err.message(), "sensor offline");
/// assert_eq!(err.to_string(), "evaluation failed: sensor offline");
/// assert_eq!(err.clone(), err);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("evaluation failed: {message}")]
pub struct EvaluationError {
    message: Arc<str>,
}

impl EvaluationError {
    /// Creates a new `EvaluationError` with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Arc::from(message.into()),
        }
    }

    /// Returns the message describing the failure.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::num::ParseIntError> for EvaluationError {
    fn from(e: std::num::ParseIntError) -> Self {
        Self::new(format!("invalid integer: {e}"))
    }
}

impl From<std::num::ParseFloatError> for EvaluationError {
    fn from(e: std::num::ParseFloatError) -> Self {
        Self::new(format!("invalid float: {e}"))
    }
}

impl From<std::io::Error> for EvaluationError {
    fn from(e: std::io::Error) -> Self {
        Self::new(format!("I/O error: {e}"))
    }
}
