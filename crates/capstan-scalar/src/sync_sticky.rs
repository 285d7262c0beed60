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

//! # Thread-Safe Memoizing Scalars
//!
//! `SyncSticky<S>` has the same contract as `Sticky<S>` (first outcome
//! frozen, failures replayed, no invalidation) but may be shared across
//! threads. The cached outcome lives in a `Mutex<Option<_>>` and the lock is
//! held for the whole first evaluation, so concurrent callers wait for it
//! instead of racing and the origin runs exactly once.
//!
//! A recipe that panics poisons the mutex without filling it. The poison is
//! ignored on the next call, which evaluates the origin again.

use crate::scalar::{Scalar, ScalarOf};
use capstan_core::error::EvaluationError;
use std::sync::{Mutex, PoisonError};

/// A scalar that caches the first outcome of its origin and can be shared
/// between threads.
///
/// # Examples
///
/// ```rust
/// # use capstan_scalar::{scalar::Scalar, sync_sticky::SyncSticky};
/// # use std::sync::atomic::{AtomicUsize, Ordering};
/// let calls = AtomicUsize::new(0);
/// let sticky = SyncSticky::from_fn(|| Ok(calls.fetch_add(1, Ordering::SeqCst)));
///
/// std::thread::scope(|s| {
///     for _ in 0..4 {
///         s.spawn(|| assert_eq!(sticky.value(), Ok(0)));
///     }
/// });
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct SyncSticky<S>
where
    S: Scalar,
{
    origin: S,
    cell: Mutex<Option<Result<S::Output, EvaluationError>>>,
}

impl<S> SyncSticky<S>
where
    S: Scalar,
{
    /// Wraps `origin` without evaluating it.
    #[inline]
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cell: Mutex::new(None),
        }
    }

    /// Returns `true` once the origin has been evaluated, whatever the outcome.
    pub fn is_evaluated(&self) -> bool {
        self.cell
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl<F, T> SyncSticky<ScalarOf<F>>
where
    F: Fn() -> Result<T, EvaluationError>,
{
    /// Wraps a closure recipe without running it.
    #[inline]
    pub fn from_fn(recipe: F) -> Self {
        Self::new(ScalarOf::new(recipe))
    }
}

impl<S> Scalar for SyncSticky<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;

    fn value(&self) -> Result<S::Output, EvaluationError> {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(outcome) = cell.as_ref() {
            return outcome.clone();
        }

        let outcome = self.origin.value();
        match &outcome {
            Ok(_) => log::trace!("sync sticky scalar evaluated"),
            Err(e) => log::debug!("sync sticky scalar cached a failure: {}", e),
        }
        *cell = Some(outcome.clone());
        outcome
    }
}

impl<S> std::fmt::Debug for SyncSticky<S>
where
    S: Scalar + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SyncSticky")
            .field("origin", &self.origin)
            .field("evaluated", &self.is_evaluated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[test]
    fn test_runs_once_across_threads() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sticky = Arc::new(SyncSticky::from_fn(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(format!("value-{}", n))
        }));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let sticky = Arc::clone(&sticky);
                std::thread::spawn(move || sticky.value())
            })
            .collect();

        for handle in handles {
            let outcome = handle.join().expect("worker panicked");
            assert_eq!(outcome.as_deref(), Ok("value-0"));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_replayed() {
        let calls = AtomicUsize::new(0);
        let sticky = SyncSticky::from_fn(|| -> Result<u64, EvaluationError> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err(EvaluationError::new("unavailable"))
        });

        assert_eq!(sticky.value(), Err(EvaluationError::new("unavailable")));
        assert_eq!(sticky.value(), Err(EvaluationError::new("unavailable")));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sticky.is_evaluated());
    }

    #[test]
    fn test_recovers_from_panicking_recipe() {
        let calls = AtomicUsize::new(0);
        let sticky = SyncSticky::from_fn(|| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                panic!("first call panics");
            }
            Ok(5)
        });

        let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sticky.value()));
        assert!(first.is_err());
        assert!(!sticky.is_evaluated());

        assert_eq!(sticky.value(), Ok(5));
        assert_eq!(sticky.value(), Ok(5));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
