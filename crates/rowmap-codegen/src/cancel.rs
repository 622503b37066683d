// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Cooperative cancellation.
//!
//! One [`CancellationToken`] is shared by every stage of a generation pass.
//! Clones observe the same flag, so a host can keep one clone and cancel from
//! another thread while the pass runs.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering}
};

use thiserror::Error;

/// Generation was interrupted by its cancellation token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("generation was cancelled")]
pub struct Cancelled;

/// Shared cancellation flag.
///
/// # Example
///
/// ```rust
/// use rowmap_codegen::CancellationToken;
///
/// let token = CancellationToken::new();
/// let host = token.clone();
/// assert!(token.check().is_ok());
///
/// host.cancel();
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>
}

impl CancellationToken {
    /// Create a token that is not cancelled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// Check if cancellation was requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    /// Return [`Cancelled`] once cancellation was requested.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if [`cancel`](Self::cancel) was called on any
    /// clone of this token.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn new_token_is_live() {
        assert_eq!(CancellationToken::new().check(), Ok(()));
    }

    #[test]
    fn cancel_from_another_thread() {
        let token = CancellationToken::new();
        let remote = token.clone();
        thread::spawn(move || remote.cancel()).join().unwrap();
        assert_eq!(token.check(), Err(Cancelled));
    }
}
