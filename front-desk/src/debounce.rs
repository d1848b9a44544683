//! Trailing-edge debouncer for the server-seeded search variant
//!
//! Each call replaces the previously scheduled one, so only the last
//! keystroke inside the window triggers a round-trip.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Debounces an async action behind a fixed delay
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `action` after the delay, cancelling any pending one
    pub fn call<F>(&mut self, action: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            action.await;
        }));
    }

    /// Drop the pending action, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
