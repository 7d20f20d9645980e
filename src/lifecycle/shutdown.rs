//! Shutdown coordination for the service.

use tokio::sync::watch;

/// Latching stop flag shared by the server and `main`.
///
/// Once triggered it stays triggered, so a task that subscribes late still
/// observes the shutdown instead of waiting forever.
pub struct Shutdown {
    stopped: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (stopped, _) = watch::channel(false);
        Self { stopped }
    }

    /// Receiver that resolves `wait_for(|s| *s)` once shutdown is triggered.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.stopped.subscribe()
    }

    /// Flip the flag. Idempotent, and works with no subscribers.
    pub fn trigger(&self) {
        self.stopped.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.stopped.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
