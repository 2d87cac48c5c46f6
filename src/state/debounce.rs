use std::time::Duration;

use tokio::task::JoinHandle;

/// Cancel-and-reschedule timer: each `call` aborts any pending invocation
/// and schedules the new one after the delay, so the last call within the
/// window wins. Must be used from within a tokio runtime.
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

    pub fn call<F>(&mut self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            f();
        }));
    }

    /// Wait for the pending invocation, if any, to run. An aborted timer
    /// resolves without running its closure.
    pub async fn flush(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test]
    async fn only_last_call_within_window_fires() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(30));

        for _ in 0..3 {
            let seen = counter.clone();
            debouncer.call(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        }
        debouncer.flush().await;
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn separate_windows_each_fire() {
        let counter = Arc::new(AtomicUsize::new(0));
        let mut debouncer = Debouncer::new(Duration::from_millis(10));

        let seen = counter.clone();
        debouncer.call(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.flush().await;

        let seen = counter.clone();
        debouncer.call(move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.flush().await;

        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }
}
