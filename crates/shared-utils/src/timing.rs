//! Debounce and throttle wrappers for bursty event streams
//!
//! [`Debouncer`] delays work until input settles (search-as-you-type),
//! [`Throttler`] caps how often work runs (map scroll updates). Both are
//! driven by the tokio timer so paused-clock tests stay deterministic.

use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

// =============================================================================
// Debouncer
// =============================================================================

/// Runs a callback only after a quiet period with no further calls
///
/// Each [`call`](Debouncer::call) cancels the previously scheduled callback
/// and schedules a fresh one, so only the last call in a burst fires.
/// Dropping the debouncer cancels any pending callback.
#[derive(Debug)]
pub struct Debouncer {
    wait: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Create a debouncer with the given quiet period
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    /// Schedule `callback` to run after the quiet period, replacing any
    /// previously scheduled callback
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
            trace!("debounce: replaced pending callback");
        }
        let wait = self.wait;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback();
        }));
    }

    /// Cancel the pending callback, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// Whether a callback is still scheduled
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Throttler
// =============================================================================

/// Runs a callback at most once per interval, leading edge
///
/// The first [`call`](Throttler::call) runs immediately; further calls
/// inside the cooldown window are dropped.
#[derive(Debug)]
pub struct Throttler {
    interval: Duration,
    last_run: Option<tokio::time::Instant>,
}

impl Throttler {
    /// Create a throttler with the given minimum interval between runs
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_run: None,
        }
    }

    /// Run `callback` if the cooldown has elapsed; returns whether it ran
    ///
    /// Must be called from within a tokio runtime.
    pub fn call<F>(&mut self, callback: F) -> bool
    where
        F: FnOnce(),
    {
        let now = tokio::time::Instant::now();
        if let Some(last) = self.last_run {
            if now.duration_since(last) < self.interval {
                trace!("throttle: dropped call inside cooldown");
                return false;
            }
        }
        self.last_run = Some(now);
        callback();
        true
    }

    /// Forget the cooldown so the next call runs immediately
    pub fn reset(&mut self) {
        self.last_run = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> usize) {
        let count = Arc::new(AtomicUsize::new(0));
        let reader = count.clone();
        (count, move || reader.load(Ordering::SeqCst))
    }

    // ==========================================================================
    // Debouncer Tests
    // ==========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_debounce_fires_after_quiet_period() {
        let (count, read) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        let c = count.clone();
        debouncer.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(read(), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(read(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_burst_fires_once() {
        let (count, read) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        for _ in 0..5 {
            let c = count.clone();
            debouncer.call(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
            tokio::time::sleep(Duration::from_millis(30)).await;
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(read(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_separate_bursts_fire_separately() {
        let (count, read) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        let c = count.clone();
        debouncer.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(150)).await;

        let c = count.clone();
        debouncer.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(read(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_cancel() {
        let (count, read) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));

        let c = count.clone();
        debouncer.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(read(), 0);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_drop_cancels_pending() {
        let (count, read) = counter();
        {
            let mut debouncer = Debouncer::new(Duration::from_millis(100));
            let c = count.clone();
            debouncer.call(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        }

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(read(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_is_pending() {
        let (count, _read) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        assert!(!debouncer.is_pending());

        let c = count.clone();
        debouncer.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(!debouncer.is_pending());
    }

    // ==========================================================================
    // Throttler Tests
    // ==========================================================================

    #[tokio::test(start_paused = true)]
    async fn test_throttle_leading_edge() {
        let (count, read) = counter();
        let mut throttler = Throttler::new(Duration::from_millis(100));

        let c = count.clone();
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(read(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_drops_calls_in_cooldown() {
        let (count, read) = counter();
        let mut throttler = Throttler::new(Duration::from_millis(100));

        for _ in 0..5 {
            let c = count.clone();
            throttler.call(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(read(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_runs_again_after_cooldown() {
        let (count, read) = counter();
        let mut throttler = Throttler::new(Duration::from_millis(100));

        let c = count.clone();
        throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::advance(Duration::from_millis(100)).await;

        let c = count.clone();
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(read(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_reset() {
        let (count, read) = counter();
        let mut throttler = Throttler::new(Duration::from_millis(100));

        let c = count.clone();
        throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        throttler.reset();

        let c = count.clone();
        assert!(throttler.call(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(read(), 2);
    }
}
