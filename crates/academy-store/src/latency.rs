//! Simulated network latency.
//!
//! Every store operation waits a fixed delay before touching its collection,
//! so the console behaves like it will against a remote backend. The delay has
//! no bearing on correctness: nothing is cancelled, retried, or serialized by it.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Latency {
    delay: Duration,
}

impl Latency {
    /// No delay; operations complete on the next poll.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    #[must_use]
    pub const fn fixed(delay: Duration) -> Self {
        Self { delay }
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait out the configured delay.
    pub async fn settle(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }

    /// Run `op` after the configured delay.
    pub async fn wrap<R>(&self, op: impl FnOnce() -> R) -> R {
        self.settle().await;
        op()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn none_completes_immediately() {
        let started = Instant::now();
        let value = Latency::none().wrap(|| 7).await;
        assert_eq!(value, 7);
        assert!(started.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn fixed_delays_the_result() {
        let latency = Latency::fixed(Duration::from_millis(30));
        let started = Instant::now();
        latency.wrap(|| ()).await;
        assert!(started.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn concurrent_calls_are_not_queued() {
        let latency = Latency::fixed(Duration::from_millis(100));
        let started = Instant::now();
        let (a, b) = tokio::join!(latency.wrap(|| 1), latency.wrap(|| 2));
        assert_eq!((a, b), (1, 2));
        assert!(started.elapsed() < Duration::from_millis(190));
    }
}
