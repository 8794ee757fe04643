//! Async delay abstraction used to simulate latency.

use std::time::Duration;

use async_trait::async_trait;

/// Clock-independent sleeping abstraction.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Suspend execution for `duration`.
    ///
    /// Fallback sources call this before answering, so a test double can
    /// observe the simulated latency without waiting for it:
    ///
    /// ```rust,no_run
    /// use std::sync::atomic::{AtomicU64, Ordering};
    /// use std::time::Duration;
    ///
    /// use async_trait::async_trait;
    /// use client::domain::ports::Sleeper;
    ///
    /// #[derive(Default)]
    /// struct LatencyBudget {
    ///     spent_ms: AtomicU64,
    /// }
    ///
    /// #[async_trait]
    /// impl Sleeper for LatencyBudget {
    ///     async fn sleep(&self, duration: Duration) {
    ///         let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
    ///         self.spent_ms.fetch_add(millis, Ordering::Relaxed);
    ///     }
    /// }
    ///
    /// # async fn demo() {
    /// let budget = LatencyBudget::default();
    /// budget.sleep(Duration::from_millis(500)).await;
    /// budget.sleep(Duration::from_millis(300)).await;
    /// assert_eq!(budget.spent_ms.load(Ordering::Relaxed), 800);
    /// # }
    /// ```
    async fn sleep(&self, duration: Duration);
}

/// Tokio-based sleeper implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
