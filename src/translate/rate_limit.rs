use std::time::Duration;

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};

/// Fixed-interval gate in front of the translation service.
///
/// Each call to [`RateGate::wait`] takes the single cell of a governor quota
/// that refills once per `interval`, so consecutive calls start at least
/// `interval` apart. The limiter is shared state, so the spacing holds even if
/// several tasks wait on the same gate.
pub struct RateGate {
    limiter: Option<DefaultDirectRateLimiter>,
    interval: Duration,
}

impl RateGate {
    /// A zero interval disables limiting.
    pub fn new(interval: Duration) -> Self {
        let limiter = Quota::with_period(interval).map(RateLimiter::direct);
        Self { limiter, interval }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    pub fn unlimited() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next call may start.
    pub async fn wait(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}

impl std::fmt::Debug for RateGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RateGate")
            .field("interval", &self.interval)
            .finish()
    }
}
