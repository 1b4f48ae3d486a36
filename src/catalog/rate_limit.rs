//! Request spacing for catalog clients.
//!
//! Both web services expect polite clients. Each client owns one
//! [`RateLimiter`] instance - explicit state, not a module-level global -
//! so tests can construct clients with whatever spacing they need and drive
//! the clock with tokio's paused time.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between consecutive requests.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    /// Sleep just long enough to keep `min_interval` between requests.
    ///
    /// The first call never waits. The lock is held across the sleep so
    /// concurrent callers queue up rather than racing past the limiter.
    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(at) = *last {
            let elapsed = at.elapsed();
            if elapsed < self.min_interval {
                tokio::time::sleep(self.min_interval - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}
