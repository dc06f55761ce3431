//! Best-effort signup throttling
//!
//! Process-local sliding window, keyed by `ip:email`. Lost on restart and
//! not shared across instances; an abuse throttle, not a security boundary.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Default attempt ceiling per key within the window
const DEFAULT_MAX_ATTEMPTS: usize = 3;

/// Default sliding window length
const DEFAULT_WINDOW: Duration = Duration::from_secs(60);

/// Sliding-window rate limiter over `ip:email` keys
pub struct RateLimiter {
    attempts: Mutex<HashMap<String, Vec<Instant>>>,
    max_attempts: usize,
    window: Duration,
}

impl RateLimiter {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Record an attempt for `key` and report whether it is allowed.
    ///
    /// Attempts older than the window are pruned on access.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut attempts = self.attempts.lock().unwrap();

        let entry = attempts.entry(key.to_string()).or_default();
        entry.retain(|t| now.duration_since(*t) < self.window);

        if entry.len() >= self.max_attempts {
            return false;
        }

        entry.push(now);
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS, DEFAULT_WINDOW)
    }
}
