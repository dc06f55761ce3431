//! Shared application state

use crate::email::EmailSender;
use crate::rate_limit::RateLimiter;
use crate::store::SignupStore;

/// Application state shared across request handlers.
///
/// Constructed once at startup and reused for the life of the process.
pub struct AppState<S, E> {
    /// Signup persistence
    pub store: S,
    /// Outbound email
    pub email_sender: E,
    /// Public base URL used to build confirmation links
    pub base_url: String,
    /// Best-effort signup throttle
    pub rate_limiter: RateLimiter,
}

impl<S, E> AppState<S, E>
where
    S: SignupStore,
    E: EmailSender,
{
    pub fn new(store: S, email_sender: E, base_url: String, rate_limiter: RateLimiter) -> Self {
        Self {
            store,
            email_sender,
            base_url,
            rate_limiter,
        }
    }
}
