//! Lumeo Waitlist Service
//!
//! Collects early-access email signups, sends a confirmation link,
//! and marks signups confirmed when the link is visited.

pub mod config;
pub mod email;
pub mod error;
pub mod rate_limit;
pub mod routes;
pub mod state;
pub mod store;
pub mod token;

pub use config::{Config, SmtpConfig};
pub use email::{ConsoleEmailSender, EmailSender, SmtpEmailSender};
pub use error::WaitlistError;
pub use rate_limit::RateLimiter;
pub use state::AppState;
pub use store::{InMemorySignupStore, SignupStore, SqliteSignupStore};
