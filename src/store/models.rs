//! Data models for signup storage

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A waitlist signup record
#[derive(Debug, Clone)]
pub struct Signup {
    /// Lowercase-normalized email, unique across all records
    pub email: String,
    /// Single-use credential proving control of the email
    pub confirmation_token: String,
    pub confirmed: bool,
    /// Set the moment `confirmed` transitions to true
    pub confirmed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    /// Free-form attribution tag (which form submitted it)
    pub source: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Fields needed to insert a new pending signup
#[derive(Debug, Clone)]
pub struct NewSignup {
    /// Must already be lowercase-normalized
    pub email: String,
    pub confirmation_token: String,
    pub source: Option<String>,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
}

/// Aggregate signup counts
#[derive(Debug, Clone, Serialize)]
pub struct SignupStats {
    pub total: u64,
    pub confirmed: u64,
    /// Signups created in the last 24 hours
    pub recent: u64,
}
