//! In-memory storage implementation
//!
//! Used by tests and when no database path is configured.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use super::{NewSignup, Signup, SignupStats, SignupStore, StoreResult};
use crate::error::WaitlistError;

/// In-memory signup store keyed by lowercase email
pub struct InMemorySignupStore {
    signups: RwLock<HashMap<String, Signup>>,
}

impl InMemorySignupStore {
    pub fn new() -> Self {
        Self {
            signups: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemorySignupStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SignupStore for InMemorySignupStore {
    fn create(&self, new: NewSignup) -> StoreResult<Signup> {
        let mut signups = self.signups.write().unwrap();
        if signups.contains_key(&new.email) {
            return Err(WaitlistError::DuplicateSignup);
        }

        let signup = Signup {
            email: new.email.clone(),
            confirmation_token: new.confirmation_token,
            confirmed: false,
            confirmed_at: None,
            created_at: Utc::now(),
            source: new.source,
            user_agent: new.user_agent,
            ip_address: new.ip_address,
        };
        signups.insert(new.email, signup.clone());
        Ok(signup)
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<Signup>> {
        let normalized = email.to_lowercase();
        Ok(self.signups.read().unwrap().get(&normalized).cloned())
    }

    fn confirm(&self, email: &str, token: &str) -> StoreResult<()> {
        let normalized = email.to_lowercase();
        // Single write lock held across match-and-set, so the token is
        // consumed exactly once under concurrent confirms.
        let mut signups = self.signups.write().unwrap();

        match signups.get_mut(&normalized) {
            Some(signup) if !signup.confirmed && signup.confirmation_token == token => {
                signup.confirmed = true;
                signup.confirmed_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(WaitlistError::InvalidConfirmation),
        }
    }

    fn stats(&self) -> StoreResult<SignupStats> {
        let signups = self.signups.read().unwrap();
        let cutoff = Utc::now() - chrono::Duration::hours(24);

        Ok(SignupStats {
            total: signups.len() as u64,
            confirmed: signups.values().filter(|s| s.confirmed).count() as u64,
            recent: signups.values().filter(|s| s.created_at > cutoff).count() as u64,
        })
    }
}
