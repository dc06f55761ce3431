//! Common test utilities for waitlist integration tests

use std::sync::Arc;
use std::sync::RwLock;

use axum_test::TestServer;
use lumeo_waitlist::{routes, AppState, EmailSender, InMemorySignupStore, RateLimiter};

/// A captured outbound email
#[derive(Debug, Clone, PartialEq)]
pub enum SentEmail {
    Welcome { to: String, confirmation_url: String },
    Confirmed { to: String },
}

/// Mock email sender that captures outbound messages
#[derive(Default, Clone)]
pub struct MockEmailSender {
    pub sent: Arc<RwLock<Vec<SentEmail>>>,
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the last confirmation URL sent to an email
    pub fn welcome_url(&self, email: &str) -> Option<String> {
        self.sent
            .read()
            .unwrap()
            .iter()
            .rev()
            .find_map(|sent| match sent {
                SentEmail::Welcome {
                    to,
                    confirmation_url,
                } if to == email => Some(confirmation_url.clone()),
                _ => None,
            })
    }

    pub fn welcome_count(&self) -> usize {
        self.sent
            .read()
            .unwrap()
            .iter()
            .filter(|s| matches!(s, SentEmail::Welcome { .. }))
            .count()
    }

    pub fn confirmed_count(&self) -> usize {
        self.sent
            .read()
            .unwrap()
            .iter()
            .filter(|s| matches!(s, SentEmail::Confirmed { .. }))
            .count()
    }
}

impl EmailSender for MockEmailSender {
    fn send_welcome(&self, email: &str, confirmation_url: &str) -> Result<(), String> {
        self.sent.write().unwrap().push(SentEmail::Welcome {
            to: email.to_string(),
            confirmation_url: confirmation_url.to_string(),
        });
        Ok(())
    }

    fn send_confirmed(&self, email: &str) -> Result<(), String> {
        self.sent.write().unwrap().push(SentEmail::Confirmed {
            to: email.to_string(),
        });
        Ok(())
    }
}

/// Create a test server over an in-memory store and mock email sender
pub fn create_test_server() -> (TestServer, MockEmailSender, Arc<InMemorySignupStore>) {
    let store = Arc::new(InMemorySignupStore::new());
    let email_sender = MockEmailSender::new();

    let state = Arc::new(AppState::new(
        Arc::clone(&store),
        email_sender.clone(),
        "http://localhost:3000".to_string(),
        RateLimiter::default(),
    ));

    let app = routes::create_router(state);
    let server = TestServer::new(app).expect("Failed to create test server");

    (server, email_sender, store)
}

/// Extract the `token` query parameter from a confirmation URL
pub fn token_from_url(url: &str) -> String {
    url.split("token=")
        .nth(1)
        .and_then(|rest| rest.split('&').next())
        .expect("No token in confirmation URL")
        .to_string()
}
