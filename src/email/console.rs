//! Console-based email sender for development

use super::EmailSender;

/// Email sender that logs to console (for development)
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSender for ConsoleEmailSender {
    fn send_welcome(&self, email: &str, confirmation_url: &str) -> Result<(), String> {
        println!();
        println!("========================================");
        println!("  WELCOME EMAIL FOR: {}", email);
        println!("  CONFIRM AT: {}", confirmation_url);
        println!("========================================");
        println!();

        tracing::info!(email = %email, url = %confirmation_url, "Welcome email sent");

        Ok(())
    }

    fn send_confirmed(&self, email: &str) -> Result<(), String> {
        println!();
        println!("========================================");
        println!("  CONFIRMATION EMAIL FOR: {}", email);
        println!("========================================");
        println!();

        tracing::info!(email = %email, "Confirmation email sent");

        Ok(())
    }
}
