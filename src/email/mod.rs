//! Email sending abstractions

pub mod console;
pub mod smtp;
pub mod templates;

pub use console::ConsoleEmailSender;
pub use smtp::SmtpEmailSender;

/// Trait for sending waitlist emails
pub trait EmailSender: Send + Sync {
    /// Send the welcome email carrying the confirmation link
    fn send_welcome(&self, email: &str, confirmation_url: &str) -> Result<(), String>;

    /// Send the follow-up email after a signup is confirmed
    fn send_confirmed(&self, email: &str) -> Result<(), String>;
}

/// Allow using Box<dyn EmailSender> as an EmailSender
impl EmailSender for Box<dyn EmailSender> {
    fn send_welcome(&self, email: &str, confirmation_url: &str) -> Result<(), String> {
        (**self).send_welcome(email, confirmation_url)
    }

    fn send_confirmed(&self, email: &str) -> Result<(), String> {
        (**self).send_confirmed(email)
    }
}
