//! SMTP-based email sender for production

use lettre::{
    message::header::ContentType,
    transport::smtp::authentication::Credentials,
    Message, SmtpTransport, Transport,
};

use super::{templates, EmailSender};
use crate::config::SmtpConfig;

/// SMTP email sender for production use
pub struct SmtpEmailSender {
    transport: SmtpTransport,
    from_email: String,
    from_name: Option<String>,
}

impl SmtpEmailSender {
    /// Create a new SMTP email sender
    pub fn new(config: SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.username, config.password);

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
            .port(config.port)
            .credentials(creds)
            .build();

        // Test the connection
        transport
            .test_connection()
            .map_err(|e| format!("SMTP connection test failed: {}", e))?;

        tracing::info!(host = %config.host, port = config.port, "SMTP connection established");

        Ok(Self {
            transport,
            from_email: config.from_email,
            from_name: config.from_name,
        })
    }

    fn from_address(&self) -> String {
        match &self.from_name {
            Some(name) => format!("{} <{}>", name, self.from_email),
            None => self.from_email.clone(),
        }
    }

    fn send_email(&self, to: &str, subject: &str, body: String) -> Result<(), String> {
        let from = self
            .from_address()
            .parse()
            .map_err(|e| format!("Invalid from address: {}", e))?;

        let to_addr = to
            .parse()
            .map_err(|e| format!("Invalid to address: {}", e))?;

        let email = Message::builder()
            .from(from)
            .to(to_addr)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body)
            .map_err(|e| format!("Failed to build email: {}", e))?;

        self.transport
            .send(&email)
            .map_err(|e| format!("Failed to send email: {}", e))?;

        Ok(())
    }
}

impl EmailSender for SmtpEmailSender {
    fn send_welcome(&self, email: &str, confirmation_url: &str) -> Result<(), String> {
        self.send_email(
            email,
            templates::WELCOME_SUBJECT,
            templates::welcome_body(confirmation_url),
        )?;
        tracing::info!(email = %email, "Welcome email sent");
        Ok(())
    }

    fn send_confirmed(&self, email: &str) -> Result<(), String> {
        self.send_email(email, templates::CONFIRMED_SUBJECT, templates::confirmed_body())?;
        tracing::info!(email = %email, "Confirmation email sent");
        Ok(())
    }
}
