//! Service configuration

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Public base URL used to build confirmation links
    pub public_base_url: String,

    /// Path to the SQLite database; in-memory store when unset
    pub database_path: Option<String>,

    /// SMTP configuration for outbound email
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_email: String,
    pub from_name: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Recognized:
    /// - PORT (default: 3000)
    /// - PUBLIC_BASE_URL (default: http://localhost:3000)
    /// - DATABASE_PATH
    /// - SMTP_* (see [`SmtpConfig::from_env`])
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);

        let public_base_url = get_env("PUBLIC_BASE_URL")
            .unwrap_or_else(|| "http://localhost:3000".to_string());

        Self {
            port,
            public_base_url,
            database_path: get_env("DATABASE_PATH"),
            smtp: SmtpConfig::from_env(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            public_base_url: "http://localhost:3000".to_string(),
            database_path: None,
            smtp: None,
        }
    }
}

impl SmtpConfig {
    /// Create config from environment variables
    ///
    /// Required:
    /// - SMTP_HOST
    /// - SMTP_USERNAME
    /// - SMTP_PASSWORD
    /// - SMTP_FROM_EMAIL
    ///
    /// Optional:
    /// - SMTP_PORT (default: 465)
    /// - SMTP_FROM_NAME
    pub fn from_env() -> Option<Self> {
        let host = get_env("SMTP_HOST")?;
        let username = get_env("SMTP_USERNAME")?;
        let password = get_env("SMTP_PASSWORD")?;
        let from_email = get_env("SMTP_FROM_EMAIL")?;

        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(465);

        let from_name = std::env::var("SMTP_FROM_NAME").ok();

        Some(Self {
            host,
            port,
            username,
            password,
            from_email,
            from_name,
        })
    }
}

/// Get a non-empty environment variable
fn get_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}
