//! Lumeo Waitlist Service
//!
//! Collects early-access email signups, sends a confirmation link,
//! and marks signups confirmed when the link is visited.

use std::sync::Arc;

use anyhow::Result;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lumeo_waitlist::{
    routes, AppState, Config, ConsoleEmailSender, EmailSender, InMemorySignupStore, RateLimiter,
    SignupStore, SmtpEmailSender, SqliteSignupStore,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumeo_waitlist=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    tracing::info!(?config, "Loaded configuration");

    // Pick the signup store: SQLite when a database path is configured,
    // in-memory otherwise (signups are lost on restart).
    let store: Box<dyn SignupStore> = match &config.database_path {
        Some(path) => {
            tracing::info!(path = %path, "Using SQLite signup store");
            Box::new(SqliteSignupStore::open(path)?)
        }
        None => {
            tracing::warn!("No DATABASE_PATH set, using in-memory signup store");
            Box::new(InMemorySignupStore::new())
        }
    };

    // Pick the email sender: SMTP when configured, console otherwise.
    let email_sender: Box<dyn EmailSender> = match config.smtp.clone() {
        Some(smtp) => Box::new(
            SmtpEmailSender::new(smtp).map_err(|e| anyhow::anyhow!("SMTP setup failed: {e}"))?,
        ),
        None => {
            tracing::warn!("No SMTP configuration, emails will be logged to the console");
            Box::new(ConsoleEmailSender::new())
        }
    };

    // Create app state
    let state = Arc::new(AppState::new(
        store,
        email_sender,
        config.public_base_url.clone(),
        RateLimiter::default(),
    ));

    // Create router
    let app = routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Waitlist service listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
