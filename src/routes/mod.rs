//! HTTP routes for the waitlist service

mod confirm;
mod stats;
mod subscribe;

use std::sync::Arc;
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::email::EmailSender;
use crate::state::AppState;
use crate::store::SignupStore;

/// Create the router with all routes
pub fn create_router<S, E>(state: Arc<AppState<S, E>>) -> Router
where
    S: SignupStore + 'static,
    E: EmailSender + 'static,
{
    Router::new()
        .route("/subscribe", post(subscribe::subscribe))
        .route("/confirm", get(confirm::confirm))
        .route("/stats", get(stats::stats))
        .layer(TraceLayer::new_for_http())
        // Store and email calls block the request; fail instead of hanging
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .with_state(state)
}
