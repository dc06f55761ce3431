//! Confirmation-link endpoint

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::Redirect;
use serde::Deserialize;

use crate::email::EmailSender;
use crate::error::WaitlistError;
use crate::state::AppState;
use crate::store::SignupStore;

#[derive(Deserialize)]
pub struct ConfirmParams {
    pub token: Option<String>,
    pub email: Option<String>,
}

/// GET /confirm?token=...&email=...
/// Consume a confirmation token and redirect to the result page
pub async fn confirm<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
    Query(params): Query<ConfirmParams>,
) -> Redirect
where
    S: SignupStore,
    E: EmailSender,
{
    let (Some(token), Some(email)) = (params.token, params.email) else {
        return Redirect::to("/early-access?error=invalid_link");
    };

    let email = email.to_lowercase();

    match state.store.confirm(&email, &token) {
        Ok(()) => {}
        Err(WaitlistError::InvalidConfirmation) => {
            tracing::debug!(email = %email, "Confirmation rejected");
            return Redirect::to("/early-access?error=invalid_token");
        }
        Err(e) => {
            tracing::error!(email = %email, error = %e, "Confirmation store error");
            return Redirect::to("/early-access?error=invalid_token");
        }
    }

    // Confirmed; the follow-up email is best-effort
    if let Err(e) = state.email_sender.send_confirmed(&email) {
        tracing::warn!(email = %email, error = %e, "Confirmation email failed to send");
    }

    tracing::info!(email = %email, "Signup confirmed");

    Redirect::to("/confirmed")
}
