//! Signup endpoint

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::email::EmailSender;
use crate::error::WaitlistError;
use crate::state::AppState;
use crate::store::{NewSignup, SignupStore};
use crate::token::{generate_confirmation_token, is_valid_email};

#[derive(Deserialize)]
pub struct SubscribeRequest {
    pub email: String,
    pub source: Option<String>,
}

#[derive(Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: String,
}

const MSG_CHECK_EMAIL: &str = "Check your email for the confirmation link.";
const MSG_ALREADY_CONFIRMED: &str = "You're already confirmed for early access.";

/// POST /subscribe
/// Register an email for early access and send the confirmation link
pub async fn subscribe<S, E>(
    State(state): State<Arc<AppState<S, E>>>,
    headers: HeaderMap,
    Json(req): Json<SubscribeRequest>,
) -> Result<Json<SubscribeResponse>, WaitlistError>
where
    S: SignupStore,
    E: EmailSender,
{
    if !is_valid_email(&req.email) {
        return Err(WaitlistError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    let email = req.email.to_lowercase();

    // Throttle per ip:email before touching the store
    let ip = client_ip(&headers);
    if !state.rate_limiter.check(&format!("{}:{}", ip, email)) {
        tracing::warn!(email = %email, ip = %ip, "Signup rate limit hit");
        return Err(WaitlistError::RateLimited);
    }

    // Repeat signups are idempotent: no second record, no resend
    if let Some(existing) = state.store.find_by_email(&email)? {
        let message = if existing.confirmed {
            MSG_ALREADY_CONFIRMED
        } else {
            MSG_CHECK_EMAIL
        };
        return Ok(Json(SubscribeResponse {
            success: true,
            message: message.to_string(),
        }));
    }

    let token = generate_confirmation_token();
    let user_agent = headers
        .get("user-agent")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let signup = match state.store.create(NewSignup {
        email: email.clone(),
        confirmation_token: token,
        source: Some(req.source.unwrap_or_else(|| "hero-form".to_string())),
        user_agent,
        ip_address: Some(ip),
    }) {
        Ok(signup) => signup,
        // Lost the race against a concurrent signup for the same email;
        // same outcome as the existence check above.
        Err(WaitlistError::DuplicateSignup) => {
            return Ok(Json(SubscribeResponse {
                success: true,
                message: MSG_CHECK_EMAIL.to_string(),
            }));
        }
        Err(e) => return Err(e),
    };

    // The signup is persisted; a failed send is logged, never surfaced
    let confirmation_url = format!(
        "{}/confirm?token={}&email={}",
        state.base_url,
        signup.confirmation_token,
        urlencoding::encode(&signup.email),
    );
    if let Err(e) = state.email_sender.send_welcome(&signup.email, &confirmation_url) {
        tracing::warn!(email = %signup.email, error = %e, "Welcome email failed to send");
    }

    tracing::info!(email = %signup.email, source = ?signup.source, "New signup");

    Ok(Json(SubscribeResponse {
        success: true,
        message: MSG_CHECK_EMAIL.to_string(),
    }))
}

/// Best-effort client IP: first X-Forwarded-For hop, "unknown" otherwise
fn client_ip(headers: &HeaderMap) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
